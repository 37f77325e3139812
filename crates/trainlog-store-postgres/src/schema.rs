//! SQL schema for the trainlog Postgres store.
//!
//! Same logical shape as the SQLite backend. Postgres prepared statements
//! cannot carry several commands, so the DDL is a list run in order.

/// Idempotent DDL, executed at pool startup.
pub const SCHEMA: &[&str] = &[
  "CREATE TABLE IF NOT EXISTS users (
       user_id         TEXT PRIMARY KEY,
       name            TEXT NOT NULL,
       role            TEXT NOT NULL,
       password_hash   TEXT NOT NULL,
       profile_picture TEXT
   )",
  // `linked_seq` only orders a coach's athlete list.
  "CREATE TABLE IF NOT EXISTS athlete_coach (
       athlete_id TEXT      NOT NULL,
       coach_id   TEXT      NOT NULL,
       linked_seq BIGSERIAL NOT NULL,
       PRIMARY KEY (athlete_id, coach_id)
   )",
  "CREATE TABLE IF NOT EXISTS workouts (
       id               BIGSERIAL PRIMARY KEY,
       athlete_id       TEXT     NOT NULL,
       date             TEXT     NOT NULL,
       goal             TEXT     NOT NULL DEFAULT '',
       muscle_group     TEXT     NOT NULL DEFAULT '',
       exercise_type    TEXT     NOT NULL,
       duration_minutes BIGINT   NOT NULL,
       intensity        SMALLINT NOT NULL,
       recorded_by      TEXT     NOT NULL
   )",
  "CREATE INDEX IF NOT EXISTS workouts_athlete_idx ON workouts(athlete_id)",
  "CREATE INDEX IF NOT EXISTS athlete_coach_coach_idx ON athlete_coach(coach_id)",
];
