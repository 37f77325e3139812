//! SQL schema for the trainlog SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// There are no foreign keys: whether an id names a user of the right role is
/// checked by the logbook, not by the store.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS users (
    user_id         TEXT PRIMARY KEY,
    name            TEXT NOT NULL,
    role            TEXT NOT NULL,   -- 'athlete' | 'coach'
    password_hash   TEXT NOT NULL,   -- argon2 PHC string
    profile_picture TEXT
);

-- Directed: the coach may see the athlete's workouts.
CREATE TABLE IF NOT EXISTS athlete_coach (
    athlete_id TEXT NOT NULL,
    coach_id   TEXT NOT NULL,
    PRIMARY KEY (athlete_id, coach_id)
);

-- Workouts are strictly append-only.
CREATE TABLE IF NOT EXISTS workouts (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    athlete_id       TEXT    NOT NULL,
    date             TEXT    NOT NULL,   -- YYYY-MM-DD, assigned when saved
    goal             TEXT    NOT NULL DEFAULT '',
    muscle_group     TEXT    NOT NULL DEFAULT '',
    exercise_type    TEXT    NOT NULL,
    duration_minutes INTEGER NOT NULL,
    intensity        INTEGER NOT NULL,
    recorded_by      TEXT    NOT NULL    -- 'athlete' | 'coach'
);

CREATE INDEX IF NOT EXISTS workouts_athlete_idx ON workouts(athlete_id);
CREATE INDEX IF NOT EXISTS athlete_coach_coach_idx ON athlete_coach(coach_id);

PRAGMA user_version = 1;
";
