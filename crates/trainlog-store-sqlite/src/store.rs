//! [`SqliteStore`]: the SQLite implementation of [`TrainingStore`].

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::OptionalExtension as _;
use trainlog_core::{
  link::AthleteCoachLink,
  store::{TrainingStore, WriteOutcome},
  user::UserRecord,
  workout::{NewWorkout, WorkoutEntry},
};

use crate::{
  Error, Result,
  encode::{RawUser, RawWorkout, encode_date},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trainlog store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn outcome(rows_changed: usize) -> WriteOutcome {
  if rows_changed == 0 {
    WriteOutcome::AlreadyExists
  } else {
    WriteOutcome::Created
  }
}

const WORKOUT_COLUMNS: &str = "id, athlete_id, date, goal, muscle_group, \
                               exercise_type, duration_minutes, intensity, \
                               recorded_by";

// ─── TrainingStore impl ──────────────────────────────────────────────────────

impl TrainingStore for SqliteStore {
  type Error = Error;

  // ── Credentials ───────────────────────────────────────────────────────────

  async fn insert_user(&self, record: UserRecord) -> Result<WriteOutcome> {
    let UserRecord { user, password_hash } = record;
    let role = user.role.as_str();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO users (user_id, name, role, password_hash, profile_picture)
           VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT DO NOTHING",
          rusqlite::params![
            user.user_id,
            user.name,
            role,
            password_hash,
            user.profile_picture,
          ],
        )?)
      })
      .await?;

    Ok(outcome(changed))
  }

  async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>> {
    let id = user_id.to_owned();

    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT user_id, name, role, password_hash, profile_picture
             FROM users WHERE user_id = ?1",
            rusqlite::params![id],
            RawUser::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawUser::into_record).transpose()
  }

  // ── Links ─────────────────────────────────────────────────────────────────

  async fn insert_link(&self, link: AthleteCoachLink) -> Result<WriteOutcome> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO athlete_coach (athlete_id, coach_id) VALUES (?1, ?2)
           ON CONFLICT DO NOTHING",
          rusqlite::params![link.athlete_id, link.coach_id],
        )?)
      })
      .await?;

    Ok(outcome(changed))
  }

  async fn link_exists(&self, athlete_id: &str, coach_id: &str) -> Result<bool> {
    let athlete = athlete_id.to_owned();
    let coach   = coach_id.to_owned();

    let exists = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM athlete_coach WHERE athlete_id = ?1 AND coach_id = ?2",
              rusqlite::params![athlete, coach],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    Ok(exists)
  }

  async fn athletes_of(&self, coach_id: &str) -> Result<Vec<String>> {
    let coach = coach_id.to_owned();

    let athletes = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT athlete_id FROM athlete_coach WHERE coach_id = ?1 ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![coach], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(athletes)
  }

  // ── Workouts ──────────────────────────────────────────────────────────────

  async fn append_workout(
    &self,
    input: NewWorkout,
    date: NaiveDate,
  ) -> Result<WorkoutEntry> {
    let athlete_id    = input.athlete_id.clone();
    let date_str      = encode_date(date);
    let goal          = input.goal.clone();
    let muscle_group  = input.muscle_group.clone();
    let exercise_type = input.exercise_type.clone();
    let duration      = i64::from(input.duration_minutes);
    let intensity     = i64::from(input.intensity);
    let recorded_by   = input.recorded_by.as_str();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO workouts (
             athlete_id, date, goal, muscle_group, exercise_type,
             duration_minutes, intensity, recorded_by
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            athlete_id,
            date_str,
            goal,
            muscle_group,
            exercise_type,
            duration,
            intensity,
            recorded_by,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_entry(id, date))
  }

  async fn workouts_for(&self, athlete_id: &str) -> Result<Vec<WorkoutEntry>> {
    let athlete = athlete_id.to_owned();

    let raws: Vec<RawWorkout> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE athlete_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![athlete], RawWorkout::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawWorkout::into_entry).collect()
  }
}
