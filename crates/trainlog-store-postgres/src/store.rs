//! [`PostgresStore`]: the Postgres implementation of [`TrainingStore`].

use chrono::NaiveDate;
use sqlx::{
  PgPool, Row as _,
  postgres::{PgPoolOptions, PgQueryResult},
};
use trainlog_core::{
  link::AthleteCoachLink,
  store::{TrainingStore, WriteOutcome},
  user::UserRecord,
  workout::{NewWorkout, WorkoutEntry},
};

use crate::{
  Error, Result,
  encode::{encode_date, user_from_row, workout_from_row},
  schema::SCHEMA,
};

/// A trainlog store backed by a hosted Postgres database.
///
/// Cloning is cheap; the pool is reference-counted.
#[derive(Clone)]
pub struct PostgresStore {
  pool: PgPool,
}

impl PostgresStore {
  /// Connect to `url` with at most `max_connections` pooled connections and
  /// run schema initialisation.
  pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(url)
      .await?;
    Self::from_pool(pool).await
  }

  /// Wrap an existing pool and run schema initialisation.
  pub async fn from_pool(pool: PgPool) -> Result<Self> {
    let store = Self { pool };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    for statement in SCHEMA {
      sqlx::query(*statement).execute(&self.pool).await?;
    }
    Ok(())
  }
}

fn outcome(result: PgQueryResult) -> WriteOutcome {
  if result.rows_affected() == 0 {
    WriteOutcome::AlreadyExists
  } else {
    WriteOutcome::Created
  }
}

impl TrainingStore for PostgresStore {
  type Error = Error;

  // ── Credentials ───────────────────────────────────────────────────────────

  async fn insert_user(&self, record: UserRecord) -> Result<WriteOutcome> {
    let UserRecord { user, password_hash } = record;

    let result = sqlx::query(
      "INSERT INTO users (user_id, name, role, password_hash, profile_picture)
       VALUES ($1, $2, $3, $4, $5)
       ON CONFLICT DO NOTHING",
    )
    .bind(&user.user_id)
    .bind(&user.name)
    .bind(user.role.as_str())
    .bind(&password_hash)
    .bind(&user.profile_picture)
    .execute(&self.pool)
    .await?;

    Ok(outcome(result))
  }

  async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>> {
    let row = sqlx::query(
      "SELECT user_id, name, role, password_hash, profile_picture
       FROM users WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(&self.pool)
    .await?;

    row.as_ref().map(user_from_row).transpose()
  }

  // ── Links ─────────────────────────────────────────────────────────────────

  async fn insert_link(&self, link: AthleteCoachLink) -> Result<WriteOutcome> {
    let result = sqlx::query(
      "INSERT INTO athlete_coach (athlete_id, coach_id) VALUES ($1, $2)
       ON CONFLICT DO NOTHING",
    )
    .bind(&link.athlete_id)
    .bind(&link.coach_id)
    .execute(&self.pool)
    .await?;

    Ok(outcome(result))
  }

  async fn link_exists(&self, athlete_id: &str, coach_id: &str) -> Result<bool> {
    let row = sqlx::query(
      "SELECT 1 FROM athlete_coach WHERE athlete_id = $1 AND coach_id = $2",
    )
    .bind(athlete_id)
    .bind(coach_id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.is_some())
  }

  async fn athletes_of(&self, coach_id: &str) -> Result<Vec<String>> {
    let rows = sqlx::query(
      "SELECT athlete_id FROM athlete_coach WHERE coach_id = $1 ORDER BY linked_seq",
    )
    .bind(coach_id)
    .fetch_all(&self.pool)
    .await?;

    rows
      .iter()
      .map(|row| row.try_get::<String, _>("athlete_id").map_err(Error::from))
      .collect()
  }

  // ── Workouts ──────────────────────────────────────────────────────────────

  async fn append_workout(
    &self,
    input: NewWorkout,
    date: NaiveDate,
  ) -> Result<WorkoutEntry> {
    let row = sqlx::query(
      "INSERT INTO workouts (
         athlete_id, date, goal, muscle_group, exercise_type,
         duration_minutes, intensity, recorded_by
       ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
       RETURNING id",
    )
    .bind(&input.athlete_id)
    .bind(encode_date(date))
    .bind(&input.goal)
    .bind(&input.muscle_group)
    .bind(&input.exercise_type)
    .bind(i64::from(input.duration_minutes))
    .bind(i16::from(input.intensity))
    .bind(input.recorded_by.as_str())
    .fetch_one(&self.pool)
    .await?;

    let id: i64 = row.try_get("id")?;
    Ok(input.into_entry(id, date))
  }

  async fn workouts_for(&self, athlete_id: &str) -> Result<Vec<WorkoutEntry>> {
    let rows = sqlx::query(
      "SELECT id, athlete_id, date, goal, muscle_group, exercise_type,
              duration_minutes, intensity, recorded_by
       FROM workouts WHERE athlete_id = $1 ORDER BY id",
    )
    .bind(athlete_id)
    .fetch_all(&self.pool)
    .await?;

    rows.iter().map(workout_from_row).collect()
  }
}
