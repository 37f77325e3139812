//! Conversions between Postgres rows and domain types.

use chrono::NaiveDate;
use sqlx::{Row as _, postgres::PgRow};
use trainlog_core::{
  user::{Role, User, UserRecord},
  workout::WorkoutEntry,
};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::Decode(format!("bad date {s:?}: {e}")))
}

pub fn decode_role(s: &str) -> Result<Role> {
  s.parse().map_err(|_| Error::Decode(format!("unknown role: {s:?}")))
}

/// Decode a `users` row selected with all five columns.
pub fn user_from_row(row: &PgRow) -> Result<UserRecord> {
  let role: String = row.try_get("role")?;
  Ok(UserRecord {
    user:          User {
      user_id:         row.try_get("user_id")?,
      name:            row.try_get("name")?,
      role:            decode_role(&role)?,
      profile_picture: row.try_get("profile_picture")?,
    },
    password_hash: row.try_get("password_hash")?,
  })
}

/// Decode a full `workouts` row.
pub fn workout_from_row(row: &PgRow) -> Result<WorkoutEntry> {
  let date: String = row.try_get("date")?;
  let recorded_by: String = row.try_get("recorded_by")?;
  let duration: i64 = row.try_get("duration_minutes")?;
  let intensity: i16 = row.try_get("intensity")?;

  Ok(WorkoutEntry {
    id:               row.try_get("id")?,
    athlete_id:       row.try_get("athlete_id")?,
    date:             decode_date(&date)?,
    goal:             row.try_get("goal")?,
    muscle_group:     row.try_get("muscle_group")?,
    exercise_type:    row.try_get("exercise_type")?,
    duration_minutes: u32::try_from(duration)
      .map_err(|_| Error::Decode(format!("duration out of range: {duration}")))?,
    intensity:        u8::try_from(intensity)
      .map_err(|_| Error::Decode(format!("intensity out of range: {intensity}")))?,
    recorded_by:      decode_role(&recorded_by)?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dates_match_sqlite_text_form() {
    let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    assert_eq!(encode_date(d), "2023-12-31");
    assert_eq!(decode_date(&encode_date(d)).unwrap(), d);
  }

  #[test]
  fn unknown_role_is_a_decode_error() {
    assert!(matches!(decode_role("admin"), Err(Error::Decode(_))));
  }
}
