//! Encoding and decoding helpers between domain types and the plain values
//! stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings, roles as their lowercase names,
//! and small unsigned numbers as `INTEGER`.

use chrono::NaiveDate;
use trainlog_core::{
  user::{Role, User, UserRecord},
  workout::WorkoutEntry,
};

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::Decode(format!("bad date {s:?}: {e}")))
}

// ─── Role ────────────────────────────────────────────────────────────────────

pub fn decode_role(s: &str) -> Result<Role> {
  s.parse().map_err(|_| Error::Decode(format!("unknown role: {s:?}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `users` row.
pub struct RawUser {
  pub user_id:         String,
  pub name:            String,
  pub role:            String,
  pub password_hash:   String,
  pub profile_picture: Option<String>,
}

impl RawUser {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:         row.get(0)?,
      name:            row.get(1)?,
      role:            row.get(2)?,
      password_hash:   row.get(3)?,
      profile_picture: row.get(4)?,
    })
  }

  pub fn into_record(self) -> Result<UserRecord> {
    Ok(UserRecord {
      user:          User {
        user_id:         self.user_id,
        name:            self.name,
        role:            decode_role(&self.role)?,
        profile_picture: self.profile_picture,
      },
      password_hash: self.password_hash,
    })
  }
}

/// Raw values read directly from a `workouts` row.
pub struct RawWorkout {
  pub id:               i64,
  pub athlete_id:       String,
  pub date:             String,
  pub goal:             String,
  pub muscle_group:     String,
  pub exercise_type:    String,
  pub duration_minutes: i64,
  pub intensity:        i64,
  pub recorded_by:      String,
}

impl RawWorkout {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:               row.get(0)?,
      athlete_id:       row.get(1)?,
      date:             row.get(2)?,
      goal:             row.get(3)?,
      muscle_group:     row.get(4)?,
      exercise_type:    row.get(5)?,
      duration_minutes: row.get(6)?,
      intensity:        row.get(7)?,
      recorded_by:      row.get(8)?,
    })
  }

  pub fn into_entry(self) -> Result<WorkoutEntry> {
    let duration_minutes = u32::try_from(self.duration_minutes).map_err(|_| {
      Error::Decode(format!("duration out of range: {}", self.duration_minutes))
    })?;
    let intensity = u8::try_from(self.intensity).map_err(|_| {
      Error::Decode(format!("intensity out of range: {}", self.intensity))
    })?;

    Ok(WorkoutEntry {
      id: self.id,
      athlete_id: self.athlete_id,
      date: decode_date(&self.date)?,
      goal: self.goal,
      muscle_group: self.muscle_group,
      exercise_type: self.exercise_type,
      duration_minutes,
      intensity,
      recorded_by: decode_role(&self.recorded_by)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_text_form() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!(encode_date(d), "2024-01-05");
    assert_eq!(decode_date("2024-01-05").unwrap(), d);
    assert!(matches!(decode_date("05/01/2024"), Err(Error::Decode(_))));
  }

  #[test]
  fn negative_duration_does_not_decode() {
    let raw = RawWorkout {
      id:               1,
      athlete_id:       "a1".into(),
      date:             "2024-01-05".into(),
      goal:             String::new(),
      muscle_group:     String::new(),
      exercise_type:    "circuit".into(),
      duration_minutes: -1,
      intensity:        5,
      recorded_by:      "athlete".into(),
    };
    assert!(matches!(raw.into_entry(), Err(Error::Decode(_))));
  }
}
