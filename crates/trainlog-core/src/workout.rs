//! Workout entries: the append-only ledger rows.
//!
//! An entry is never updated or deleted. Its `id` and `date` are assigned when
//! it is saved; callers supply everything else through [`NewWorkout`].

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, user::Role};

/// Accepted values for [`WorkoutEntry::intensity`].
pub const INTENSITY_RANGE: RangeInclusive<u8> = 1..=10;

/// A recorded training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
  /// Storage-assigned, increasing in insertion order.
  pub id:               i64,
  pub athlete_id:       String,
  /// The calendar day the entry was saved.
  pub date:             NaiveDate,
  pub goal:             String,
  pub muscle_group:     String,
  pub exercise_type:    String,
  pub duration_minutes: u32,
  /// 1 (easy) to 10 (maximal).
  pub intensity:        u8,
  /// Who entered the workout; not an identity reference.
  pub recorded_by:      Role,
}

/// Input to [`crate::Logbook::record_workout`] and
/// [`crate::store::TrainingStore::append_workout`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewWorkout {
  pub athlete_id:       String,
  #[serde(default)]
  pub goal:             String,
  #[serde(default)]
  pub muscle_group:     String,
  pub exercise_type:    String,
  pub duration_minutes: u32,
  pub intensity:        u8,
  pub recorded_by:      Role,
}

impl NewWorkout {
  /// Range and presence checks. Negative durations are unrepresentable.
  pub fn validate(&self) -> Result<()> {
    if self.athlete_id.trim().is_empty() {
      return Err(Error::InvalidInput("athlete_id must not be empty".into()));
    }
    if self.exercise_type.trim().is_empty() {
      return Err(Error::InvalidInput("exercise_type must not be empty".into()));
    }
    if !INTENSITY_RANGE.contains(&self.intensity) {
      return Err(Error::InvalidInput(format!(
        "intensity must be between {} and {}, got {}",
        INTENSITY_RANGE.start(),
        INTENSITY_RANGE.end(),
        self.intensity
      )));
    }
    Ok(())
  }

  /// Build the stored entry once the ledger has assigned `id` and `date`.
  pub fn into_entry(self, id: i64, date: NaiveDate) -> WorkoutEntry {
    WorkoutEntry {
      id,
      athlete_id: self.athlete_id,
      date,
      goal: self.goal,
      muscle_group: self.muscle_group,
      exercise_type: self.exercise_type,
      duration_minutes: self.duration_minutes,
      intensity: self.intensity,
      recorded_by: self.recorded_by,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn squat_day() -> NewWorkout {
    NewWorkout {
      athlete_id:       "a1".into(),
      goal:             "strength".into(),
      muscle_group:     "legs".into(),
      exercise_type:    "straight sets".into(),
      duration_minutes: 45,
      intensity:        8,
      recorded_by:      Role::Athlete,
    }
  }

  #[test]
  fn valid_workout_passes() {
    assert!(squat_day().validate().is_ok());
  }

  #[test]
  fn intensity_bounds() {
    for ok in [1, 10] {
      let w = NewWorkout { intensity: ok, ..squat_day() };
      assert!(w.validate().is_ok(), "intensity {ok} should be accepted");
    }
    for bad in [0, 11, 255] {
      let w = NewWorkout { intensity: bad, ..squat_day() };
      assert!(matches!(w.validate(), Err(Error::InvalidInput(_))));
    }
  }

  #[test]
  fn zero_duration_is_allowed() {
    let w = NewWorkout { duration_minutes: 0, ..squat_day() };
    assert!(w.validate().is_ok());
  }

  #[test]
  fn blank_exercise_type_rejected() {
    let w = NewWorkout { exercise_type: "  ".into(), ..squat_day() };
    assert!(matches!(w.validate(), Err(Error::InvalidInput(_))));
  }

  #[test]
  fn negative_duration_fails_to_deserialize() {
    let json = r#"{"athlete_id":"a1","exercise_type":"circuit",
      "duration_minutes":-5,"intensity":5,"recorded_by":"athlete"}"#;
    assert!(serde_json::from_str::<NewWorkout>(json).is_err());
  }

  #[test]
  fn into_entry_keeps_fields() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let entry = squat_day().into_entry(7, date);
    assert_eq!(entry.id, 7);
    assert_eq!(entry.date, date);
    assert_eq!(entry.exercise_type, "straight sets");
    assert_eq!(entry.intensity, 8);
  }
}
