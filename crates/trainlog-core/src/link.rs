//! Athlete → coach links.
//!
//! A link is directed: it grants the coach access to the athlete's workouts
//! and nothing in the other direction. Links are append-only.

use serde::{Deserialize, Serialize};

/// One row of the `athlete_coach` relation. The pair is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AthleteCoachLink {
  pub athlete_id: String,
  pub coach_id:   String,
}

impl AthleteCoachLink {
  pub fn new(athlete_id: impl Into<String>, coach_id: impl Into<String>) -> Self {
    Self { athlete_id: athlete_id.into(), coach_id: coach_id.into() }
  }
}
