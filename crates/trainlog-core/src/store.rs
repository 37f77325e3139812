//! The `TrainingStore` trait.
//!
//! The trait is the capability set a storage backend must provide (e.g.
//! `trainlog-store-sqlite`, `trainlog-store-postgres`). It is deliberately
//! dumb: no hashing, no authorization, no validation. Those live once, in
//! [`crate::Logbook`], so every backend behaves the same.

use std::future::Future;

use chrono::NaiveDate;

use crate::{
  link::AthleteCoachLink,
  user::UserRecord,
  workout::{NewWorkout, WorkoutEntry},
};

/// Result of an insert guarded by a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
  Created,
  /// The key was already present; nothing was written.
  AlreadyExists,
}

/// Abstraction over a trainlog storage backend.
///
/// Every method is a single self-contained request against durable storage.
/// Uniqueness is enforced by the backend's own constraints, so concurrent
/// duplicate inserts resolve as first-writer-wins.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TrainingStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Credentials ───────────────────────────────────────────────────────

  /// Persist a new user. Returns [`WriteOutcome::AlreadyExists`] if the
  /// `user_id` is taken, leaving the existing row untouched.
  fn insert_user(
    &self,
    record: UserRecord,
  ) -> impl Future<Output = Result<WriteOutcome, Self::Error>> + Send + '_;

  /// Look up a user by id. Returns `None` if not found.
  fn get_user<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Option<UserRecord>, Self::Error>> + Send + 'a;

  // ── Links ─────────────────────────────────────────────────────────────

  /// Persist a directed athlete → coach link.
  fn insert_link(
    &self,
    link: AthleteCoachLink,
  ) -> impl Future<Output = Result<WriteOutcome, Self::Error>> + Send + '_;

  /// Whether the exact (athlete, coach) pair exists.
  fn link_exists<'a>(
    &'a self,
    athlete_id: &'a str,
    coach_id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Ids of every athlete linked to `coach_id`, in link order.
  fn athletes_of<'a>(
    &'a self,
    coach_id: &'a str,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + 'a;

  // ── Workouts (append-only) ────────────────────────────────────────────

  /// Append a workout dated `date` and return it with its assigned id.
  fn append_workout(
    &self,
    input: NewWorkout,
    date: NaiveDate,
  ) -> impl Future<Output = Result<WorkoutEntry, Self::Error>> + Send + '_;

  /// All workouts for `athlete_id` in insertion order. Empty if none.
  fn workouts_for<'a>(
    &'a self,
    athlete_id: &'a str,
  ) -> impl Future<Output = Result<Vec<WorkoutEntry>, Self::Error>> + Send + 'a;
}
