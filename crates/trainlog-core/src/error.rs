//! Error types for `trainlog-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A user with this id already exists, or the athlete/coach pair is
  /// already linked.
  #[error("duplicate key: {0}")]
  DuplicateKey(String),

  /// Unknown user id or wrong password. The two are deliberately
  /// indistinguishable.
  #[error("authentication failed")]
  AuthFailed,

  #[error("access denied: {requester} may not access workouts of {athlete}")]
  AccessDenied { requester: String, athlete: String },

  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("password hashing error: {0}")]
  Hash(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error. Storage failures are the only unexpected outcome
  /// the core reports.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
