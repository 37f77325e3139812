//! PostgreSQL backend for trainlog.
//!
//! Holds a bounded [`sqlx::PgPool`]; every [`TrainingStore`] call checks a
//! connection out for the duration of a single statement.
//!
//! [`TrainingStore`]: trainlog_core::store::TrainingStore

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::PostgresStore;
