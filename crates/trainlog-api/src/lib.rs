//! JSON REST API for trainlog.
//!
//! Exposes an axum [`Router`] backed by a [`Logbook`] over any
//! [`TrainingStore`]. Callers authenticate with HTTP Basic on every request;
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", trainlog_api::api_router(Arc::new(Logbook::new(store))))
//! ```

pub mod auth;
pub mod body;
pub mod error;
pub mod links;
pub mod users;
pub mod workouts;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;
use trainlog_core::{Logbook, store::TrainingStore};

pub use auth::Caller;
pub use error::ApiError;

/// Build a fully-materialised API router for `logbook`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(logbook: Arc<Logbook<S>>) -> Router<()>
where
  S: TrainingStore + 'static,
{
  Router::new()
    // Users
    .route("/users", post(users::register::<S>))
    .route("/me", get(users::me))
    // Links
    .route("/links", post(links::create::<S>))
    .route("/links/athletes", get(links::athletes::<S>))
    // Workouts
    .route("/athletes/{id}/access", get(workouts::access::<S>))
    .route(
      "/athletes/{id}/workouts",
      get(workouts::history::<S>).post(workouts::record::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(logbook)
}
