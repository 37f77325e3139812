//! Handlers for `/athletes/{id}/…` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/athletes/{id}/access` | `{"allowed": bool}` for the caller |
//! | `GET`  | `/athletes/{id}/workouts` | History; 403 without access |
//! | `POST` | `/athletes/{id}/workouts` | Body: [`RecordBody`]; 201 + stored entry |
//!
//! The access check itself happens inside [`Logbook`]; handlers only pass the
//! caller's id along. Recording checks access before it looks at the body, so
//! a caller without access gets 403 whatever they send.

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use trainlog_core::{
  Error as CoreError, Logbook,
  store::TrainingStore,
  user::Role,
  workout::{NewWorkout, WorkoutEntry},
};

use crate::{auth::Caller, error::ApiError};

// ─── Access ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AccessResponse {
  pub allowed: bool,
}

/// `GET /athletes/{id}/access`
pub async fn access<S>(
  State(logbook): State<Arc<Logbook<S>>>,
  caller: Caller,
  Path(athlete_id): Path<String>,
) -> Result<Json<AccessResponse>, ApiError>
where
  S: TrainingStore + 'static,
{
  let allowed = logbook.has_access(&caller.user_id, &athlete_id).await?;
  Ok(Json(AccessResponse { allowed }))
}

// ─── History ──────────────────────────────────────────────────────────────────

/// `GET /athletes/{id}/workouts`
pub async fn history<S>(
  State(logbook): State<Arc<Logbook<S>>>,
  caller: Caller,
  Path(athlete_id): Path<String>,
) -> Result<Json<Vec<WorkoutEntry>>, ApiError>
where
  S: TrainingStore + 'static,
{
  Ok(Json(logbook.history(&caller.user_id, &athlete_id).await?))
}

// ─── Record ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /athletes/{id}/workouts`.
#[derive(Debug, Deserialize)]
pub struct RecordBody {
  #[serde(default)]
  pub goal:             String,
  #[serde(default)]
  pub muscle_group:     String,
  pub exercise_type:    String,
  pub duration_minutes: u32,
  pub intensity:        u8,
  /// Defaults to the caller's role.
  pub recorded_by:      Option<Role>,
}

/// `POST /athletes/{id}/workouts`: returns 201 + the stored entry.
pub async fn record<S>(
  State(logbook): State<Arc<Logbook<S>>>,
  caller: Caller,
  Path(athlete_id): Path<String>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrainingStore + 'static,
{
  if !logbook.has_access(&caller.user_id, &athlete_id).await? {
    return Err(ApiError::from(CoreError::AccessDenied {
      requester: caller.user_id,
      athlete:   athlete_id,
    }));
  }
  let body: RecordBody = serde_json::from_slice(&body)?;

  let input = NewWorkout {
    athlete_id,
    goal: body.goal,
    muscle_group: body.muscle_group,
    exercise_type: body.exercise_type,
    duration_minutes: body.duration_minutes,
    intensity: body.intensity,
    recorded_by: body.recorded_by.unwrap_or(caller.profile.role),
  };

  let entry = logbook.record_workout(&caller.user_id, input).await?;
  Ok((StatusCode::CREATED, Json(entry)))
}
