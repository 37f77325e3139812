//! Handlers for `/links` endpoints. Only coaches create links, and always
//! with themselves as the coach.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/links` | Body: `{"athlete_id":"..."}`; 201, 409 if already linked |
//! | `GET`  | `/links/athletes` | Athletes linked to the caller |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use trainlog_core::{Logbook, store::TrainingStore, user::Role};

use crate::{auth::Caller, body::JsonBody, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct LinkBody {
  pub athlete_id: String,
}

/// `POST /links`: link `athlete_id` to the calling coach.
pub async fn create<S>(
  State(logbook): State<Arc<Logbook<S>>>,
  caller: Caller,
  JsonBody(body): JsonBody<LinkBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrainingStore + 'static,
{
  if caller.profile.role != Role::Coach {
    return Err(ApiError::Forbidden("only coaches can link athletes".into()));
  }

  let link = logbook
    .link_athlete_to_coach(&body.athlete_id, &caller.user_id)
    .await?;
  Ok((StatusCode::CREATED, Json(link)))
}

/// `GET /links/athletes`
pub async fn athletes<S>(
  State(logbook): State<Arc<Logbook<S>>>,
  caller: Caller,
) -> Result<Json<Vec<String>>, ApiError>
where
  S: TrainingStore + 'static,
{
  Ok(Json(logbook.linked_athletes(&caller.user_id).await?))
}
