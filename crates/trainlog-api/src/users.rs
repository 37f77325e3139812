//! Handlers for `/users` and `/me`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/users` | Unauthenticated. Body: [`NewUser`]; 201, or 409 if the id is taken |
//! | `GET`  | `/me` | The caller's own profile |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use trainlog_core::{Logbook, store::TrainingStore, user::NewUser};

use crate::{auth::Caller, body::JsonBody, error::ApiError};

/// `POST /users`: returns 201 + the public [`User`](trainlog_core::user::User).
pub async fn register<S>(
  State(logbook): State<Arc<Logbook<S>>>,
  JsonBody(body): JsonBody<NewUser>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TrainingStore + 'static,
{
  let user = logbook.register(body).await?;
  Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /me`
pub async fn me(caller: Caller) -> Json<Caller> { Json(caller) }
