//! HTTP Basic-auth extractor.
//!
//! Every authenticated request carries its own credentials; the resulting
//! [`Caller`] is handed to each core call explicitly. Nothing is remembered
//! between requests.

use std::sync::Arc;

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use serde::Serialize;
use trainlog_core::{Logbook, store::TrainingStore, user::Profile};

use crate::error::ApiError;

/// The authenticated identity behind a request.
#[derive(Debug, Clone, Serialize)]
pub struct Caller {
  pub user_id: String,
  #[serde(flatten)]
  pub profile: Profile,
}

/// Pull `(user_id, password)` out of an `Authorization: Basic …` header.
pub fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), ApiError> {
  let header_val = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(ApiError::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(ApiError::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| ApiError::Unauthorized)?;
  let creds   = String::from_utf8(decoded).map_err(|_| ApiError::Unauthorized)?;

  let (user_id, password) = creds.split_once(':').ok_or(ApiError::Unauthorized)?;
  Ok((user_id.to_owned(), password.to_owned()))
}

impl<S> FromRequestParts<Arc<Logbook<S>>> for Caller
where
  S: TrainingStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    logbook: &Arc<Logbook<S>>,
  ) -> Result<Self, Self::Rejection> {
    let (user_id, password) = basic_credentials(&parts.headers)?;

    match logbook.sign_in(&user_id, &password).await {
      Ok(profile) => Ok(Caller { user_id, profile }),
      Err(e) => {
        if matches!(e, trainlog_core::Error::AuthFailed) {
          tracing::warn!(user_id = %user_id, "authentication failed");
        }
        Err(e.into())
      }
    }
  }
}
