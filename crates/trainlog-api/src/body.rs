//! JSON request bodies whose rejections are reported as [`ApiError`].

use axum::extract::FromRequest;

use crate::error::ApiError;

/// Like [`axum::Json`], but a missing, malformed or ill-typed body is a 400
/// with the usual `{"error": ...}` payload.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
