//! Request extractors whose rejections render through [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`].
///
/// Axum's own extractor answers a malformed body with a plain-text
/// rejection; routing the rejection through [`AppError`] keeps every
/// boundary failure in the `{ error, code }` JSON shape.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
