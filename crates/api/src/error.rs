use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wayfarer_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP- and gateway-specific
/// variants. Implements [`IntoResponse`] to produce consistent
/// `{ "error": .., "code": .. }` JSON bodies; internal detail is logged
/// server-side and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wayfarer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Reverse geocoding could not resolve the coordinates.
    #[error("Geocoding failed: {0}")]
    GeocodeFailed(String),

    /// The suggestion service has no API credential configured.
    #[error("Suggestion service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The generative-text call failed.
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// The generative reply was not parseable as suggestion JSON.
    #[error("Failed to parse AI suggestions")]
    MalformedSuggestion {
        /// Raw reply text, attached to the response for diagnostics.
        raw: String,
    },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Duplicate(msg) => (StatusCode::BAD_REQUEST, "DUPLICATE", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            // --- Suggestion gateway errors ---
            AppError::GeocodeFailed(msg) => {
                tracing::warn!(error = %msg, "Reverse geocoding failed");
                (
                    StatusCode::BAD_REQUEST,
                    "GEOCODE_FAILED",
                    "Could not determine location name from coordinates".to_string(),
                )
            }
            AppError::ServiceUnavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVICE_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Generative-text call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    "Suggestion service request failed".to_string(),
                )
            }
            AppError::MalformedSuggestion { raw } => {
                tracing::error!(raw = %raw, "Unparseable generative reply");
                let body = json!({
                    "error": "Failed to parse AI suggestions",
                    "code": "MALFORMED_SUGGESTION",
                    "raw": raw,
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - A unique-constraint violation on `uq_users_email` maps to the same 400
///   the registration pre-check produces, so the race loser sees an
///   identical response.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_users_email")
            {
                return (
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE",
                    "User already exists".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
