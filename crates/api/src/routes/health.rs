use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status (`OK` / `degraded`).
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /health -- returns service status, reflecting a database ping.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = wayfarer_db::health_check(&state.pool).await.is_ok();

    let (status, message) = if db_healthy {
        ("OK", "Server is running")
    } else {
        ("degraded", "Database is unreachable")
    };

    Json(HealthResponse { status, message })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
