//! Handler for the `/ai/suggestions` gateway.
//!
//! Stateless passthrough: resolve the location if only coordinates were
//! given, prompt the generative service, parse its reply. No persistence,
//! no ownership check, no authentication, and no retry on a malformed
//! reply.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use wayfarer_core::error::CoreError;
use wayfarer_core::suggestion::{build_prompt, parse_suggestions, PlaceSuggestion};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Request body for `POST /ai/suggestions`: a location name, or coordinates.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Successful suggestion response.
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    /// The location the suggestions are for (as supplied, or as resolved
    /// from the coordinates).
    pub location: String,
    pub suggestions: Vec<PlaceSuggestion>,
}

/// POST /api/v1/ai/suggestions
pub async fn suggestions(
    State(state): State<AppState>,
    Json(input): Json<SuggestionRequest>,
) -> AppResult<Json<SuggestionResponse>> {
    let location = match input.location.filter(|l| !l.trim().is_empty()) {
        Some(location) => location,
        None => match (input.latitude, input.longitude) {
            (Some(lat), Some(lon)) => {
                // Geocode failure means no suggestion attempt at all.
                let resolved = state
                    .geocode
                    .reverse(lat, lon)
                    .await
                    .map_err(|e| AppError::GeocodeFailed(e.to_string()))?;
                tracing::debug!(latitude = lat, longitude = lon, %resolved, "Resolved coordinates");
                resolved
            }
            _ => {
                return Err(AppError::Core(CoreError::Validation(
                    "Location or coordinates are required".into(),
                )))
            }
        },
    };

    let gemini = state.gemini.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Gemini API key not configured".to_string())
    })?;

    let reply = gemini
        .generate(&build_prompt(&location))
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let suggestions =
        parse_suggestions(&reply).map_err(|e| AppError::MalformedSuggestion { raw: e.raw })?;

    Ok(Json(SuggestionResponse {
        location,
        suggestions,
    }))
}
