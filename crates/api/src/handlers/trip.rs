//! Handlers for the `/trip` resource.
//!
//! Every handler takes [`AuthUser`]; the owner filter always derives from
//! the session, never from the request body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use validator::Validate;
use wayfarer_core::error::CoreError;
use wayfarer_core::types::DbId;
use wayfarer_db::models::trip::{CreateTrip, NewTrip, Trip, UpdateTrip};
use wayfarer_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for trip creation.
#[derive(Debug, Serialize)]
pub struct CreatedTripResponse {
    pub trip: Trip,
    pub message: &'static str,
}

/// Response body for trip updates.
#[derive(Debug, Serialize)]
pub struct UpdatedTripResponse {
    pub trip: Trip,
}

/// Plain `{ message }` response (deletion).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /api/v1/trip
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<CreatedTripResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    let start_date = input
        .start_date
        .ok_or_else(|| AppError::Core(CoreError::Validation("startDate is required".into())))?;
    let end_date = input
        .end_date
        .ok_or_else(|| AppError::Core(CoreError::Validation("endDate is required".into())))?;

    let trip = TripRepo::create(
        &state.pool,
        &NewTrip {
            user_id: user.user_id,
            title: input.title,
            destination: input.destination,
            description: input.description,
            start_date,
            end_date,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedTripResponse {
            trip,
            message: "Trip created successfully",
        }),
    ))
}

/// GET /api/v1/trip
///
/// The caller's trips, most recently created first.
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Trip>>> {
    let trips = TripRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(trips))
}

/// GET /api/v1/trip/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Trip>> {
    let trip = TripRepo::find_by_id(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip", id }))?;
    Ok(Json(trip))
}

/// PUT /api/v1/trip/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<Json<UpdatedTripResponse>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let trip = TripRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip", id }))?;
    Ok(Json(UpdatedTripResponse { trip }))
}

/// DELETE /api/v1/trip/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TripRepo::delete(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Trip deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Trip", id }))
    }
}
