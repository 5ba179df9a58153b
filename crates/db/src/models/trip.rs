//! Trip entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use wayfarer_core::types::{DbId, Timestamp};

/// Full trip row from the `trips` table.
///
/// `cover_image`, when set, always equals one element of `images`; that
/// invariant is maintained by `wayfarer_core::images` and the repository's
/// row-locked image mutations.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub images: Vec<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new trip. The owner is never taken from the client;
/// handlers force it to the authenticated user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrip {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Insert payload built by the handler once `CreateTrip` has been validated
/// and the owner has been resolved from the session.
#[derive(Debug)]
pub struct NewTrip {
    pub user_id: DbId,
    pub title: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// DTO for partially updating a trip. All fields are optional; `images` and
/// the cover pointer mutate only through the dedicated image endpoints.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrip {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "destination must not be empty"))]
    pub destination: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub tags: Option<Vec<String>>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must lie in [0,5]"))]
    pub rating: Option<f64>,
}
