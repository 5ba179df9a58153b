//! Handlers for a trip's image list (upload, delete by index, set cover).
//!
//! Uploaded binaries are stored inline as self-describing
//! `data:<mime>;base64,...` references, so each element of the image list is
//! a single opaque string usable directly as an image source.

use axum::extract::{Multipart, Path, State};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use wayfarer_core::error::CoreError;
use wayfarer_core::types::DbId;
use wayfarer_db::models::trip::Trip;
use wayfarer_db::repositories::{ImageMutation, TripRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum number of files accepted per upload request.
const MAX_IMAGES_PER_UPLOAD: usize = 10;

/// Request body for `PUT /trip/{id}/cover`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCoverRequest {
    pub image_index: usize,
}

/// Response body for image uploads.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub images: Vec<String>,
    pub trip: Trip,
}

/// Response body for image deletion and cover updates.
#[derive(Debug, Serialize)]
pub struct TripImageResponse {
    pub message: &'static str,
    pub trip: Trip,
}

/// POST /api/v1/trip/{id}/images
///
/// Multipart upload, field name `images`, at most 10 files. New references
/// append in insertion order; a trip without a cover gets the first new
/// reference as its cover.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut new_refs = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("images") {
            continue; // ignore unknown fields
        }
        if new_refs.len() == MAX_IMAGES_PER_UPLOAD {
            return Err(AppError::Core(CoreError::Validation(format!(
                "At most {MAX_IMAGES_PER_UPLOAD} images per upload"
            ))));
        }
        let mime = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        new_refs.push(format!("data:{mime};base64,{}", BASE64.encode(&data)));
    }

    if new_refs.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "No images provided".into(),
        )));
    }

    let trip = apply_mutation(
        TripRepo::append_images(&state.pool, id, user.user_id, &new_refs).await?,
        id,
    )?;

    Ok(Json(UploadResponse {
        message: "Images uploaded successfully",
        images: new_refs,
        trip,
    }))
}

/// DELETE /api/v1/trip/{id}/images/{imageIndex}
pub async fn delete_image(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, image_index)): Path<(DbId, usize)>,
) -> AppResult<Json<TripImageResponse>> {
    let trip = apply_mutation(
        TripRepo::remove_image(&state.pool, id, user.user_id, image_index).await?,
        id,
    )?;

    Ok(Json(TripImageResponse {
        message: "Image deleted successfully",
        trip,
    }))
}

/// PUT /api/v1/trip/{id}/cover
pub async fn set_cover(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetCoverRequest>,
) -> AppResult<Json<TripImageResponse>> {
    let trip = apply_mutation(
        TripRepo::set_cover(&state.pool, id, user.user_id, input.image_index).await?,
        id,
    )?;

    Ok(Json(TripImageResponse {
        message: "Cover image set successfully",
        trip,
    }))
}

/// Translate an [`ImageMutation`] outcome into the handler error taxonomy.
fn apply_mutation(outcome: ImageMutation, id: DbId) -> AppResult<Trip> {
    match outcome {
        ImageMutation::Updated(trip) => Ok(trip),
        ImageMutation::NotFound => Err(AppError::Core(CoreError::NotFound { entity: "Trip", id })),
        ImageMutation::InvalidIndex => Err(AppError::Core(CoreError::Validation(
            "Invalid image index".into(),
        ))),
    }
}
