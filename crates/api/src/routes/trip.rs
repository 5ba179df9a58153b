//! Route definitions for the `/trip` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{trip, trip_image};
use crate::state::AppState;

/// Request body cap for image uploads.
const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Routes mounted at `/trip`. Every handler requires a valid session cookie.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
///
/// POST   /{id}/images                 -> upload (multipart, field "images")
/// DELETE /{id}/images/{imageIndex}    -> delete_image
/// PUT    /{id}/cover                  -> set_cover
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trip::list).post(trip::create))
        .route(
            "/{id}",
            get(trip::get_by_id)
                .put(trip::update)
                .delete(trip::delete),
        )
        .route(
            "/{id}/images",
            post(trip_image::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/{id}/images/{imageIndex}", delete(trip_image::delete_image))
        .route("/{id}/cover", put(trip_image::set_cover))
}
