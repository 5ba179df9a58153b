pub mod ai;
pub mod auth;
pub mod health;
pub mod trip;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/logout                        logout (public; clears the cookie)
///
/// /trip                               list, create (auth required)
/// /trip/{id}                          get, update, delete
/// /trip/{id}/images                   multipart upload
/// /trip/{id}/images/{imageIndex}      delete one image
/// /trip/{id}/cover                    set cover image
///
/// /ai/suggestions                     place suggestions (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/trip", trip::router())
        .nest("/ai", ai::router())
}
