//! Handlers for the `/auth` resource (register, login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use wayfarer_core::error::CoreError;
use wayfarer_db::models::user::{CreateUser, User, UserResponse};
use wayfarer_db::repositories::UserRepo;

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Fields are optional at the serde level so a missing field yields the
/// same 400 validation error as an empty one.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub message: &'static str,
}

/// Plain `{ message }` response (logout).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and issue a session cookie. A duplicate email answers
/// 400 with the same body whether caught by the pre-check or the unique
/// constraint.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(CookieJar, (StatusCode, Json<AuthResponse>))> {
    let email = non_empty(input.email)
        .ok_or_else(|| AppError::Core(CoreError::Validation("email is required".into())))?;
    let password = non_empty(input.password)
        .ok_or_else(|| AppError::Core(CoreError::Validation("password is required".into())))?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Duplicate(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email,
            password_hash,
        },
    )
    .await?;

    let jar = issue_session(&state, jar, &user)?;
    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(AuthResponse {
                user: user.into(),
                message: "User registered",
            }),
        ),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. An unknown email and a wrong
/// password produce byte-identical responses so neither factor leaks.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    let email = non_empty(input.email).ok_or_else(invalid_credentials)?;
    let password = non_empty(input.password).ok_or_else(invalid_credentials)?;

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    let jar = issue_session(&state, jar, &user)?;
    Ok((
        jar,
        Json(AuthResponse {
            user: user.into(),
            message: "Login successful",
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Clears the session cookie. The token itself is stateless and stays valid
/// until expiry; there is no server-side revocation.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(clear_session_cookie()),
        Json(MessageResponse {
            message: "Logout successful",
        }),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Mint a session token for `user` and add its cookie to the jar.
fn issue_session(state: &AppState, jar: CookieJar, user: &User) -> AppResult<CookieJar> {
    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    Ok(jar.add(session_cookie(token, state.config.jwt.expiry_hours)))
}

/// The single error shape for every credential failure.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

/// Treat missing and blank strings identically.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
