//! The HTTP-only session cookie carrying the signed token.
//!
//! The cookie is invisible to page scripts (HttpOnly) and not sent
//! cross-site (SameSite=Strict). "Logout" only clears it client-side; the
//! token itself stays valid until expiry.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "jwt";

/// Build the session cookie for a freshly issued token.
pub fn session_cookie(token: String, expiry_hours: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::hours(expiry_hours))
        .build()
}

/// Build the cookie that clears the session client-side.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
