//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- extracts the authenticated user from the session
//!   cookie; rejection means the handler never runs.

pub mod auth;
