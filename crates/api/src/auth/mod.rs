//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 session-token generation and validation.
//! - [`cookie`] -- the HTTP-only session cookie carrying the token.

pub mod cookie;
pub mod jwt;
pub mod password;
