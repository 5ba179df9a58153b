//! Request handlers, one module per resource.
//!
//! Handlers validate input, delegate persistence to the repositories in
//! `wayfarer_db`, and map failures via [`crate::error::AppError`].

pub mod ai;
pub mod auth;
pub mod trip;
pub mod trip_image;
