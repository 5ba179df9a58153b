//! Framework-free domain logic for the wayfarer travel journal.
//!
//! - [`types`] -- shared type aliases (database ids, timestamps).
//! - [`error`] -- the domain error taxonomy.
//! - [`images`] -- trip image-list mutation rules.
//! - [`suggestion`] -- prompt construction and reply parsing for the
//!   place-suggestion gateway.

pub mod error;
pub mod images;
pub mod suggestion;
pub mod types;
