pub mod trip_repo;
pub mod user_repo;

pub use trip_repo::{ImageMutation, TripRepo};
pub use user_repo::UserRepo;
