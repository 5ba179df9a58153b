//! Repository for the `trips` table.
//!
//! Every single-record operation carries an owner-equality predicate
//! (`id = $1 AND user_id = $2`) so one user can never reach another user's
//! trip, not even by guessing its id; a foreign trip id behaves exactly like
//! a missing one.
//!
//! Image-list mutations re-read the row with `SELECT ... FOR UPDATE` inside
//! a transaction, apply the rules from [`wayfarer_core::images`], and write
//! the result back. The row lock serializes concurrent mutations per trip,
//! so an append can never be lost to a racing delete.

use sqlx::PgPool;
use wayfarer_core::images;
use wayfarer_core::types::DbId;

use crate::models::trip::{NewTrip, Trip, UpdateTrip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, destination, description, start_date, end_date, \
                        images, cover_image, tags, rating, created_at, updated_at";

/// Outcome of an image-list mutation.
#[derive(Debug)]
pub enum ImageMutation {
    /// The mutation was applied; here is the post-update row.
    Updated(Trip),
    /// No trip with that id belongs to the caller.
    NotFound,
    /// The supplied index was outside `[0, len)`; the trip is unchanged.
    InvalidIndex,
}

/// Provides CRUD and image-list operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (user_id, title, destination, description, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.destination)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// List the owner's trips, most recently created first.
    pub async fn list_by_owner(pool: &PgPool, user_id: DbId) -> Result<Vec<Trip>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM trips WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the owner's trips by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update one of the owner's trips. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if the owner has no trip with that id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTrip,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET
                title = COALESCE($3, title),
                destination = COALESCE($4, destination),
                description = COALESCE($5, description),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                tags = COALESCE($8, tags),
                rating = COALESCE($9, rating),
                updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.destination)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.tags)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the owner's trips. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Append image references, defaulting the cover to the first new
    /// reference when the trip had none.
    pub async fn append_images(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        new_refs: &[String],
    ) -> Result<ImageMutation, sqlx::Error> {
        Self::mutate_images(pool, id, user_id, |trip_images, cover| {
            images::append_images(trip_images, cover, new_refs);
            true
        })
        .await
    }

    /// Remove the image at `index`, re-pointing the cover if it was removed.
    pub async fn remove_image(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        index: usize,
    ) -> Result<ImageMutation, sqlx::Error> {
        Self::mutate_images(pool, id, user_id, |trip_images, cover| {
            images::remove_image(trip_images, cover, index)
        })
        .await
    }

    /// Point the cover at the image currently at `index`.
    pub async fn set_cover(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        index: usize,
    ) -> Result<ImageMutation, sqlx::Error> {
        Self::mutate_images(pool, id, user_id, |trip_images, cover| {
            images::set_cover(trip_images, cover, index)
        })
        .await
    }

    /// Shared read-modify-write cycle for image mutations.
    ///
    /// `apply` mutates the image list / cover in place and returns `false`
    /// to signal an invalid index, which rolls the transaction back.
    async fn mutate_images<F>(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        apply: F,
    ) -> Result<ImageMutation, sqlx::Error>
    where
        F: FnOnce(&mut Vec<String>, &mut Option<String>) -> bool,
    {
        let mut tx = pool.begin().await?;

        let select = format!(
            "SELECT {COLUMNS} FROM trips WHERE id = $1 AND user_id = $2 FOR UPDATE"
        );
        let row = sqlx::query_as::<_, Trip>(&select)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(mut trip) = row else {
            return Ok(ImageMutation::NotFound);
        };

        if !apply(&mut trip.images, &mut trip.cover_image) {
            return Ok(ImageMutation::InvalidIndex);
        }

        let update = format!(
            "UPDATE trips SET images = $3, cover_image = $4, updated_at = now()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Trip>(&update)
            .bind(id)
            .bind(user_id)
            .bind(&trip.images)
            .bind(&trip.cover_image)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ImageMutation::Updated(updated))
    }
}
