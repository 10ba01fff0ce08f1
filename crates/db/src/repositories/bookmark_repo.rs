//! Repository for the `bookmarks` table.
//!
//! Bookmarks are private to the bookmarking user and never trigger
//! notifications; pair semantics mirror likes.

use loopedia_core::types::DbId;
use sqlx::PgPool;

/// Provides idempotent bookmark pair operations.
pub struct BookmarkRepo;

impl BookmarkRepo {
    /// Insert a bookmark if one does not already exist.
    ///
    /// Returns `true` if a new row was created.
    pub async fn create(pool: &PgPool, user_id: DbId, preset_id: DbId) -> Result<bool, sqlx::Error> {
        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO bookmarks (user_id, preset_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_bookmarks_user_preset DO NOTHING \
             RETURNING id",
        )
        .bind(user_id)
        .bind(preset_id)
        .fetch_optional(pool)
        .await?;
        Ok(inserted.is_some())
    }

    /// Delete the bookmark if present. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, preset_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND preset_id = $2")
            .bind(user_id)
            .bind(preset_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
