//! Repository for the `likes` table.
//!
//! Same convergence rules as follow edges: the pair constraint plus
//! atomic insert/delete make like/unlike idempotent.

use loopedia_core::types::DbId;
use sqlx::PgPool;

/// Provides idempotent like/unlike pair operations.
pub struct LikeRepo;

impl LikeRepo {
    /// Insert a like if one does not already exist.
    ///
    /// Returns `true` if a new row was created.
    pub async fn create(pool: &PgPool, user_id: DbId, preset_id: DbId) -> Result<bool, sqlx::Error> {
        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO likes (user_id, preset_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_likes_user_preset DO NOTHING \
             RETURNING id",
        )
        .bind(user_id)
        .bind(preset_id)
        .fetch_optional(pool)
        .await?;
        Ok(inserted.is_some())
    }

    /// Delete the like if present. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, preset_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND preset_id = $2")
            .bind(user_id)
            .bind(preset_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether the user has liked the preset.
    pub async fn exists(pool: &PgPool, user_id: DbId, preset_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND preset_id = $2)",
        )
        .bind(user_id)
        .bind(preset_id)
        .fetch_one(pool)
        .await
    }
}
