//! Repository for the `follows` table.
//!
//! Follow and unfollow are convergent under concurrent duplicate calls:
//! the unique constraint on (follower_id, followed_id) plus atomic
//! insert/delete mean repeated invocations settle on one edge or none,
//! and each method reports whether it actually changed anything.

use loopedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::follow::FollowListEntry;

/// Provides edge operations and annotated listings for the social graph.
pub struct FollowRepo;

impl FollowRepo {
    /// Insert a follow edge if one does not already exist.
    ///
    /// Returns `true` if a new edge was created, `false` if the pair was
    /// already following (no duplicate row is created either way).
    pub async fn create(
        pool: &PgPool,
        follower_id: DbId,
        followed_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO follows (follower_id, followed_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_follows_follower_followed DO NOTHING \
             RETURNING id",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_optional(pool)
        .await?;
        Ok(inserted.is_some())
    }

    /// Delete the follow edge if present.
    ///
    /// Returns `true` if an edge was deleted, `false` if there was none
    /// (deleting a missing edge is not an error).
    pub async fn delete(
        pool: &PgPool,
        follower_id: DbId,
        followed_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2",
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether `follower_id` follows `followed_id`.
    pub async fn exists(
        pool: &PgPool,
        follower_id: DbId,
        followed_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM follows WHERE follower_id = $1 AND followed_id = $2 \
             )",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_one(pool)
        .await
    }

    /// List the users following `user_id`, newest edge first.
    ///
    /// Each row is annotated with whether `viewer_id` follows that user.
    /// Pass `None` for an anonymous viewer; every annotation is then false.
    pub async fn list_followers(
        pool: &PgPool,
        user_id: DbId,
        viewer_id: Option<DbId>,
    ) -> Result<Vec<FollowListEntry>, sqlx::Error> {
        sqlx::query_as::<_, FollowListEntry>(
            "SELECT u.id, u.username, u.nickname, u.avatar_url, u.is_verified, \
                    EXISTS( \
                        SELECT 1 FROM follows vf \
                        WHERE vf.follower_id = $2 AND vf.followed_id = u.id \
                    ) AS is_following, \
                    f.created_at AS followed_at \
             FROM follows f \
             JOIN users u ON u.id = f.follower_id \
             WHERE f.followed_id = $1 \
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .bind(viewer_id)
        .fetch_all(pool)
        .await
    }

    /// List the users `user_id` follows, newest edge first.
    ///
    /// Annotation semantics match [`FollowRepo::list_followers`].
    pub async fn list_following(
        pool: &PgPool,
        user_id: DbId,
        viewer_id: Option<DbId>,
    ) -> Result<Vec<FollowListEntry>, sqlx::Error> {
        sqlx::query_as::<_, FollowListEntry>(
            "SELECT u.id, u.username, u.nickname, u.avatar_url, u.is_verified, \
                    EXISTS( \
                        SELECT 1 FROM follows vf \
                        WHERE vf.follower_id = $2 AND vf.followed_id = u.id \
                    ) AS is_following, \
                    f.created_at AS followed_at \
             FROM follows f \
             JOIN users u ON u.id = f.followed_id \
             WHERE f.follower_id = $1 \
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .bind(viewer_id)
        .fetch_all(pool)
        .await
    }
}
