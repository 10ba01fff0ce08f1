//! Repository for the `presets` table.

use loopedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::preset::{CreatePreset, Preset, PresetWithStats, UpdatePreset};

/// Column list for bare `presets` queries.
const COLUMNS: &str = "id, owner_id, title, description, parameters, created_at, updated_at";

/// Select list for stat-enriched listings (owner join + engagement counts).
const STATS_SELECT: &str = "p.id, p.owner_id, u.username AS owner_username, \
     u.nickname AS owner_nickname, p.title, p.description, p.parameters, \
     (SELECT COUNT(*) FROM likes l WHERE l.preset_id = p.id) AS like_count, \
     (SELECT COUNT(*) FROM comments c WHERE c.preset_id = p.id) AS comment_count, \
     p.created_at, p.updated_at";

/// Provides CRUD operations for presets.
pub struct PresetRepo;

impl PresetRepo {
    /// Insert a new preset, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreatePreset,
    ) -> Result<Preset, sqlx::Error> {
        let query = format!(
            "INSERT INTO presets (owner_id, title, description, parameters) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Preset>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.parameters)
            .fetch_one(pool)
            .await
    }

    /// Find a preset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Preset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM presets WHERE id = $1");
        sqlx::query_as::<_, Preset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a preset by ID enriched with owner info and engagement counts.
    pub async fn find_with_stats(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PresetWithStats>, sqlx::Error> {
        let query = format!(
            "SELECT {STATS_SELECT} FROM presets p \
             JOIN users u ON u.id = p.owner_id \
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PresetWithStats>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List presets newest-first with stats, optionally filtered by owner.
    pub async fn list(
        pool: &PgPool,
        owner_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PresetWithStats>, sqlx::Error> {
        let query = format!(
            "SELECT {STATS_SELECT} FROM presets p \
             JOIN users u ON u.id = p.owner_id \
             WHERE ($1::bigint IS NULL OR p.owner_id = $1) \
             ORDER BY p.created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PresetWithStats>(&query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List the presets a user has bookmarked, newest bookmark first.
    pub async fn list_bookmarked(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PresetWithStats>, sqlx::Error> {
        let query = format!(
            "SELECT {STATS_SELECT} FROM bookmarks b \
             JOIN presets p ON p.id = b.preset_id \
             JOIN users u ON u.id = p.owner_id \
             WHERE b.user_id = $1 \
             ORDER BY b.created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PresetWithStats>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a preset. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePreset,
    ) -> Result<Option<Preset>, sqlx::Error> {
        let query = format!(
            "UPDATE presets SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                parameters = COALESCE($4, parameters), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Preset>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.parameters)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a preset. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM presets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
