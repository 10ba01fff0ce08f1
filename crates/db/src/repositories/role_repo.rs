//! Repository for the `roles` lookup table.

use loopedia_core::types::DbId;
use sqlx::PgPool;

/// Provides lookups on the seeded roles table.
pub struct RoleRepo;

impl RoleRepo {
    /// Resolve a role ID to its name.
    pub async fn resolve_name(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_one(pool)
            .await
    }

    /// Look up a role ID by name.
    pub async fn find_id_by_name(pool: &PgPool, name: &str) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM roles WHERE name = $1")
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
