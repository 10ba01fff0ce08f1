//! Repository for the `notifications` table.

use loopedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{NewNotification, Notification, NotificationWithActor};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, recipient_id, actor_id, kind, preset_id, comment_id, \
                       contact_id, is_read, read_at, created_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification, returning the generated ID.
    ///
    /// The row starts unread. Reference columns come from the kind's fixed
    /// mapping (validated by the caller via `NotificationRefs::validate_for`).
    pub async fn create(pool: &PgPool, input: &NewNotification) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications \
                (recipient_id, actor_id, kind, preset_id, comment_id, contact_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(input.recipient_id)
        .bind(input.actor_id)
        .bind(input.kind.as_str())
        .bind(input.refs.preset_id)
        .bind(input.refs.comment_id)
        .bind(input.refs.contact_id)
        .fetch_one(pool)
        .await
    }

    /// Find a notification by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a recipient's notifications newest-first, enriched with actor
    /// display info. Actor columns are NULL for system notifications.
    pub async fn list_for_recipient(
        pool: &PgPool,
        recipient_id: DbId,
        limit: i64,
    ) -> Result<Vec<NotificationWithActor>, sqlx::Error> {
        sqlx::query_as::<_, NotificationWithActor>(
            "SELECT n.id, n.recipient_id, n.actor_id, \
                    a.username AS actor_username, \
                    a.nickname AS actor_nickname, \
                    a.avatar_url AS actor_avatar_url, \
                    n.kind, n.preset_id, n.comment_id, n.contact_id, \
                    n.is_read, n.read_at, n.created_at \
             FROM notifications n \
             LEFT JOIN users a ON a.id = n.actor_id \
             WHERE n.recipient_id = $1 \
             ORDER BY n.created_at DESC, n.id DESC \
             LIMIT $2",
        )
        .bind(recipient_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Get the number of unread notifications for a recipient.
    ///
    /// Always derived by scan; there is no stored counter to drift.
    pub async fn unread_count(pool: &PgPool, recipient_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND is_read = false",
        )
        .bind(recipient_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Mark a single notification as read.
    ///
    /// The caller is responsible for ownership checks; this only flips
    /// the flag. Already-read rows are left untouched.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = NOW() \
             WHERE id = $1 AND is_read = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark all unread notifications as read for a recipient.
    ///
    /// Returns the number of notifications that were transitioned; calling
    /// again once everything is read is a no-op returning 0.
    pub async fn mark_all_read(pool: &PgPool, recipient_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = NOW() \
             WHERE recipient_id = $1 AND is_read = false",
        )
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
