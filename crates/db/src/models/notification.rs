//! Notification entity model and DTOs.

use loopedia_core::notification::{NotificationKind, NotificationRefs};
use loopedia_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub recipient_id: DbId,
    pub actor_id: Option<DbId>,
    pub kind: String,
    pub preset_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Notification enriched with actor display info for listings.
///
/// Actor columns are `None` for system-originated notifications
/// (contact replies) where no actor is recorded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationWithActor {
    pub id: DbId,
    pub recipient_id: DbId,
    pub actor_id: Option<DbId>,
    pub actor_username: Option<String>,
    pub actor_nickname: Option<String>,
    pub actor_avatar_url: Option<String>,
    pub kind: String,
    pub preset_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Insert payload for a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: DbId,
    pub actor_id: Option<DbId>,
    pub kind: NotificationKind,
    pub refs: NotificationRefs,
}
