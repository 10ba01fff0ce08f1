//! Follow-edge model and annotated listing rows.

use loopedia_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `follows` table: a directed edge follower -> followed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FollowEdge {
    pub id: DbId,
    pub follower_id: DbId,
    pub followed_id: DbId,
    pub created_at: Timestamp,
}

/// One entry in a followers/following listing.
///
/// `is_following` is derived per row at query time: whether the *viewer*
/// follows this entry's user. It is never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FollowListEntry {
    pub id: DbId,
    pub username: String,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub is_following: bool,
    pub followed_at: Timestamp,
}
