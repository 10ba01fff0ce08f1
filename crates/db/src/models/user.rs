//! User entity model and DTOs.

use loopedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] or [`PublicProfile`] for output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub nickname: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The authenticated user's own account view (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub nickname: Option<String>,
    pub email: String,
    /// Resolved role name (`"admin"` or `"user"`).
    pub role: String,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

/// Another user's profile as seen by a viewer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicProfile {
    pub id: DbId,
    pub username: String,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub follower_count: i64,
    pub following_count: i64,
    pub created_at: Timestamp,
}

/// DTO for inserting a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub nickname: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
}

/// DTO for profile updates. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}
