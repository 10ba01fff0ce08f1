//! Contact/support message models and DTOs.

use loopedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub user_id: DbId,
    pub subject: String,
    pub body: String,
    pub reply_body: Option<String>,
    pub replied_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for submitting a contact message.
#[derive(Debug, Deserialize)]
pub struct CreateContactMessage {
    pub subject: String,
    pub body: String,
}
