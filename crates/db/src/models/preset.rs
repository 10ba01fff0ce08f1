//! Preset models and DTOs.

use loopedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `presets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Preset {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub parameters: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Preset enriched with owner display info and engagement counts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PresetWithStats {
    pub id: DbId,
    pub owner_id: DbId,
    pub owner_username: String,
    pub owner_nickname: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub parameters: serde_json::Value,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new preset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePreset {
    pub title: String,
    pub description: Option<String>,
    pub parameters: serde_json::Value,
}

/// DTO for updating an existing preset. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePreset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub parameters: Option<serde_json::Value>,
}
