//! Guild settings database model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for guild_settings table
#[derive(Debug, Clone, FromRow)]
pub struct GuildSettingsModel {
    pub guild_id: i64,
    pub staff_roles: Json<Vec<StaffRoleDocument>>,
    pub log_channel_id: Option<i64>,
    pub last_updated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Element of the `staff_roles` JSONB array
///
/// Ids are stored as strings so the document stays exact for JavaScript
/// readers of the same table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRoleDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: i32,
    #[serde(default)]
    pub position: i32,
}
