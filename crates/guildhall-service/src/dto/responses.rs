//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use guildhall_core::AuthorizationReason;
use serde::Serialize;

// ============================================================================
// Guild Responses
// ============================================================================

/// Guild as listed for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct GuildResponse {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub owner: bool,
    /// Raw decimal permission bitmask, passed through untouched
    pub permissions: String,
    pub features: Vec<String>,
}

/// Guild with approximate counts; counts are null when unavailable
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedGuildResponse {
    #[serde(flatten)]
    pub guild: GuildResponse,
    pub approximate_member_count: Option<u64>,
    pub approximate_presence_count: Option<u64>,
    pub approximate_offline_count: Option<u64>,
}

/// Guilds the caller administers, split by whether the bot is present
#[derive(Debug, Clone, Serialize)]
pub struct ManageableGuildsResponse {
    pub known: Vec<EnrichedGuildResponse>,
    pub unknown: Vec<GuildResponse>,
}

// ============================================================================
// Role & Channel Responses
// ============================================================================

/// Role response
#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub color: i32,
    pub position: i32,
    pub permissions: String,
    pub managed: bool,
}

/// Channel response
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: i64,
    pub position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

// ============================================================================
// Settings Responses
// ============================================================================

/// Staff role response
#[derive(Debug, Clone, Serialize)]
pub struct StaffRoleResponse {
    pub id: String,
    pub name: String,
    pub color: i32,
    pub position: i32,
}

/// Guild settings response
#[derive(Debug, Clone, Serialize)]
pub struct GuildSettingsResponse {
    pub guild_id: String,
    pub staff_roles: Vec<StaffRoleResponse>,
    pub log_channel_id: Option<String>,
    pub last_updated_by: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Authorization Responses
// ============================================================================

/// Staff authorization decision for the caller
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationResponse {
    pub guild_id: String,
    pub is_staff: bool,
    pub guild_name: Option<String>,
    pub reason: AuthorizationReason,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
