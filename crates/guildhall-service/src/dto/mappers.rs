//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use guildhall_core::{
    AuthorizationDecision, Channel, EnrichedGuild, GuildSettings, GuildSummary,
    ReconciliationResult, Role, Snowflake, StaffRole,
};

use super::responses::{
    AuthorizationResponse, ChannelResponse, EnrichedGuildResponse, GuildResponse,
    GuildSettingsResponse, ManageableGuildsResponse, RoleResponse, StaffRoleResponse,
};

// ============================================================================
// Guild Mappers
// ============================================================================

impl From<&GuildSummary> for GuildResponse {
    fn from(guild: &GuildSummary) -> Self {
        Self {
            id: guild.id.to_string(),
            name: guild.name.clone(),
            icon: guild.icon.clone(),
            icon_url: guild.icon_url(),
            owner: guild.owner,
            permissions: guild.permissions.clone(),
            features: guild.features.clone(),
        }
    }
}

impl From<GuildSummary> for GuildResponse {
    fn from(guild: GuildSummary) -> Self {
        Self::from(&guild)
    }
}

impl From<&EnrichedGuild> for EnrichedGuildResponse {
    fn from(enriched: &EnrichedGuild) -> Self {
        Self {
            guild: GuildResponse::from(&enriched.guild),
            approximate_member_count: enriched.approximate_member_count,
            approximate_presence_count: enriched.approximate_presence_count,
            approximate_offline_count: enriched.approximate_offline_count,
        }
    }
}

impl ManageableGuildsResponse {
    /// Combine enriched known guilds with the reconciliation's unknown list
    pub fn new(known: Vec<EnrichedGuild>, unknown: Vec<GuildSummary>) -> Self {
        Self {
            known: known.iter().map(EnrichedGuildResponse::from).collect(),
            unknown: unknown.iter().map(GuildResponse::from).collect(),
        }
    }
}

impl From<ReconciliationResult> for ManageableGuildsResponse {
    /// Without enrichment every count is null
    fn from(result: ReconciliationResult) -> Self {
        let known = result
            .known
            .into_iter()
            .map(EnrichedGuild::without_counts)
            .collect();
        Self::new(known, result.unknown)
    }
}

// ============================================================================
// Role & Channel Mappers
// ============================================================================

impl From<&Role> for RoleResponse {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name.clone(),
            color: role.color,
            position: role.position,
            permissions: role.permissions.to_string(),
            managed: role.managed,
        }
    }
}

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.to_string(),
            name: channel.name.clone(),
            channel_type: channel.kind.into(),
            position: channel.position,
            parent_id: channel.parent_id.map(|id| id.to_string()),
        }
    }
}

// ============================================================================
// Settings Mappers
// ============================================================================

impl From<&StaffRole> for StaffRoleResponse {
    fn from(role: &StaffRole) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name.clone(),
            color: role.color,
            position: role.position,
        }
    }
}

impl From<&GuildSettings> for GuildSettingsResponse {
    fn from(settings: &GuildSettings) -> Self {
        Self {
            guild_id: settings.guild_id.to_string(),
            staff_roles: settings.staff_roles.iter().map(StaffRoleResponse::from).collect(),
            log_channel_id: settings.log_channel_id.map(|id| id.to_string()),
            last_updated_by: settings.last_updated_by.clone(),
            updated_at: settings.updated_at,
        }
    }
}

impl From<GuildSettings> for GuildSettingsResponse {
    fn from(settings: GuildSettings) -> Self {
        Self::from(&settings)
    }
}

// ============================================================================
// Authorization Mappers
// ============================================================================

impl AuthorizationResponse {
    pub fn new(guild_id: Snowflake, decision: AuthorizationDecision) -> Self {
        Self {
            guild_id: guild_id.to_string(),
            is_staff: decision.is_staff,
            guild_name: decision.guild_name,
            reason: decision.reason,
        }
    }
}
