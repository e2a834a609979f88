//! Guild settings - the dashboard's per-guild configuration document

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::role::StaffRole;
use crate::value_objects::Snowflake;

/// Most staff roles a guild may designate
pub const MAX_STAFF_ROLES: usize = 25;

/// Per-guild configuration, keyed uniquely by `guild_id`
///
/// Holds configuration only; nothing here mirrors platform state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSettings {
    pub guild_id: Snowflake,
    pub staff_roles: Vec<StaffRole>,
    pub log_channel_id: Option<Snowflake>,
    /// Dashboard user id of the last editor
    pub last_updated_by: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl GuildSettings {
    /// Create empty settings for a guild
    pub fn new(guild_id: Snowflake) -> Self {
        Self {
            guild_id,
            staff_roles: Vec::new(),
            log_channel_id: None,
            last_updated_by: None,
            updated_at: Utc::now(),
        }
    }

    /// Check if at least one staff role is designated
    #[inline]
    pub fn has_staff_configured(&self) -> bool {
        !self.staff_roles.is_empty()
    }

    /// Check if any of the member's role ids is a staff role
    pub fn grants_staff(&self, member_role_ids: &[Snowflake]) -> bool {
        let staff_ids: HashSet<Snowflake> = self.staff_roles.iter().map(|r| r.id).collect();
        member_role_ids.iter().any(|id| staff_ids.contains(id))
    }

    /// Get staff role ids
    pub fn staff_role_ids(&self) -> Vec<Snowflake> {
        self.staff_roles.iter().map(|r| r.id).collect()
    }
}
