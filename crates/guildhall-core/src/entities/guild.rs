//! Guild entities - platform guild summaries and the views derived from them

use std::collections::HashSet;

use crate::value_objects::{has_permission, Permissions, Snowflake};

/// Guild summary as listed by the platform's "my guilds" endpoints
///
/// `permissions` is kept as the raw decimal string the platform sent; it is
/// only ever interpreted through [`has_permission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: Snowflake,
    pub name: String,
    pub icon: Option<String>,
    pub owner: bool,
    pub permissions: String,
    pub features: Vec<String>,
}

impl GuildSummary {
    /// Create a summary with no permissions and no features
    pub fn new(id: Snowflake, name: String) -> Self {
        Self {
            id,
            name,
            icon: None,
            owner: false,
            permissions: "0".to_string(),
            features: Vec::new(),
        }
    }

    /// Set the raw permission string
    pub fn with_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = permissions.into();
        self
    }

    /// Check if the listing user holds the administrator flag in this guild
    ///
    /// Ownership is not consulted; only the permission bitmask counts.
    #[inline]
    pub fn is_administered(&self) -> bool {
        has_permission(&self.permissions, Permissions::ADMINISTRATOR)
    }

    /// Get the guild icon URL if set
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/icons/{}/{}.png", self.id, hash))
    }
}

/// Single-guild detail including approximate counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildDetail {
    pub id: Snowflake,
    pub name: String,
    pub icon: Option<String>,
    pub approximate_member_count: Option<u64>,
    pub approximate_presence_count: Option<u64>,
}

/// Guild summary augmented with approximate counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedGuild {
    pub guild: GuildSummary,
    pub approximate_member_count: Option<u64>,
    pub approximate_presence_count: Option<u64>,
    pub approximate_offline_count: Option<u64>,
}

impl EnrichedGuild {
    /// Attach counts to a guild, deriving the offline count
    pub fn with_counts(
        guild: GuildSummary,
        member_count: Option<u64>,
        presence_count: Option<u64>,
    ) -> Self {
        Self {
            guild,
            approximate_member_count: member_count,
            approximate_presence_count: presence_count,
            approximate_offline_count: offline_count(member_count, presence_count),
        }
    }

    /// Keep the guild but mark every count as unknown
    pub fn without_counts(guild: GuildSummary) -> Self {
        Self::with_counts(guild, None, None)
    }

    /// Check if the counts could not be fetched
    pub fn is_degraded(&self) -> bool {
        self.approximate_member_count.is_none() && self.approximate_presence_count.is_none()
    }
}

/// Offline members = members - present members, when both are known
///
/// Saturates at zero: the two counts are approximations taken at slightly
/// different moments and presence can briefly exceed membership.
pub fn offline_count(member_count: Option<u64>, presence_count: Option<u64>) -> Option<u64> {
    match (member_count, presence_count) {
        (Some(members), Some(present)) => Some(members.saturating_sub(present)),
        _ => None,
    }
}

/// Administered guilds split by whether the service account is present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    /// Administered and the service account is a member (manageable now)
    pub known: Vec<GuildSummary>,
    /// Administered but the service account is absent (not yet onboarded)
    pub unknown: Vec<GuildSummary>,
}

impl ReconciliationResult {
    /// Partition the user's administered guilds against the service guild list
    ///
    /// Non-administered guilds are dropped. Both output lists keep the order
    /// of `user_guilds`.
    pub fn from_guild_lists(user_guilds: Vec<GuildSummary>, service_guilds: &[GuildSummary]) -> Self {
        let service_ids: HashSet<Snowflake> = service_guilds.iter().map(|g| g.id).collect();

        let (known, unknown) = user_guilds
            .into_iter()
            .filter(GuildSummary::is_administered)
            .partition(|g| service_ids.contains(&g.id));

        Self { known, unknown }
    }

    /// Total number of administered guilds
    pub fn len(&self) -> usize {
        self.known.len() + self.unknown.len()
    }

    /// Check if the user administers no guild at all
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.unknown.is_empty()
    }
}
