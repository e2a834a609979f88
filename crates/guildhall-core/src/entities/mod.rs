//! Domain entities - platform objects and the dashboard's own records

mod account;
mod authorization;
mod channel;
mod guild;
mod role;
mod settings;

pub use account::{LinkedAccount, PLATFORM_PROVIDER};
pub use authorization::{AuthorizationDecision, AuthorizationReason};
pub use channel::{filter_log_channels, Channel, ChannelKind};
pub use guild::{offline_count, EnrichedGuild, GuildDetail, GuildSummary, ReconciliationResult};
pub use role::{dedup_staff_roles, sort_guild_roles, Role, StaffRole, EVERYONE_ROLE_NAME};
pub use settings::{GuildSettings, MAX_STAFF_ROLES};
