//! # guildhall-core
//!
//! Domain layer containing entities, value objects, errors, and the ports
//! (repository and platform traits) the engine is written against.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    dedup_staff_roles, filter_log_channels, offline_count, sort_guild_roles,
    AuthorizationDecision, AuthorizationReason, Channel, ChannelKind, EnrichedGuild, GuildDetail,
    GuildSettings, GuildSummary, LinkedAccount, ReconciliationResult, Role, StaffRole,
    EVERYONE_ROLE_NAME, MAX_STAFF_ROLES, PLATFORM_PROVIDER,
};
pub use error::{DomainError, PlatformError, PlatformResult};
pub use traits::{GuildSettingsRepository, LinkedAccountRepository, PlatformClient, RepoResult};
pub use value_objects::{
    has_permission, Permissions, PermissionsParseError, PlatformToken, Snowflake,
    SnowflakeParseError, TokenKind,
};
