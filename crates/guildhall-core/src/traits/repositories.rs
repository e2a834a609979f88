//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{GuildSettings, LinkedAccount, StaffRole};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guild Settings Repository
// ============================================================================

#[async_trait]
pub trait GuildSettingsRepository: Send + Sync {
    /// Find settings for a guild
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Option<GuildSettings>>;

    /// Replace the staff role list, creating the settings record if absent
    async fn upsert_staff_roles(
        &self,
        guild_id: Snowflake,
        staff_roles: &[StaffRole],
        updated_by: &str,
    ) -> RepoResult<GuildSettings>;

    /// Set or clear the log channel, creating the settings record if absent
    async fn upsert_log_channel(
        &self,
        guild_id: Snowflake,
        channel_id: Option<Snowflake>,
        updated_by: &str,
    ) -> RepoResult<GuildSettings>;
}

// ============================================================================
// Linked Account Repository
// ============================================================================

#[async_trait]
pub trait LinkedAccountRepository: Send + Sync {
    /// Find the account a dashboard user linked with the given provider
    async fn find_linked_account(
        &self,
        user_id: &str,
        provider: &str,
    ) -> RepoResult<Option<LinkedAccount>>;

    /// Check the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
