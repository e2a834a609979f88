//! Platform client trait (port) - read access to the chat platform

use async_trait::async_trait;

use crate::entities::{Channel, GuildDetail, GuildSummary, Role};
use crate::error::PlatformResult;
use crate::value_objects::{PlatformToken, Snowflake};

/// Read-only view of the chat platform's REST API
///
/// Every operation reports a 404 as [`PlatformError::NotFound`] and any other
/// non-success status as [`PlatformError::Status`]. No retries are attempted.
///
/// [`PlatformError::NotFound`]: crate::error::PlatformError::NotFound
/// [`PlatformError::Status`]: crate::error::PlatformError::Status
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Guilds the user belongs to, with the user's permissions in each
    async fn fetch_user_guilds(&self, user_token: &PlatformToken) -> PlatformResult<Vec<GuildSummary>>;

    /// Guilds the service's bot account belongs to
    async fn fetch_service_guilds(
        &self,
        service_token: &PlatformToken,
    ) -> PlatformResult<Vec<GuildSummary>>;

    /// Single guild with approximate member and presence counts
    async fn fetch_guild_detail(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<GuildDetail>;

    /// Guild roles without the everyone role, highest position first
    ///
    /// Implementations apply [`sort_guild_roles`](crate::entities::sort_guild_roles).
    async fn fetch_guild_roles(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<Vec<Role>>;

    /// Guild channels usable as log targets, in platform order
    ///
    /// Implementations apply [`filter_log_channels`](crate::entities::filter_log_channels).
    async fn fetch_guild_channels(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<Vec<Channel>>;

    /// Role ids held by a guild member; `NotFound` if the user is not a member
    async fn fetch_member_roles(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> PlatformResult<Vec<Snowflake>>;
}
