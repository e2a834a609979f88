//! Guild directory service
//!
//! Role and channel pickers for guild administrators.

use guildhall_core::Snowflake;
use tracing::instrument;

use crate::dto::{ChannelResponse, RoleResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::guild_access::GuildAccessService;
use super::token::TokenBroker;

/// Guild directory service
pub struct GuildDirectoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildDirectoryService<'a> {
    /// Create a new GuildDirectoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List assignable roles, highest first and without the everyone role
    #[instrument(skip(self))]
    pub async fn list_roles(&self, user_id: &str, guild_id: Snowflake) -> ServiceResult<Vec<RoleResponse>> {
        GuildAccessService::new(self.ctx)
            .require_guild_admin(user_id, guild_id)
            .await?;
        let service_token = TokenBroker::new(self.ctx).service_token()?;

        let roles = self
            .ctx
            .platform()
            .fetch_guild_roles(service_token, guild_id)
            .await?;

        Ok(roles.iter().map(RoleResponse::from).collect())
    }

    /// List channels that can receive log posts
    #[instrument(skip(self))]
    pub async fn list_channels(
        &self,
        user_id: &str,
        guild_id: Snowflake,
    ) -> ServiceResult<Vec<ChannelResponse>> {
        GuildAccessService::new(self.ctx)
            .require_guild_admin(user_id, guild_id)
            .await?;
        let service_token = TokenBroker::new(self.ctx).service_token()?;

        let channels = self
            .ctx
            .platform()
            .fetch_guild_channels(service_token, guild_id)
            .await?;

        Ok(channels.iter().map(ChannelResponse::from).collect())
    }
}
