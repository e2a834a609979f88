//! Guild access service
//!
//! Entry points for the dashboard's guild list and for gating guild-scoped
//! management on the caller's administrator permission.

use guildhall_core::{GuildSummary, Snowflake};
use tracing::{debug, instrument};

use crate::dto::ManageableGuildsResponse;

use super::context::ServiceContext;
use super::enrichment::EnrichmentService;
use super::error::{ServiceError, ServiceResult};
use super::reconciliation::ReconciliationService;
use super::token::TokenBroker;

/// Guild access service
pub struct GuildAccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildAccessService<'a> {
    /// Create a new GuildAccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the guilds a dashboard user administers
    ///
    /// Guilds the bot has joined are enriched with approximate counts; guilds
    /// it has not joined are returned as-is.
    #[instrument(skip(self))]
    pub async fn list_manageable_guilds(&self, user_id: &str) -> ServiceResult<ManageableGuildsResponse> {
        let tokens = TokenBroker::new(self.ctx);
        let credential = tokens.user_credential(user_id).await?;
        let service_token = tokens.service_token()?;

        let reconciled = ReconciliationService::new(self.ctx)
            .reconcile_admin_guilds(&credential.token, service_token)
            .await?;

        let known = EnrichmentService::new(self.ctx)
            .enrich(service_token, reconciled.known)
            .await;

        Ok(ManageableGuildsResponse::new(known, reconciled.unknown))
    }

    /// Require the user to hold `ADMINISTRATOR` in the guild
    ///
    /// Returns the guild as listed for the user.
    ///
    /// # Errors
    /// `PermissionDenied` if the user is not in the guild or lacks the flag
    #[instrument(skip(self))]
    pub async fn require_guild_admin(&self, user_id: &str, guild_id: Snowflake) -> ServiceResult<GuildSummary> {
        let credential = TokenBroker::new(self.ctx).user_credential(user_id).await?;

        let guild = self
            .ctx
            .platform()
            .fetch_user_guilds(&credential.token)
            .await?
            .into_iter()
            .find(|g| g.id == guild_id);

        match guild {
            Some(guild) if guild.is_administered() => Ok(guild),
            _ => {
                debug!(guild_id = %guild_id, "Caller does not administer guild");
                Err(ServiceError::permission_denied("ADMINISTRATOR"))
            }
        }
    }
}
