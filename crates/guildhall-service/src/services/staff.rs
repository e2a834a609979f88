//! Staff authorization service
//!
//! Decides whether a platform user is staff in a guild by intersecting the
//! member's roles with the guild's configured staff roles. Negative outcomes
//! are decisions, not errors.

use guildhall_core::{
    AuthorizationDecision, AuthorizationReason, PlatformError, PlatformToken, Snowflake,
};
use tracing::{debug, instrument, warn};

use crate::dto::AuthorizationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::token::TokenBroker;

/// Staff authorization service
pub struct StaffAuthorizationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StaffAuthorizationService<'a> {
    /// Create a new StaffAuthorizationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the staff decision for a platform user in a guild
    ///
    /// # Errors
    /// Store failures, and platform failures other than a missing member,
    /// propagate. The guild name lookup never fails the decision.
    #[instrument(skip(self, service_token))]
    pub async fn resolve(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        service_token: &PlatformToken,
    ) -> ServiceResult<AuthorizationDecision> {
        let settings = self
            .ctx
            .settings_repo()
            .find_by_guild(guild_id)
            .await?
            .filter(|s| s.has_staff_configured());

        let Some(settings) = settings else {
            return Ok(AuthorizationDecision::denied(
                AuthorizationReason::StaffNotConfigured,
                None,
            ));
        };

        let member_roles = match self
            .ctx
            .platform()
            .fetch_member_roles(service_token, guild_id, user_id)
            .await
        {
            Ok(roles) => roles,
            Err(PlatformError::NotFound) => {
                return Ok(AuthorizationDecision::denied(
                    AuthorizationReason::NotAMember,
                    None,
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let guild_name = match self
            .ctx
            .platform()
            .fetch_guild_detail(service_token, guild_id)
            .await
        {
            Ok(detail) => Some(detail.name),
            Err(e) => {
                warn!(guild_id = %guild_id, error = %e, "Guild name unavailable");
                None
            }
        };

        let decision = if settings.grants_staff(&member_roles) {
            AuthorizationDecision::authorized(guild_name)
        } else {
            AuthorizationDecision::denied(AuthorizationReason::RoleMismatch, guild_name)
        };

        debug!(reason = decision.reason.code(), "Staff authorization resolved");
        Ok(decision)
    }

    /// Resolve the staff decision for a signed-in dashboard user
    #[instrument(skip(self))]
    pub async fn authorize_user(
        &self,
        user_id: &str,
        guild_id: Snowflake,
    ) -> ServiceResult<AuthorizationResponse> {
        let tokens = TokenBroker::new(self.ctx);
        let credential = tokens.user_credential(user_id).await?;
        let service_token = tokens.service_token()?;

        let decision = self
            .resolve(guild_id, credential.platform_user_id, service_token)
            .await?;

        Ok(AuthorizationResponse::new(guild_id, decision))
    }
}
