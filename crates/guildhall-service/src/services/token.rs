//! Token broker
//!
//! Supplies the two platform credentials: the signed-in user's OAuth token
//! (from the linked account store) and the service's own bot token (from
//! configuration).

use chrono::Utc;
use guildhall_core::{PlatformToken, Snowflake, PLATFORM_PROVIDER};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A user's platform credential together with their platform identity
#[derive(Debug, Clone)]
pub struct UserCredential {
    pub token: PlatformToken,
    /// The user's id on the platform
    pub platform_user_id: Snowflake,
}

/// Token broker
pub struct TokenBroker<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TokenBroker<'a> {
    /// Create a new TokenBroker
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the platform credential linked to a dashboard user
    ///
    /// # Errors
    /// `Unauthenticated` if the user has no linked account or its token is
    /// missing or expired
    #[instrument(skip(self))]
    pub async fn user_credential(&self, user_id: &str) -> ServiceResult<UserCredential> {
        let account = self
            .ctx
            .account_repo()
            .find_linked_account(user_id, PLATFORM_PROVIDER)
            .await?
            .ok_or_else(|| {
                debug!("No linked platform account");
                ServiceError::unauthenticated("No linked platform account")
            })?;

        let token = account.usable_token(Utc::now()).ok_or_else(|| {
            debug!("Linked platform account has no usable token");
            ServiceError::unauthenticated("Platform access token missing or expired")
        })?;

        Ok(UserCredential {
            token: PlatformToken::user(token),
            platform_user_id: account.provider_account_id,
        })
    }

    /// Get the service's bot credential
    ///
    /// # Errors
    /// `Configuration` if no bot token was configured
    pub fn service_token(&self) -> ServiceResult<&'a PlatformToken> {
        self.ctx
            .service_token()
            .ok_or_else(|| ServiceError::configuration("PLATFORM_BOT_TOKEN is not configured"))
    }
}
