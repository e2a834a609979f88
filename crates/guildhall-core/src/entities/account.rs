//! Linked account - the identity provider's record tying a dashboard user to
//! a platform account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Provider name under which platform accounts are linked
pub const PLATFORM_PROVIDER: &str = "discord";

/// Linked platform account for a dashboard user
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedAccount {
    /// Dashboard user id
    pub user_id: String,
    pub provider: String,
    /// The user's id on the platform
    pub provider_account_id: Snowflake,
    pub access_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl LinkedAccount {
    /// Get the access token if it is present, non-blank and not expired
    pub fn usable_token(&self, now: DateTime<Utc>) -> Option<&str> {
        if self.expires_at.is_some_and(|expires_at| expires_at <= now) {
            return None;
        }
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}

// Tokens stay out of logs
impl std::fmt::Debug for LinkedAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedAccount")
            .field("user_id", &self.user_id)
            .field("provider", &self.provider)
            .field("provider_account_id", &self.provider_account_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "[redacted]"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
