//! Service context - dependency container for services
//!
//! Holds the ports and the service credential needed by services.

use std::sync::Arc;

use guildhall_core::traits::{GuildSettingsRepository, LinkedAccountRepository, PlatformClient};
use guildhall_core::PlatformToken;

use super::error::{ServiceError, ServiceResult};

/// Default number of guild detail fetches in flight during enrichment
pub const DEFAULT_ENRICHMENT_CONCURRENCY: usize = 8;

/// Service context containing all dependencies
///
/// Built once at startup and shared. It provides access to:
/// - The guild settings store
/// - The identity provider's linked account store
/// - The chat platform client
/// - The service (bot) credential, if configured
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    settings_repo: Arc<dyn GuildSettingsRepository>,
    account_repo: Arc<dyn LinkedAccountRepository>,

    // Platform
    platform: Arc<dyn PlatformClient>,
    service_token: Option<PlatformToken>,

    // Tuning
    enrichment_concurrency: usize,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        settings_repo: Arc<dyn GuildSettingsRepository>,
        account_repo: Arc<dyn LinkedAccountRepository>,
        platform: Arc<dyn PlatformClient>,
        service_token: Option<PlatformToken>,
        enrichment_concurrency: usize,
    ) -> Self {
        Self {
            settings_repo,
            account_repo,
            platform,
            service_token,
            enrichment_concurrency: enrichment_concurrency.max(1),
        }
    }

    // === Repositories ===

    /// Get the guild settings repository
    pub fn settings_repo(&self) -> &dyn GuildSettingsRepository {
        self.settings_repo.as_ref()
    }

    /// Get the linked account repository
    pub fn account_repo(&self) -> &dyn LinkedAccountRepository {
        self.account_repo.as_ref()
    }

    // === Platform ===

    /// Get the chat platform client
    pub fn platform(&self) -> &dyn PlatformClient {
        self.platform.as_ref()
    }

    /// Get the service credential, if one was configured
    pub fn service_token(&self) -> Option<&PlatformToken> {
        self.service_token.as_ref()
    }

    /// Maximum concurrent detail fetches during enrichment
    pub fn enrichment_concurrency(&self) -> usize {
        self.enrichment_concurrency
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("platform", &"dyn PlatformClient")
            .field("service_token", &self.service_token.is_some())
            .field("enrichment_concurrency", &self.enrichment_concurrency)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    settings_repo: Option<Arc<dyn GuildSettingsRepository>>,
    account_repo: Option<Arc<dyn LinkedAccountRepository>>,
    platform: Option<Arc<dyn PlatformClient>>,
    service_token: Option<PlatformToken>,
    enrichment_concurrency: usize,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            settings_repo: None,
            account_repo: None,
            platform: None,
            service_token: None,
            enrichment_concurrency: DEFAULT_ENRICHMENT_CONCURRENCY,
        }
    }

    pub fn settings_repo(mut self, repo: Arc<dyn GuildSettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn account_repo(mut self, repo: Arc<dyn LinkedAccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn platform(mut self, platform: Arc<dyn PlatformClient>) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set the bot token; blank or absent tokens leave it unconfigured
    pub fn bot_token(mut self, token: Option<String>) -> Self {
        self.service_token = token
            .filter(|t| !t.trim().is_empty())
            .map(PlatformToken::bot);
        self
    }

    pub fn enrichment_concurrency(mut self, limit: usize) -> Self {
        self.enrichment_concurrency = limit;
        self
    }

    /// Build the ServiceContext
    ///
    /// A missing bot token is not an error here; it is reported by each
    /// operation that needs it.
    ///
    /// # Errors
    /// Returns `ServiceError::Configuration` if any required port is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.settings_repo
                .ok_or_else(|| ServiceError::configuration("settings_repo is required"))?,
            self.account_repo
                .ok_or_else(|| ServiceError::configuration("account_repo is required"))?,
            self.platform
                .ok_or_else(|| ServiceError::configuration("platform client is required"))?,
            self.service_token,
            self.enrichment_concurrency,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
