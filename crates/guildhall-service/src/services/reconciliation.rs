//! Reconciliation service
//!
//! Splits the guilds a user administers into those the service account
//! already belongs to (`known`) and those it has not joined (`unknown`).

use futures::try_join;
use guildhall_core::{GuildSummary, PlatformToken, ReconciliationResult};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Partition a user's guild list against the service's guild list
///
/// Keeps only guilds where the user holds `ADMINISTRATOR`; both halves
/// preserve the order of `user_guilds`.
pub fn partition_administered(
    user_guilds: Vec<GuildSummary>,
    service_guilds: &[GuildSummary],
) -> ReconciliationResult {
    ReconciliationResult::from_guild_lists(user_guilds, service_guilds)
}

/// Reconciliation service
pub struct ReconciliationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReconciliationService<'a> {
    /// Create a new ReconciliationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch both guild lists concurrently and partition the administered ones
    ///
    /// Fails fast: the first fetch to fail aborts the other and its error is
    /// returned unchanged, so the platform's status reaches the caller.
    #[instrument(skip(self, user_token, service_token))]
    pub async fn reconcile_admin_guilds(
        &self,
        user_token: &PlatformToken,
        service_token: &PlatformToken,
    ) -> ServiceResult<ReconciliationResult> {
        let platform = self.ctx.platform();

        let (user_guilds, service_guilds) = try_join!(
            platform.fetch_user_guilds(user_token),
            platform.fetch_service_guilds(service_token),
        )?;

        let fetched = user_guilds.len();
        let result = partition_administered(user_guilds, &service_guilds);

        debug!(
            fetched,
            known = result.known.len(),
            unknown = result.unknown.len(),
            "Reconciled administered guilds"
        );

        Ok(result)
    }
}
