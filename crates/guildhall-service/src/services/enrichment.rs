//! Enrichment service
//!
//! Attaches approximate member and presence counts to a list of guilds,
//! one detail fetch per guild with bounded concurrency.

use futures::stream::{self, StreamExt};
use guildhall_core::{EnrichedGuild, GuildSummary, PlatformToken};
use tracing::{instrument, warn};

use super::context::ServiceContext;

/// Enrichment service
pub struct EnrichmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EnrichmentService<'a> {
    /// Create a new EnrichmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Enrich every guild with counts
    ///
    /// Never fails and never drops a guild: a failed detail fetch leaves that
    /// guild's counts as `None`. Output order matches input order.
    #[instrument(skip(self, service_token, guilds), fields(count = guilds.len()))]
    pub async fn enrich(
        &self,
        service_token: &PlatformToken,
        guilds: Vec<GuildSummary>,
    ) -> Vec<EnrichedGuild> {
        let platform = self.ctx.platform();

        stream::iter(guilds)
            .map(|guild| async move {
                match platform.fetch_guild_detail(service_token, guild.id).await {
                    Ok(detail) => EnrichedGuild::with_counts(
                        guild,
                        detail.approximate_member_count,
                        detail.approximate_presence_count,
                    ),
                    Err(e) => {
                        warn!(guild_id = %guild.id, error = %e, "Guild detail unavailable, counts omitted");
                        EnrichedGuild::without_counts(guild)
                    }
                }
            })
            .buffered(self.ctx.enrichment_concurrency())
            .collect()
            .await
    }
}
