//! REST implementation of the platform port

use std::time::Duration;

use async_trait::async_trait;
use guildhall_common::PlatformConfig;
use guildhall_core::{
    filter_log_channels, sort_guild_roles, Channel, GuildDetail, GuildSummary, PlatformClient,
    PlatformError, PlatformResult, PlatformToken, Role, Snowflake,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::models::{
    ChannelPayload, ErrorPayload, GuildPayload, MemberPayload, PartialGuildPayload, RolePayload,
};

/// Platform client over HTTPS
///
/// Construct once at startup and share; the inner `reqwest::Client` pools
/// connections.
#[derive(Debug, Clone)]
pub struct RestPlatformClient {
    http: Client,
    base_url: String,
}

impl RestPlatformClient {
    /// Create a client for the given API base URL with a per-request timeout
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> PlatformResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("guildhall/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlatformError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from application configuration
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised
    pub fn from_config(config: &PlatformConfig) -> PlatformResult<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON resource, mapping statuses onto `PlatformError`
    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &PlatformToken,
        path: &str,
        query: &[(&str, &str)],
    ) -> PlatformResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, token.authorization_header())
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(path, error = %e, "Platform request failed");
                PlatformError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(path, "Platform resource not found");
            return Err(PlatformError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorPayload>(&body)
                .map(|payload| payload.message)
                .ok()
                .filter(|message| !message.is_empty())
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();

            warn!(path, status = status.as_u16(), %message, "Platform rejected request");
            return Err(PlatformError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            warn!(path, error = %e, "Failed to parse platform response");
            PlatformError::Decode(e.to_string())
        })
    }

    async fn fetch_current_user_guilds(
        &self,
        token: &PlatformToken,
    ) -> PlatformResult<Vec<GuildSummary>> {
        let guilds: Vec<PartialGuildPayload> =
            self.get_json(token, "/users/@me/guilds", &[]).await?;
        Ok(guilds.into_iter().map(GuildSummary::from).collect())
    }
}

#[async_trait]
impl PlatformClient for RestPlatformClient {
    #[instrument(skip(self, user_token))]
    async fn fetch_user_guilds(&self, user_token: &PlatformToken) -> PlatformResult<Vec<GuildSummary>> {
        self.fetch_current_user_guilds(user_token).await
    }

    #[instrument(skip(self, service_token))]
    async fn fetch_service_guilds(
        &self,
        service_token: &PlatformToken,
    ) -> PlatformResult<Vec<GuildSummary>> {
        self.fetch_current_user_guilds(service_token).await
    }

    #[instrument(skip(self, service_token))]
    async fn fetch_guild_detail(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<GuildDetail> {
        let guild: GuildPayload = self
            .get_json(
                service_token,
                &format!("/guilds/{guild_id}"),
                &[("with_counts", "true")],
            )
            .await?;
        Ok(guild.into())
    }

    #[instrument(skip(self, service_token))]
    async fn fetch_guild_roles(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<Vec<Role>> {
        let roles: Vec<RolePayload> = self
            .get_json(service_token, &format!("/guilds/{guild_id}/roles"), &[])
            .await?;
        let roles = roles.into_iter().map(Role::from).collect();
        Ok(sort_guild_roles(roles, guild_id))
    }

    #[instrument(skip(self, service_token))]
    async fn fetch_guild_channels(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<Vec<Channel>> {
        let channels: Vec<ChannelPayload> = self
            .get_json(service_token, &format!("/guilds/{guild_id}/channels"), &[])
            .await?;
        let channels = channels.into_iter().map(Channel::from).collect();
        Ok(filter_log_channels(channels))
    }

    #[instrument(skip(self, service_token))]
    async fn fetch_member_roles(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> PlatformResult<Vec<Snowflake>> {
        let member: MemberPayload = self
            .get_json(
                service_token,
                &format!("/guilds/{guild_id}/members/{user_id}"),
                &[],
            )
            .await?;
        Ok(member.roles)
    }
}
