//! Guild settings service
//!
//! Reads and replaces the per-guild staff role list and log channel. Every
//! operation requires the caller to administer the guild.

use std::collections::HashMap;

use guildhall_core::{
    dedup_staff_roles, DomainError, GuildSettings, Snowflake, StaffRole, MAX_STAFF_ROLES,
};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{GuildSettingsResponse, UpdateLogChannelRequest, UpdateStaffRolesRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::guild_access::GuildAccessService;
use super::token::TokenBroker;

/// Guild settings service
pub struct GuildSettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildSettingsService<'a> {
    /// Create a new GuildSettingsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the guild's settings, empty if never saved
    #[instrument(skip(self))]
    pub async fn get_settings(
        &self,
        user_id: &str,
        guild_id: Snowflake,
    ) -> ServiceResult<GuildSettingsResponse> {
        GuildAccessService::new(self.ctx)
            .require_guild_admin(user_id, guild_id)
            .await?;

        let settings = self
            .ctx
            .settings_repo()
            .find_by_guild(guild_id)
            .await?
            .unwrap_or_else(|| GuildSettings::new(guild_id));

        Ok(GuildSettingsResponse::from(settings))
    }

    /// Replace the staff role list
    ///
    /// Duplicate ids collapse to one entry. Each id must name a current role
    /// of the guild other than the everyone role.
    #[instrument(skip(self, request), fields(count = request.role_ids.len()))]
    pub async fn update_staff_roles(
        &self,
        user_id: &str,
        guild_id: Snowflake,
        request: UpdateStaffRolesRequest,
    ) -> ServiceResult<GuildSettingsResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let role_ids = request
            .role_ids
            .iter()
            .map(|id| parse_id(id, "role"))
            .collect::<ServiceResult<Vec<_>>>()?;

        GuildAccessService::new(self.ctx)
            .require_guild_admin(user_id, guild_id)
            .await?;
        let service_token = TokenBroker::new(self.ctx).service_token()?;

        let guild_roles: HashMap<Snowflake, StaffRole> = self
            .ctx
            .platform()
            .fetch_guild_roles(service_token, guild_id)
            .await?
            .iter()
            .map(|role| (role.id, StaffRole::from(role)))
            .collect();

        let staff_roles = role_ids
            .iter()
            .map(|id| {
                guild_roles.get(id).cloned().ok_or_else(|| {
                    ServiceError::validation(format!("Role {id} is not an assignable role of this guild"))
                })
            })
            .collect::<ServiceResult<Vec<_>>>()?;
        let staff_roles = dedup_staff_roles(staff_roles);

        if staff_roles.len() > MAX_STAFF_ROLES {
            return Err(DomainError::TooManyStaffRoles {
                max: MAX_STAFF_ROLES,
            }
            .into());
        }

        let settings = self
            .ctx
            .settings_repo()
            .upsert_staff_roles(guild_id, &staff_roles, user_id)
            .await?;

        info!(guild_id = %guild_id, staff_roles = staff_roles.len(), "Staff roles updated");

        Ok(GuildSettingsResponse::from(settings))
    }

    /// Set or clear the log channel
    ///
    /// A channel must be one of the guild's log-capable channels.
    #[instrument(skip(self, request))]
    pub async fn update_log_channel(
        &self,
        user_id: &str,
        guild_id: Snowflake,
        request: UpdateLogChannelRequest,
    ) -> ServiceResult<GuildSettingsResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let channel_id = request
            .channel_id
            .as_deref()
            .map(|id| parse_id(id, "channel"))
            .transpose()?;

        GuildAccessService::new(self.ctx)
            .require_guild_admin(user_id, guild_id)
            .await?;

        if let Some(channel_id) = channel_id {
            let service_token = TokenBroker::new(self.ctx).service_token()?;
            let channels = self
                .ctx
                .platform()
                .fetch_guild_channels(service_token, guild_id)
                .await?;

            if !channels.iter().any(|c| c.id == channel_id) {
                return Err(DomainError::InvalidLogChannel(channel_id).into());
            }
        }

        let settings = self
            .ctx
            .settings_repo()
            .upsert_log_channel(guild_id, channel_id, user_id)
            .await?;

        info!(guild_id = %guild_id, log_channel = ?channel_id, "Log channel updated");

        Ok(GuildSettingsResponse::from(settings))
    }
}

fn parse_id(raw: &str, kind: &str) -> ServiceResult<Snowflake> {
    Snowflake::parse(raw).map_err(|_| ServiceError::validation(format!("Invalid {kind} id: {raw}")))
}
