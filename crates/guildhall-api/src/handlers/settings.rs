//! Guild settings handlers
//!
//! Endpoints for reading and replacing a guild's dashboard settings.

use axum::{extract::State, Json};
use guildhall_service::dto::{GuildSettingsResponse, UpdateLogChannelRequest, UpdateStaffRolesRequest};
use guildhall_service::GuildSettingsService;

use crate::extractors::{AuthUser, GuildIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get guild settings
///
/// GET /guilds/{guild_id}/settings
pub async fn get_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    GuildIdPath(guild_id): GuildIdPath,
) -> ApiResult<Json<GuildSettingsResponse>> {
    let service = GuildSettingsService::new(state.service_context());
    let settings = service.get_settings(&auth.user_id, guild_id).await?;
    Ok(Json(settings))
}

/// Replace the staff role list
///
/// PUT /guilds/{guild_id}/settings/staff-roles
pub async fn update_staff_roles(
    State(state): State<AppState>,
    auth: AuthUser,
    GuildIdPath(guild_id): GuildIdPath,
    ValidatedJson(request): ValidatedJson<UpdateStaffRolesRequest>,
) -> ApiResult<Json<GuildSettingsResponse>> {
    let service = GuildSettingsService::new(state.service_context());
    let settings = service
        .update_staff_roles(&auth.user_id, guild_id, request)
        .await?;
    Ok(Json(settings))
}

/// Set or clear the log channel
///
/// PUT /guilds/{guild_id}/settings/log-channel
pub async fn update_log_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    GuildIdPath(guild_id): GuildIdPath,
    ValidatedJson(request): ValidatedJson<UpdateLogChannelRequest>,
) -> ApiResult<Json<GuildSettingsResponse>> {
    let service = GuildSettingsService::new(state.service_context());
    let settings = service
        .update_log_channel(&auth.user_id, guild_id, request)
        .await?;
    Ok(Json(settings))
}
