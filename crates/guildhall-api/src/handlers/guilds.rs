//! Guild handlers
//!
//! Endpoints for the manageable guild list, staff authorization, and the
//! role and channel pickers.

use axum::{extract::State, Json};
use guildhall_service::dto::{
    AuthorizationResponse, ChannelResponse, ManageableGuildsResponse, RoleResponse,
};
use guildhall_service::{GuildAccessService, GuildDirectoryService, StaffAuthorizationService};

use crate::extractors::{AuthUser, GuildIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List guilds the current user administers
///
/// GET /users/@me/guilds
pub async fn get_manageable_guilds(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ManageableGuildsResponse>> {
    let service = GuildAccessService::new(state.service_context());
    let guilds = service.list_manageable_guilds(&auth.user_id).await?;
    Ok(Json(guilds))
}

/// Staff authorization decision for the current user
///
/// GET /guilds/{guild_id}/authorization
pub async fn get_authorization(
    State(state): State<AppState>,
    auth: AuthUser,
    GuildIdPath(guild_id): GuildIdPath,
) -> ApiResult<Json<AuthorizationResponse>> {
    let service = StaffAuthorizationService::new(state.service_context());
    let decision = service.authorize_user(&auth.user_id, guild_id).await?;
    Ok(Json(decision))
}

/// Get guild roles for the staff role picker
///
/// GET /guilds/{guild_id}/roles
pub async fn get_guild_roles(
    State(state): State<AppState>,
    auth: AuthUser,
    GuildIdPath(guild_id): GuildIdPath,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let service = GuildDirectoryService::new(state.service_context());
    let roles = service.list_roles(&auth.user_id, guild_id).await?;
    Ok(Json(roles))
}

/// Get guild channels for the log channel picker
///
/// GET /guilds/{guild_id}/channels
pub async fn get_guild_channels(
    State(state): State<AppState>,
    auth: AuthUser,
    GuildIdPath(guild_id): GuildIdPath,
) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let service = GuildDirectoryService::new(state.service_context());
    let channels = service.list_channels(&auth.user_id, guild_id).await?;
    Ok(Json(channels))
}
