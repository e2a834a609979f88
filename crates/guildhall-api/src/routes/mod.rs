//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{guilds, health, settings};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(guild_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me/guilds", get(guilds::get_manageable_guilds))
}

/// Guild routes
fn guild_routes() -> Router<AppState> {
    Router::new()
        // Staff authorization
        .route("/guilds/:guild_id/authorization", get(guilds::get_authorization))
        // Pickers
        .route("/guilds/:guild_id/roles", get(guilds::get_guild_roles))
        .route("/guilds/:guild_id/channels", get(guilds::get_guild_channels))
        // Settings
        .route("/guilds/:guild_id/settings", get(settings::get_settings))
        .route(
            "/guilds/:guild_id/settings/staff-roles",
            put(settings::update_staff_roles),
        )
        .route(
            "/guilds/:guild_id/settings/log-channel",
            put(settings::update_log_channel),
        )
}
