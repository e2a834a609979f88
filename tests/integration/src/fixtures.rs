//! Test fixtures and a stub chat platform
//!
//! The stub speaks just enough of the platform's REST API for the engine:
//! guild lists, guild detail, roles, channels and members. Data is scripted
//! up front and served read-only.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// OAuth token the stub accepts for the linked user
pub const USER_TOKEN: &str = "user-access-token";

/// Bot token the stub accepts for the service account
pub const BOT_TOKEN: &str = "bot-token";

// ============================================================================
// Platform JSON builders
// ============================================================================

/// Partial guild as listed by `/users/@me/guilds`
pub fn guild_json(id: &str, name: &str, permissions: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "icon": null,
        "owner": false,
        "permissions": permissions,
        "features": []
    })
}

/// Guild detail with approximate counts
pub fn guild_detail_json(id: &str, name: &str, members: u64, presences: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "icon": null,
        "approximate_member_count": members,
        "approximate_presence_count": presences
    })
}

pub fn role_json(id: &str, name: &str, position: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": 0,
        "position": position,
        "permissions": "0",
        "managed": false
    })
}

pub fn channel_json(id: &str, name: &str, kind: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "position": 0,
        "parent_id": null
    })
}

// ============================================================================
// Stub platform
// ============================================================================

#[derive(Default)]
struct StubState {
    user_guilds: Vec<Value>,
    bot_guilds: Vec<Value>,
    details: HashMap<String, Value>,
    failing_details: HashSet<String>,
    roles: HashMap<String, Vec<Value>>,
    channels: HashMap<String, Vec<Value>>,
    members: HashMap<(String, String), Vec<String>>,
}

/// Scripted chat platform; unscripted guilds and members answer 404
#[derive(Default)]
pub struct StubPlatform {
    state: StubState,
}

impl StubPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guilds listed for the user token
    pub fn user_guilds(mut self, guilds: Vec<Value>) -> Self {
        self.state.user_guilds = guilds;
        self
    }

    /// Guilds listed for the bot token
    pub fn bot_guilds(mut self, guilds: Vec<Value>) -> Self {
        self.state.bot_guilds = guilds;
        self
    }

    pub fn detail(mut self, guild_id: &str, detail: Value) -> Self {
        self.state.details.insert(guild_id.to_string(), detail);
        self
    }

    /// Make the guild's detail endpoint answer 500
    pub fn failing_detail(mut self, guild_id: &str) -> Self {
        self.state.failing_details.insert(guild_id.to_string());
        self
    }

    pub fn roles(mut self, guild_id: &str, roles: Vec<Value>) -> Self {
        self.state.roles.insert(guild_id.to_string(), roles);
        self
    }

    pub fn channels(mut self, guild_id: &str, channels: Vec<Value>) -> Self {
        self.state.channels.insert(guild_id.to_string(), channels);
        self
    }

    pub fn member(mut self, guild_id: &str, user_id: &str, role_ids: &[&str]) -> Self {
        self.state.members.insert(
            (guild_id.to_string(), user_id.to_string()),
            role_ids.iter().map(|id| id.to_string()).collect(),
        );
        self
    }

    /// Serve the stub on an ephemeral port and return its base URL
    pub async fn spawn(self) -> Result<String> {
        let app = Router::new()
            .route("/users/@me/guilds", get(list_guilds))
            .route("/guilds/:guild_id", get(get_guild))
            .route("/guilds/:guild_id/roles", get(get_roles))
            .route("/guilds/:guild_id/channels", get(get_channels))
            .route("/guilds/:guild_id/members/:user_id", get(get_member))
            .with_state(Arc::new(self.state));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(format!("http://{addr}"))
    }
}

type Stub = State<Arc<StubState>>;

fn error(status: StatusCode, message: &str, code: u32) -> Response {
    (status, Json(json!({ "message": message, "code": code }))).into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "401: Unauthorized", 0)
}

fn not_found(message: &str, code: u32) -> Response {
    error(StatusCode::NOT_FOUND, message, code)
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok())
}

fn is_bot(headers: &HeaderMap) -> bool {
    authorization(headers) == Some(format!("Bot {BOT_TOKEN}").as_str())
}

async fn list_guilds(State(stub): Stub, headers: HeaderMap) -> Response {
    let auth = authorization(&headers).unwrap_or_default();
    if auth == format!("Bearer {USER_TOKEN}") {
        Json(stub.user_guilds.clone()).into_response()
    } else if auth == format!("Bot {BOT_TOKEN}") {
        Json(stub.bot_guilds.clone()).into_response()
    } else {
        unauthorized()
    }
}

async fn get_guild(State(stub): Stub, Path(guild_id): Path<String>, headers: HeaderMap) -> Response {
    if !is_bot(&headers) {
        return unauthorized();
    }
    if stub.failing_details.contains(&guild_id) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", 0);
    }
    match stub.details.get(&guild_id) {
        Some(detail) => Json(detail.clone()).into_response(),
        None => not_found("Unknown Guild", 10004),
    }
}

async fn get_roles(State(stub): Stub, Path(guild_id): Path<String>, headers: HeaderMap) -> Response {
    if !is_bot(&headers) {
        return unauthorized();
    }
    match stub.roles.get(&guild_id) {
        Some(roles) => Json(roles.clone()).into_response(),
        None => not_found("Unknown Guild", 10004),
    }
}

async fn get_channels(State(stub): Stub, Path(guild_id): Path<String>, headers: HeaderMap) -> Response {
    if !is_bot(&headers) {
        return unauthorized();
    }
    match stub.channels.get(&guild_id) {
        Some(channels) => Json(channels.clone()).into_response(),
        None => not_found("Unknown Guild", 10004),
    }
}

async fn get_member(
    State(stub): Stub,
    Path((guild_id, user_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if !is_bot(&headers) {
        return unauthorized();
    }
    match stub.members.get(&(guild_id, user_id.clone())) {
        Some(roles) => Json(json!({
            "user": { "id": user_id },
            "roles": roles,
            "joined_at": "2024-01-01T00:00:00+00:00"
        }))
        .into_response(),
        None => not_found("Unknown Member", 10007),
    }
}
