//! API Integration Tests
//!
//! Each test serves a scripted stub platform on an ephemeral port and runs
//! the real router, platform client and services against it. Stores are in
//! memory, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

const DASHBOARD_USER: &str = "dash-user-1";
const PLATFORM_USER: &str = "700";

/// Guild the bot has joined, administered by the user
const KNOWN: &str = "101";
/// Guild the user is in without administrator
const MEMBER_ONLY: &str = "102";
/// Administered guild the bot has not joined; the bitmask is above 2^53
const UNKNOWN: &str = "103";
const HIGH_ADMIN_PERMISSIONS: &str = "9007199254741000";

fn platform() -> StubPlatform {
    StubPlatform::new()
        .user_guilds(vec![
            guild_json(KNOWN, "Known", "8"),
            guild_json(MEMBER_ONLY, "Member Only", "1024"),
            guild_json(UNKNOWN, "Unknown", HIGH_ADMIN_PERMISSIONS),
        ])
        .bot_guilds(vec![
            guild_json(KNOWN, "Known", "0"),
            guild_json(MEMBER_ONLY, "Member Only", "0"),
        ])
        .detail(KNOWN, guild_detail_json(KNOWN, "Known", 50, 20))
        .detail(MEMBER_ONLY, guild_detail_json(MEMBER_ONLY, "Member Only", 9, 9))
        .roles(
            KNOWN,
            vec![
                role_json(KNOWN, "@everyone", 0),
                role_json("201", "Member", 1),
                role_json("203", "Admin", 3),
                role_json("202", "Moderator", 2),
            ],
        )
        .channels(
            KNOWN,
            vec![
                channel_json("301", "general", 0),
                channel_json("302", "Voice", 2),
                channel_json("303", "announcements", 5),
                channel_json("304", "Category", 4),
            ],
        )
}

/// Start a server over the stub with the dashboard user linked
async fn start(stub: StubPlatform) -> (TestServer, String) {
    let platform_url = stub.spawn().await.expect("Failed to start stub platform");
    let server = TestServer::start(&platform_url)
        .await
        .expect("Failed to start server");
    server.accounts.link(DASHBOARD_USER, PLATFORM_USER, USER_TOKEN);
    let token = server.token_for(DASHBOARD_USER);
    (server, token)
}

fn guild_path(guild_id: &str, rest: &str) -> String {
    format!("/api/v1/guilds/{guild_id}{rest}")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (server, _) = start(StubPlatform::new()).await;
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let (server, _) = start(StubPlatform::new()).await;
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_missing_session_is_rejected() {
    let (server, _) = start(platform()).await;
    let response = server.get("/api/v1/users/@me/guilds").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_invalid_session_is_rejected() {
    let (server, _) = start(platform()).await;
    let response = server
        .get_auth("/api/v1/users/@me/guilds", "not-a-jwt")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Manageable Guild Tests
// ============================================================================

#[tokio::test]
async fn test_manageable_guilds_partition_and_enrichment() {
    let (server, token) = start(platform()).await;

    let response = server
        .get_auth("/api/v1/users/@me/guilds", &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let known = body["known"].as_array().unwrap();
    assert_eq!(known.len(), 1);
    assert_eq!(known[0]["id"], KNOWN);
    assert_eq!(known[0]["approximate_member_count"], 50);
    assert_eq!(known[0]["approximate_presence_count"], 20);
    assert_eq!(known[0]["approximate_offline_count"], 30);

    let unknown = body["unknown"].as_array().unwrap();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0]["id"], UNKNOWN);
    // Bitmask passes through as the exact decimal string
    assert_eq!(unknown[0]["permissions"], HIGH_ADMIN_PERMISSIONS);
    assert!(unknown[0].get("approximate_member_count").is_none());
}

#[tokio::test]
async fn test_manageable_guilds_degrade_when_detail_fails() {
    let stub = platform()
        .bot_guilds(vec![
            guild_json(KNOWN, "Known", "0"),
            guild_json(UNKNOWN, "Unknown", "0"),
        ])
        .failing_detail(UNKNOWN);
    let (server, token) = start(stub).await;

    let response = server
        .get_auth("/api/v1/users/@me/guilds", &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let known = body["known"].as_array().unwrap();
    assert_eq!(known.len(), 2);
    assert_eq!(known[0]["id"], KNOWN);
    assert_eq!(known[0]["approximate_offline_count"], 30);
    assert_eq!(known[1]["id"], UNKNOWN);
    assert!(known[1]["approximate_member_count"].is_null());
    assert!(known[1]["approximate_offline_count"].is_null());
    assert!(body["unknown"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_manageable_guilds_without_linked_account() {
    let (server, _) = start(platform()).await;
    let token = server.token_for("someone-else");

    let response = server
        .get_auth("/api/v1/users/@me/guilds", &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_manageable_guilds_with_revoked_user_token() {
    let (server, token) = start(platform()).await;
    server
        .accounts
        .link(DASHBOARD_USER, PLATFORM_USER, "revoked-token");

    let response = server
        .get_auth("/api/v1/users/@me/guilds", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_manageable_guilds_without_bot_token() {
    let platform_url = platform().spawn().await.unwrap();
    let server = TestServer::start_without_bot_token(&platform_url)
        .await
        .unwrap();
    server.accounts.link(DASHBOARD_USER, PLATFORM_USER, USER_TOKEN);
    let token = server.token_for(DASHBOARD_USER);

    let response = server
        .get_auth("/api/v1/users/@me/guilds", &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(code, "CONFIG_ERROR");
}

// ============================================================================
// Staff Authorization Tests
// ============================================================================

#[tokio::test]
async fn test_authorization_without_staff_roles() {
    let (server, token) = start(platform().member(KNOWN, PLATFORM_USER, &["203"])).await;

    let response = server
        .get_auth(&guild_path(KNOWN, "/authorization"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["guild_id"], KNOWN);
    assert_eq!(body["is_staff"], false);
    assert_eq!(body["reason"], "STAFF_NOT_CONFIGURED");
    assert!(body["guild_name"].is_null());
}

#[tokio::test]
async fn test_authorization_for_staff_member() {
    let (server, token) = start(platform().member(KNOWN, PLATFORM_USER, &["201", "203"])).await;
    server.settings.seed_staff_roles(KNOWN, &[("203", "Admin")]);

    let response = server
        .get_auth(&guild_path(KNOWN, "/authorization"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["is_staff"], true);
    assert_eq!(body["reason"], "AUTHORIZED");
    assert_eq!(body["guild_name"], "Known");
}

#[tokio::test]
async fn test_authorization_role_mismatch() {
    let (server, token) = start(platform().member(KNOWN, PLATFORM_USER, &["201"])).await;
    server.settings.seed_staff_roles(KNOWN, &[("203", "Admin")]);

    let response = server
        .get_auth(&guild_path(KNOWN, "/authorization"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["is_staff"], false);
    assert_eq!(body["reason"], "ROLE_MISMATCH");
    assert_eq!(body["guild_name"], "Known");
}

#[tokio::test]
async fn test_authorization_for_non_member() {
    let (server, token) = start(platform()).await;
    server.settings.seed_staff_roles(KNOWN, &[("203", "Admin")]);

    let response = server
        .get_auth(&guild_path(KNOWN, "/authorization"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["is_staff"], false);
    assert_eq!(body["reason"], "NOT_A_MEMBER");
}

#[tokio::test]
async fn test_authorization_rejects_malformed_guild_id() {
    let (server, token) = start(platform()).await;

    let response = server
        .get_auth(&guild_path("not-a-number", "/authorization"), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Role & Channel Picker Tests
// ============================================================================

#[tokio::test]
async fn test_roles_are_sorted_without_everyone() {
    let (server, token) = start(platform()).await;

    let response = server
        .get_auth(&guild_path(KNOWN, "/roles"), &token)
        .await
        .unwrap();
    let roles: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<&str> = roles.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Admin", "Moderator", "Member"]);
    assert_eq!(roles[0]["id"], "203");
}

#[tokio::test]
async fn test_channels_are_filtered_to_log_targets() {
    let (server, token) = start(platform()).await;

    let response = server
        .get_auth(&guild_path(KNOWN, "/channels"), &token)
        .await
        .unwrap();
    let channels: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<&str> = channels.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["301", "303"]);
    assert_eq!(channels[1]["type"], 5);
}

#[tokio::test]
async fn test_pickers_require_administrator() {
    let (server, token) = start(platform()).await;

    let response = server
        .get_auth(&guild_path(MEMBER_ONLY, "/roles"), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "MISSING_PERMISSIONS");

    let response = server
        .get_auth(&guild_path(MEMBER_ONLY, "/channels"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Settings Tests
// ============================================================================

#[tokio::test]
async fn test_settings_default_to_empty() {
    let (server, token) = start(platform()).await;

    let response = server
        .get_auth(&guild_path(KNOWN, "/settings"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["guild_id"], KNOWN);
    assert!(body["staff_roles"].as_array().unwrap().is_empty());
    assert!(body["log_channel_id"].is_null());
}

#[tokio::test]
async fn test_update_staff_roles_then_authorize() {
    let (server, token) = start(platform().member(KNOWN, PLATFORM_USER, &["202"])).await;

    let response = server
        .put_auth(
            &guild_path(KNOWN, "/settings/staff-roles"),
            &token,
            &json!({ "role_ids": ["202", "203", "202"] }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<&str> = body["staff_roles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Moderator", "Admin"]);
    assert_eq!(body["last_updated_by"], DASHBOARD_USER);

    // The saved list now drives staff authorization
    let response = server
        .get_auth(&guild_path(KNOWN, "/authorization"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["reason"], "AUTHORIZED");

    let response = server
        .get_auth(&guild_path(KNOWN, "/settings"), &token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["staff_roles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_staff_roles_rejects_unknown_role() {
    let (server, token) = start(platform()).await;

    let response = server
        .put_auth(
            &guild_path(KNOWN, "/settings/staff-roles"),
            &token,
            &json!({ "role_ids": ["999"] }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(server.settings.get(KNOWN).is_none());
}

#[tokio::test]
async fn test_update_staff_roles_rejects_malformed_body() {
    let (server, token) = start(platform()).await;

    let response = server
        .put_auth(
            &guild_path(KNOWN, "/settings/staff-roles"),
            &token,
            &json!({ "roles": "203" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_update_staff_roles_requires_administrator() {
    let (server, token) = start(platform()).await;

    let response = server
        .put_auth(
            &guild_path(MEMBER_ONLY, "/settings/staff-roles"),
            &token,
            &json!({ "role_ids": [] }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    assert!(server.settings.get(MEMBER_ONLY).is_none());
}

#[tokio::test]
async fn test_update_log_channel_set_and_clear() {
    let (server, token) = start(platform()).await;
    let path = guild_path(KNOWN, "/settings/log-channel");

    let response = server
        .put_auth(&path, &token, &json!({ "channel_id": "303" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["log_channel_id"], "303");

    let response = server
        .put_auth(&path, &token, &json!({ "channel_id": null }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["log_channel_id"].is_null());
}

#[tokio::test]
async fn test_update_log_channel_rejects_voice_channel() {
    let (server, token) = start(platform()).await;

    let response = server
        .put_auth(
            &guild_path(KNOWN, "/settings/log-channel"),
            &token,
            &json!({ "channel_id": "302" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_LOG_CHANNEL");
}
