//! Wire payloads returned by the platform's REST API
//!
//! Ids are required on every payload; a missing id fails the whole response.
//! Every other field falls back to a neutral default, including when the
//! platform sends a value of the wrong shape.

use guildhall_core::{ChannelKind, Permissions, Snowflake};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Entry of `GET /users/@me/guilds`
#[derive(Debug, Clone, Deserialize)]
pub struct PartialGuildPayload {
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    #[serde(default = "zero_permissions", deserialize_with = "permissions_string")]
    pub permissions: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Body of `GET /guilds/{id}?with_counts=true`
#[derive(Debug, Clone, Deserialize)]
pub struct GuildPayload {
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub approximate_member_count: Option<u64>,
    #[serde(default)]
    pub approximate_presence_count: Option<u64>,
}

/// Entry of `GET /guilds/{id}/roles`
#[derive(Debug, Clone, Deserialize)]
pub struct RolePayload {
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: i32,
    #[serde(default)]
    pub position: i32,
    #[serde(default, deserialize_with = "lenient_permissions")]
    pub permissions: Permissions,
    #[serde(default)]
    pub managed: bool,
}

/// Entry of `GET /guilds/{id}/channels`
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelPayload {
    pub id: Snowflake,
    #[serde(
        rename = "type",
        default = "unknown_channel_kind",
        deserialize_with = "lenient_channel_kind"
    )]
    pub kind: ChannelKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub parent_id: Option<Snowflake>,
}

/// Body of `GET /guilds/{id}/members/{user_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct MemberPayload {
    #[serde(default)]
    pub roles: Vec<Snowflake>,
}

/// Error body the platform sends with non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: i64,
}

fn zero_permissions() -> String {
    "0".to_string()
}

fn unknown_channel_kind() -> ChannelKind {
    ChannelKind::Other(-1)
}

/// Keep the permission bitmask as its exact decimal text
///
/// Numbers are accepted too and converted without going through a float.
/// Values that cannot be a bitmask (negative, fractional, non-numeric) become
/// an empty string, which `has_permission` evaluates as absent, so one bad
/// entry never fails the list it arrives in.
fn permissions_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.as_u64().map_or_else(String::new, |bits| bits.to_string()),
        Value::Null => zero_permissions(),
        _ => String::new(),
    })
}

/// Parse a role's permission bitmask, treating malformed values as empty
fn lenient_permissions<'de, D>(deserializer: D) -> Result<Permissions, D::Error>
where
    D: Deserializer<'de>,
{
    let text = permissions_string(deserializer)?;
    Ok(Permissions::parse(&text).unwrap_or_default())
}

/// Channel kind from the platform integer; anything else is an unknown kind
fn lenient_channel_kind<'de, D>(deserializer: D) -> Result<ChannelKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_i64().map_or_else(unknown_channel_kind, ChannelKind::from),
        _ => unknown_channel_kind(),
    })
}
