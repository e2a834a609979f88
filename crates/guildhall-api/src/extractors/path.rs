//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use guildhall_core::Snowflake;

use crate::response::ApiError;

/// Guild id taken from the `:guild_id` path segment
///
/// Rejects anything that is not a decimal snowflake before a handler runs,
/// so only numeric ids ever reach the platform client.
#[derive(Debug, Clone, Copy)]
pub struct GuildIdPath(pub Snowflake);

#[derive(serde::Deserialize)]
struct RawGuildId {
    guild_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for GuildIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawGuildId>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.guild_id
            .parse()
            .map(GuildIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid guild_id format"))
    }
}
