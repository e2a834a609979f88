//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Settings Requests
// ============================================================================

/// Replace the staff role list of a guild
///
/// Role ids are resolved against the guild's current roles; name, color and
/// position are taken from the platform, never from the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStaffRolesRequest {
    #[validate(length(max = 25, message = "At most 25 staff roles may be configured"))]
    pub role_ids: Vec<String>,
}

/// Set or clear the log channel of a guild
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLogChannelRequest {
    /// Channel id, or null to clear
    #[validate(length(min = 1, max = 20, message = "Channel id must be 1-20 characters"))]
    pub channel_id: Option<String>,
}
