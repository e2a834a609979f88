//! Staff authorization outcome

use serde::{Deserialize, Serialize};

/// Why a staff authorization check resolved the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationReason {
    /// The member holds at least one staff role
    Authorized,
    /// The guild has no staff roles configured
    StaffNotConfigured,
    /// The user is not a member of the guild
    NotAMember,
    /// The member holds none of the staff roles
    RoleMismatch,
}

impl AuthorizationReason {
    /// Get the reason as its wire code
    pub fn code(self) -> &'static str {
        match self {
            Self::Authorized => "AUTHORIZED",
            Self::StaffNotConfigured => "STAFF_NOT_CONFIGURED",
            Self::NotAMember => "NOT_A_MEMBER",
            Self::RoleMismatch => "ROLE_MISMATCH",
        }
    }
}

/// Ephemeral result of a staff authorization check, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationDecision {
    pub is_staff: bool,
    pub guild_name: Option<String>,
    pub reason: AuthorizationReason,
}

impl AuthorizationDecision {
    /// Member holds a staff role
    pub fn authorized(guild_name: Option<String>) -> Self {
        Self {
            is_staff: true,
            guild_name,
            reason: AuthorizationReason::Authorized,
        }
    }

    /// Check failed; `reason` must not be `Authorized`
    pub fn denied(reason: AuthorizationReason, guild_name: Option<String>) -> Self {
        debug_assert!(reason != AuthorizationReason::Authorized);
        Self {
            is_staff: false,
            guild_name,
            reason,
        }
    }
}
