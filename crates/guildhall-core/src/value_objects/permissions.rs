//! Permissions bitflags mirroring the chat platform's permission integer
//!
//! The platform transports permission sets as decimal strings because the
//! values exceed the safe-integer range of JavaScript numbers. Parsing goes
//! through an integer type wide enough that no bit is ever lost.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Platform permission flags
    ///
    /// Only the flags the dashboard reasons about are named; unknown bits are
    /// retained so that a parsed value round-trips unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        /// Create instant invites
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Kick members from guild
        const KICK_MEMBERS          = 1 << 1;
        /// Ban members from guild
        const BAN_MEMBERS           = 1 << 2;
        /// Bypass all permission checks
        const ADMINISTRATOR         = 1 << 3;
        /// Create, edit, delete channels
        const MANAGE_CHANNELS       = 1 << 4;
        /// Edit guild settings
        const MANAGE_GUILD          = 1 << 5;
        /// View audit log
        const VIEW_AUDIT_LOG        = 1 << 7;
        /// View channel and read messages
        const VIEW_CHANNEL          = 1 << 10;
        /// Send messages in text channels
        const SEND_MESSAGES         = 1 << 11;
        /// Delete other users' messages
        const MANAGE_MESSAGES       = 1 << 13;
        /// Create, edit, delete, assign roles
        const MANAGE_ROLES          = 1 << 28;
        /// Manage webhooks
        const MANAGE_WEBHOOKS       = 1 << 29;
        /// Time out members
        const MODERATE_MEMBERS      = 1 << 40;
    }
}

impl Permissions {
    /// Check if the permission set contains a required permission
    ///
    /// Administrators bypass all permission checks.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }

    /// Parse from the platform's decimal string representation
    ///
    /// Only plain ASCII digits are accepted. The string is read as a `u128`
    /// and the low 64 bits are kept, so values beyond 2^53 (and beyond 2^64)
    /// keep every defined flag exact.
    pub fn parse(s: &str) -> Result<Self, PermissionsParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PermissionsParseError::InvalidFormat);
        }
        s.parse::<u128>()
            .map(|wide| Permissions::from_bits_retain(wide as u64))
            .map_err(|_| PermissionsParseError::InvalidFormat)
    }

    /// Get a list of all named permissions that are set
    pub fn list(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

/// Error when parsing a permission bitmask from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PermissionsParseError {
    #[error("invalid permission bitmask")]
    InvalidFormat,
}

/// Test whether a decimal-encoded permission integer carries `flag`
///
/// Computes `(value & flag) != 0`. A malformed string evaluates to `false`
/// rather than failing, so a guild with garbage permissions is simply not
/// treated as administered.
pub fn has_permission(permissions_raw: &str, flag: Permissions) -> bool {
    Permissions::parse(permissions_raw).is_ok_and(|perms| perms.intersects(flag))
}

impl Default for Permissions {
    fn default() -> Self {
        Permissions::empty()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.bits().to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PermissionsVisitor;

        impl Visitor<'_> for PermissionsVisitor {
            type Value = Permissions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing permission bits")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                Ok(Permissions::from_bits_retain(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                Permissions::parse(value).map_err(|_| de::Error::custom("invalid permissions string"))
            }
        }

        deserializer.deserialize_any(PermissionsVisitor)
    }
}

impl From<u64> for Permissions {
    fn from(bits: u64) -> Self {
        Permissions::from_bits_retain(bits)
    }
}
