//! Role entities - platform roles and the staff roles configured per guild

use std::collections::HashSet;

use crate::value_objects::{Permissions, Snowflake};

/// Name the platform gives the implicit role every member holds
pub const EVERYONE_ROLE_NAME: &str = "@everyone";

/// Role as returned by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
    pub color: i32,
    pub position: i32,
    pub permissions: Permissions,
    /// Role is owned by an integration and cannot be assigned manually
    pub managed: bool,
}

impl Role {
    /// Create a new Role
    pub fn new(id: Snowflake, name: String, position: i32) -> Self {
        Self {
            id,
            name,
            color: 0,
            position,
            permissions: Permissions::empty(),
            managed: false,
        }
    }

    /// Check if this is the guild's implicit everyone role
    ///
    /// The platform gives that role the guild's own id.
    #[inline]
    pub fn is_everyone(&self, guild_id: Snowflake) -> bool {
        self.id == guild_id || self.name == EVERYONE_ROLE_NAME
    }

    /// Get the color as a hex string (without #)
    pub fn color_hex(&self) -> String {
        format!("{:06x}", self.color)
    }
}

/// Drop the everyone role and order the rest highest position first
///
/// The sort is stable, so roles sharing a position keep their input order.
pub fn sort_guild_roles(roles: Vec<Role>, guild_id: Snowflake) -> Vec<Role> {
    let mut roles: Vec<Role> = roles
        .into_iter()
        .filter(|role| !role.is_everyone(guild_id))
        .collect();
    roles.sort_by(|a, b| b.position.cmp(&a.position));
    roles
}

/// Role designated by a guild operator as conferring staff authorization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRole {
    pub id: Snowflake,
    pub name: String,
    pub color: i32,
    pub position: i32,
}

impl From<&Role> for StaffRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            color: role.color,
            position: role.position,
        }
    }
}

/// Collapse a staff role list to a set keyed by id
///
/// The first occurrence of each id wins and list order is otherwise kept.
pub fn dedup_staff_roles(roles: Vec<StaffRole>) -> Vec<StaffRole> {
    let mut seen = HashSet::with_capacity(roles.len());
    roles.into_iter().filter(|role| seen.insert(role.id)).collect()
}
