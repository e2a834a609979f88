//! Value objects - immutable types that represent domain concepts

mod permissions;
mod snowflake;
mod token;

pub use permissions::{has_permission, Permissions, PermissionsParseError};
pub use snowflake::{Snowflake, SnowflakeParseError};
pub use token::{PlatformToken, TokenKind};
