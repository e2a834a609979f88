//! Database models - SQLx-compatible structs for PostgreSQL tables

mod guild_settings;
mod linked_account;

pub use guild_settings::{GuildSettingsModel, StaffRoleDocument};
pub use linked_account::LinkedAccountModel;
