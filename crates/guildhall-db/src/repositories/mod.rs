//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in guildhall-core.

mod error;
mod guild_settings;
mod linked_account;

pub use guild_settings::PgGuildSettingsRepository;
pub use linked_account::PgLinkedAccountRepository;
