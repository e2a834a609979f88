//! Ports - traits implemented by infrastructure crates

mod platform;
mod repositories;

pub use platform::PlatformClient;
pub use repositories::{GuildSettingsRepository, LinkedAccountRepository, RepoResult};
