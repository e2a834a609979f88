//! # guildhall-platform
//!
//! Chat platform adapter implementing [`guildhall_core::PlatformClient`]
//! over the platform's REST API with `reqwest`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guildhall_platform::RestPlatformClient;
//!
//! let client = RestPlatformClient::from_config(&config.platform)?;
//! let guilds = client.fetch_user_guilds(&PlatformToken::user(token)).await?;
//! ```

pub mod client;
pub mod mappers;
pub mod models;

pub use client::RestPlatformClient;
