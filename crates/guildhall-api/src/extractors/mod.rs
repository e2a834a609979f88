//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path parsing, and validation.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::GuildIdPath;
pub use validated::ValidatedJson;
