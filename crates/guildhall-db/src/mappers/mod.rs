//! Entity to model mappers
//!
//! - `From<Model> for Entity` / `TryFrom`: database rows to domain objects
//! - document helpers: entity data prepared for JSONB columns

mod guild_settings;
mod ids;
mod linked_account;

pub use guild_settings::staff_roles_document;
pub use ids::{from_db_id, to_db_id};
