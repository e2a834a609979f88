//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of platform and store calls.

pub mod context;
pub mod directory;
pub mod enrichment;
pub mod error;
pub mod guild_access;
pub mod reconciliation;
pub mod settings;
pub mod staff;
pub mod token;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_ENRICHMENT_CONCURRENCY};
pub use directory::GuildDirectoryService;
pub use enrichment::EnrichmentService;
pub use error::{ServiceError, ServiceResult};
pub use guild_access::GuildAccessService;
pub use reconciliation::{partition_administered, ReconciliationService};
pub use settings::GuildSettingsService;
pub use staff::StaffAuthorizationService;
pub use token::{TokenBroker, UserCredential};
