//! # guildhall-service
//!
//! Application layer: reconciliation, enrichment, staff authorization and
//! settings management, written against the ports in `guildhall-core`.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    GuildAccessService, GuildDirectoryService, GuildSettingsService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StaffAuthorizationService, TokenBroker,
};
