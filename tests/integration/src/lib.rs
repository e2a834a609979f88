//! Integration test utilities for the guildhall API
//!
//! This crate provides a stub chat platform, in-memory stores, and helpers
//! for running end-to-end tests against the REST API.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
pub use stores::*;
