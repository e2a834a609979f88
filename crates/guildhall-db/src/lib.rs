//! # guildhall-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management and bundled migrations
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guildhall_db::{create_pool, run_migrations, DatabaseConfig, PgGuildSettingsRepository};
//!
//! let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
//! run_migrations(&pool).await?;
//! let settings_repo = PgGuildSettingsRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgGuildSettingsRepository, PgLinkedAccountRepository};
