//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and idempotent application
//! - Destructive schema rebuild for local store resets
//! - Embedded SQL migrations

mod checksums;
mod embedded;
mod runner;

pub use embedded::DATA_TABLES;
pub use runner::{applied_migrations, apply_migrations, rebuild_schema, AppliedMigration};
