//! Survey Store - SQLite persistence for the survey schema
//!
//! Provides:
//! - Connection management driven by `StoreConfig`
//! - Embedded migrations with checksums and a destructive rebuild path
//! - `SqliteRepo`: per-entity CRUD, transactional batch inserts and
//!   results queries

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::{open_with_config, StoreConfig};
pub use errors::Result;
pub use repo::SqliteRepo;
