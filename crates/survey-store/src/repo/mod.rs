//! Repository layer for persisting survey models to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
