//! Survey Engine - async repository layer
//!
//! Runs every data-access call on tokio's blocking pool so callers never
//! block on SQLite. Calls are tied to a [`CallerScope`]; closing or
//! dropping the scope cancels whatever it still has in flight.
//!
//! This layer owns boundary logging: each repository operation emits one
//! start event and one end (or end_error) event.

pub mod repository;
pub mod scope;
pub mod storage;

pub use repository::SurveyRepository;
pub use scope::{CallerScope, ScopeWatch};
pub use storage::Storage;
