//! Subcommand implementations
//!
//! Each module exposes its clap `Args` and an `execute` function that
//! drives the repository and prints to stdout.

pub mod answer;
pub mod db;
pub mod question;
pub mod results;
pub mod survey;
pub mod user;

use survey_core::errors::{ExError, ExErrorKind};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Error for a row the user named that does not exist
pub fn not_found(entity: &str, id: i64) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_entity_id(id)
        .with_message(format!("{} not found", entity))
}
