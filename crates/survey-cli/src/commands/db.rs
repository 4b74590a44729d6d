//! Database maintenance
//!
//! Usage: survey db reset --yes

use clap::{Args, Subcommand};
use survey_core::errors::{ExError, ExErrorKind};
use survey_engine::{CallerScope, SurveyRepository};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Drop all tables and recreate the schema (deletes every row)
    Reset {
        /// Confirm that all data should be deleted
        #[arg(long)]
        yes: bool,
    },
}

pub async fn execute(args: DbArgs, repo: &SurveyRepository, scope: &CallerScope) -> CommandResult {
    match args.command {
        DbCommand::Reset { yes } => {
            if !yes {
                return Err(ExError::new(ExErrorKind::InvalidInput)
                    .with_op("db_reset")
                    .with_message("refusing to delete all data without --yes")
                    .into());
            }
            repo.reset_store(scope).await?;
            println!("Database reset");
        }
    }
    Ok(())
}
