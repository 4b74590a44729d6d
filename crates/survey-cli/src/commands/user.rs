//! User commands
//!
//! Usage: survey user <register|login|list>

use clap::{Args, Subcommand};
use survey_core::errors::{ExError, ExErrorKind};
use survey_core_types::Sensitive;
use survey_engine::{CallerScope, SurveyRepository};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create an account
    Register(CredentialArgs),
    /// Check a username and password
    Login(CredentialArgs),
    /// List accounts
    List {
        /// Only administrators
        #[arg(long)]
        admins: bool,
    },
}

#[derive(Debug, Args)]
pub struct CredentialArgs {
    pub username: String,

    #[arg(long, env = "SURVEY_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Grant administrator rights (register only)
    #[arg(long)]
    pub admin: bool,
}

pub async fn execute(args: UserArgs, repo: &SurveyRepository, scope: &CallerScope) -> CommandResult {
    match args.command {
        UserCommand::Register(creds) => {
            let user = repo
                .register_user(scope, creds.username, Sensitive::new(creds.password), creds.admin)
                .await?;
            println!("Registered user {} ({})", user.id, user.username);
        }
        UserCommand::Login(creds) => {
            let user = repo
                .login(scope, creds.username, Sensitive::new(creds.password))
                .await?
                .ok_or_else(|| {
                    ExError::new(ExErrorKind::InvalidCredentials)
                        .with_op("login")
                        .with_message("invalid username or password")
                })?;
            let role = if user.is_admin { "admin" } else { "user" };
            println!("Logged in as {} (id {}, {})", user.username, user.id, role);
        }
        UserCommand::List { admins } => {
            let users = if admins {
                repo.list_admin_users(scope).await?
            } else {
                repo.list_users(scope).await?
            };
            for user in users {
                let role = if user.is_admin { "admin" } else { "user" };
                println!("{}\t{}\t{}", user.id, user.username, role);
            }
        }
    }
    Ok(())
}
