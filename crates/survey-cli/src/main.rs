//! Survey CLI
//!
//! Command-line entry point. Owns the storage lifecycle: the store is
//! opened once per invocation and handed to the repository.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use survey_core::logging_facility::{init, Profile};
use survey_engine::{CallerScope, Storage, SurveyRepository};
use survey_store::StoreConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "survey")]
#[command(about = "Survey - create surveys, collect Likert-scale answers, view results", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, env = "SURVEY_DB", default_value = ".survey/survey.db")]
    db: PathBuf,

    /// Log output format (stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Register, log in and list users
    User(commands::user::UserArgs),
    /// Create, inspect, update and delete surveys
    Survey(commands::survey::SurveyArgs),
    /// Manage the questions of a survey
    Question(commands::question::QuestionArgs),
    /// Record answers
    Answer(commands::answer::AnswerArgs),
    /// Show aggregated results for a survey
    Results(commands::results::ResultsArgs),
    /// Database maintenance
    Db(commands::db::DbArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Cli,
        LogFormat::Json => Profile::Production,
    });

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Storage::open(&StoreConfig::on_disk(&cli.db))?;
    let repo = SurveyRepository::new(storage);
    let scope = CallerScope::new();

    match cli.command {
        Commands::User(args) => commands::user::execute(args, &repo, &scope).await,
        Commands::Survey(args) => commands::survey::execute(args, &repo, &scope).await,
        Commands::Question(args) => commands::question::execute(args, &repo, &scope).await,
        Commands::Answer(args) => commands::answer::execute(args, &repo, &scope).await,
        Commands::Results(args) => commands::results::execute(args, &repo, &scope).await,
        Commands::Db(args) => commands::db::execute(args, &repo, &scope).await,
    }
}
