//! Results command
//!
//! Usage: survey results <SURVEY_ID> [--json]

use clap::Args;
use survey_core::model::SurveyId;
use survey_engine::{CallerScope, SurveyRepository};

use super::{not_found, CommandResult};

#[derive(Debug, Args)]
pub struct ResultsArgs {
    pub survey_id: SurveyId,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(
    args: ResultsArgs,
    repo: &SurveyRepository,
    scope: &CallerScope,
) -> CommandResult {
    let results = repo
        .load_survey_results(scope, args.survey_id)
        .await?
        .ok_or_else(|| not_found("Survey", args.survey_id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", results.render_text());
    }
    Ok(())
}
