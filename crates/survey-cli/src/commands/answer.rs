//! Answer commands
//!
//! Usage: survey answer submit --user <ID> --question <ID> --value <1-5|LABEL>

use clap::{Args, Subcommand};
use survey_core::model::{LikertValue, NewAnswer, QuestionId, UserId};
use survey_engine::{CallerScope, SurveyRepository};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct AnswerArgs {
    #[command(subcommand)]
    pub command: AnswerCommand,
}

#[derive(Debug, Subcommand)]
pub enum AnswerCommand {
    /// Record one answer
    Submit {
        #[arg(long)]
        user: UserId,
        #[arg(long)]
        question: QuestionId,
        /// 1-5, or a label such as "Agree" or "strongly disagree"
        #[arg(long)]
        value: String,
    },
}

pub async fn execute(
    args: AnswerArgs,
    repo: &SurveyRepository,
    scope: &CallerScope,
) -> CommandResult {
    match args.command {
        AnswerCommand::Submit {
            user,
            question,
            value,
        } => {
            let value: LikertValue = value.parse()?;
            let id = repo
                .insert_answer(scope, NewAnswer::from_likert(question, user, value))
                .await?;
            println!("Recorded answer {}: {}", id, value.label());
        }
    }
    Ok(())
}
