//! Question commands
//!
//! Usage: survey question <add|list|update|delete>

use clap::{Args, Subcommand};
use survey_core::model::{NewQuestion, QuestionId, SurveyId};
use survey_engine::{CallerScope, SurveyRepository};

use super::{not_found, CommandResult};

#[derive(Debug, Args)]
pub struct QuestionArgs {
    #[command(subcommand)]
    pub command: QuestionCommand,
}

#[derive(Debug, Subcommand)]
pub enum QuestionCommand {
    /// Add a question to a survey
    Add { survey_id: SurveyId, text: String },
    /// List the questions of a survey
    List { survey_id: SurveyId },
    /// Replace a question's text
    Update { id: QuestionId, text: String },
    /// Delete a question and its answers
    Delete { id: QuestionId },
}

pub async fn execute(
    args: QuestionArgs,
    repo: &SurveyRepository,
    scope: &CallerScope,
) -> CommandResult {
    match args.command {
        QuestionCommand::Add { survey_id, text } => {
            let id = repo
                .insert_question(scope, NewQuestion::new(survey_id, text))
                .await?;
            println!("Added question {}", id);
        }
        QuestionCommand::List { survey_id } => {
            for question in repo.list_questions_for_survey(scope, survey_id).await? {
                println!("{}\t{}", question.id, question.text);
            }
        }
        QuestionCommand::Update { id, text } => {
            let mut question = repo
                .get_question(scope, id)
                .await?
                .ok_or_else(|| not_found("Question", id))?;
            question.text = text;
            repo.update_question(scope, question).await?;
            println!("Updated question {}", id);
        }
        QuestionCommand::Delete { id } => {
            if repo.delete_question(scope, id).await? == 0 {
                return Err(not_found("Question", id).into());
            }
            println!("Deleted question {}", id);
        }
    }
    Ok(())
}
