//! Survey commands
//!
//! Usage: survey survey <create|list|show|update|delete>

use clap::{Args, Subcommand};
use survey_core::model::{NewSurvey, Survey, SurveyId};
use survey_engine::{CallerScope, SurveyRepository};

use super::{not_found, CommandResult};

#[derive(Debug, Args)]
pub struct SurveyArgs {
    #[command(subcommand)]
    pub command: SurveyCommand,
}

#[derive(Debug, Subcommand)]
pub enum SurveyCommand {
    /// Create a survey, optionally with its questions
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Question text; repeat for several questions
        #[arg(long = "question")]
        questions: Vec<String>,
    },
    /// List all surveys
    List,
    /// Show a survey and its questions
    Show { id: SurveyId },
    /// Change title and description
    Update {
        id: SurveyId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Delete a survey with its questions and answers
    Delete { id: SurveyId },
}

pub async fn execute(
    args: SurveyArgs,
    repo: &SurveyRepository,
    scope: &CallerScope,
) -> CommandResult {
    match args.command {
        SurveyCommand::Create {
            title,
            description,
            questions,
        } => {
            let (survey, questions) = repo
                .create_survey_with_questions(scope, NewSurvey::new(title, description), questions)
                .await?;
            println!("Created survey {}", survey.id);
            for question in questions {
                println!("  question {}: {}", question.id, question.text);
            }
        }
        SurveyCommand::List => {
            for survey in repo.list_surveys(scope).await? {
                println!("{}\t{}", survey.id, survey.title);
            }
        }
        SurveyCommand::Show { id } => {
            let survey = repo
                .get_survey(scope, id)
                .await?
                .ok_or_else(|| not_found("Survey", id))?;
            println!("{}\n{}", survey.title, survey.description);
            for question in repo.list_questions_for_survey(scope, id).await? {
                println!("  {}. {}", question.id, question.text);
            }
        }
        SurveyCommand::Update {
            id,
            title,
            description,
        } => {
            let updated = repo
                .update_survey(scope, Survey::new(id, title, description))
                .await?;
            if updated == 0 {
                return Err(not_found("Survey", id).into());
            }
            println!("Updated survey {}", id);
        }
        SurveyCommand::Delete { id } => {
            if repo.delete_survey(scope, id).await? == 0 {
                return Err(not_found("Survey", id).into());
            }
            println!("Deleted survey {}", id);
        }
    }
    Ok(())
}
