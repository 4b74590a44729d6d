use survey_core::model::{QuestionId, SurveyId};
use survey_core::results::{aggregate_answers, Distribution, SurveyResults};
use survey_store::errors::Result;
use survey_store::migrations::rebuild_schema;
use survey_store::SqliteRepo;

use super::SurveyRepository;
use crate::scope::CallerScope;

impl SurveyRepository {
    /// Aggregated answers for one question; empty when it has none
    pub async fn question_distribution(
        &self,
        scope: &CallerScope,
        question_id: QuestionId,
    ) -> Result<Distribution> {
        self.dispatch(scope, "question_distribution", move |conn| {
            let answers = SqliteRepo::list_answers_for_question(conn, question_id)?;
            Ok(aggregate_answers(&answers))
        })
        .await
    }

    /// `None` when the survey does not exist
    pub async fn load_survey_results(
        &self,
        scope: &CallerScope,
        survey_id: SurveyId,
    ) -> Result<Option<SurveyResults>> {
        self.dispatch(scope, "load_survey_results", move |conn| {
            SqliteRepo::load_survey_results(conn, survey_id)
        })
        .await
    }

    /// Drop and recreate every table, discarding all data
    pub async fn reset_store(&self, scope: &CallerScope) -> Result<()> {
        self.dispatch(scope, "reset_store", |conn| rebuild_schema(conn))
            .await
    }
}
