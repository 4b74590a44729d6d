use survey_core::model::{NewSurvey, Question, Survey, SurveyId};
use survey_store::errors::Result;
use survey_store::SqliteRepo;

use super::SurveyRepository;
use crate::scope::CallerScope;

impl SurveyRepository {
    pub async fn insert_survey(&self, scope: &CallerScope, survey: NewSurvey) -> Result<SurveyId> {
        self.dispatch(scope, "insert_survey", move |conn| {
            SqliteRepo::insert_survey(conn, &survey)
        })
        .await
    }

    /// Insert a survey and its questions as one unit
    pub async fn create_survey_with_questions(
        &self,
        scope: &CallerScope,
        survey: NewSurvey,
        question_texts: Vec<String>,
    ) -> Result<(Survey, Vec<Question>)> {
        self.dispatch(scope, "create_survey_with_questions", move |conn| {
            SqliteRepo::create_survey_with_questions(conn, &survey, &question_texts)
        })
        .await
    }

    pub async fn update_survey(&self, scope: &CallerScope, survey: Survey) -> Result<usize> {
        self.dispatch(scope, "update_survey", move |conn| {
            SqliteRepo::update_survey(conn, &survey)
        })
        .await
    }

    /// Also removes the survey's questions and their answers
    pub async fn delete_survey(&self, scope: &CallerScope, survey_id: SurveyId) -> Result<usize> {
        self.dispatch(scope, "delete_survey", move |conn| {
            SqliteRepo::delete_survey(conn, survey_id)
        })
        .await
    }

    pub async fn get_survey(
        &self,
        scope: &CallerScope,
        survey_id: SurveyId,
    ) -> Result<Option<Survey>> {
        self.dispatch(scope, "get_survey", move |conn| {
            SqliteRepo::get_survey(conn, survey_id)
        })
        .await
    }

    pub async fn list_surveys(&self, scope: &CallerScope) -> Result<Vec<Survey>> {
        self.dispatch(scope, "list_surveys", |conn| SqliteRepo::list_surveys(conn))
            .await
    }
}
