use survey_core::model::{NewQuestion, Question, QuestionId, SurveyId};
use survey_store::errors::Result;
use survey_store::SqliteRepo;

use super::SurveyRepository;
use crate::scope::CallerScope;

impl SurveyRepository {
    pub async fn insert_question(
        &self,
        scope: &CallerScope,
        question: NewQuestion,
    ) -> Result<QuestionId> {
        self.dispatch(scope, "insert_question", move |conn| {
            SqliteRepo::insert_question(conn, &question)
        })
        .await
    }

    /// All rows or none; ids come back in input order
    pub async fn insert_questions(
        &self,
        scope: &CallerScope,
        questions: Vec<NewQuestion>,
    ) -> Result<Vec<QuestionId>> {
        self.dispatch(scope, "insert_questions", move |conn| {
            SqliteRepo::insert_questions(conn, &questions)
        })
        .await
    }

    pub async fn update_question(&self, scope: &CallerScope, question: Question) -> Result<usize> {
        self.dispatch(scope, "update_question", move |conn| {
            SqliteRepo::update_question(conn, &question)
        })
        .await
    }

    pub async fn delete_question(
        &self,
        scope: &CallerScope,
        question_id: QuestionId,
    ) -> Result<usize> {
        self.dispatch(scope, "delete_question", move |conn| {
            SqliteRepo::delete_question(conn, question_id)
        })
        .await
    }

    pub async fn get_question(
        &self,
        scope: &CallerScope,
        question_id: QuestionId,
    ) -> Result<Option<Question>> {
        self.dispatch(scope, "get_question", move |conn| {
            SqliteRepo::get_question(conn, question_id)
        })
        .await
    }

    pub async fn list_questions_for_survey(
        &self,
        scope: &CallerScope,
        survey_id: SurveyId,
    ) -> Result<Vec<Question>> {
        self.dispatch(scope, "list_questions_for_survey", move |conn| {
            SqliteRepo::list_questions_for_survey(conn, survey_id)
        })
        .await
    }
}
