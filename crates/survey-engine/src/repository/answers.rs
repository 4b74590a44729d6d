use survey_core::model::{Answer, AnswerId, NewAnswer, QuestionId, UserId};
use survey_store::errors::Result;
use survey_store::SqliteRepo;

use super::SurveyRepository;
use crate::scope::CallerScope;

impl SurveyRepository {
    pub async fn insert_answer(&self, scope: &CallerScope, answer: NewAnswer) -> Result<AnswerId> {
        self.dispatch(scope, "insert_answer", move |conn| {
            SqliteRepo::insert_answer(conn, &answer)
        })
        .await
    }

    /// All rows or none; ids come back in input order
    pub async fn insert_answers(
        &self,
        scope: &CallerScope,
        answers: Vec<NewAnswer>,
    ) -> Result<Vec<AnswerId>> {
        self.dispatch(scope, "insert_answers", move |conn| {
            SqliteRepo::insert_answers(conn, &answers)
        })
        .await
    }

    /// Record one respondent's answers to a whole survey at once
    ///
    /// Every value is range-checked before anything is written.
    pub async fn submit_answers(
        &self,
        scope: &CallerScope,
        user_id: UserId,
        responses: Vec<(QuestionId, i64)>,
    ) -> Result<Vec<AnswerId>> {
        let answers: Vec<NewAnswer> = responses
            .into_iter()
            .map(|(question_id, value)| NewAnswer::new(question_id, user_id, value))
            .collect();
        self.dispatch(scope, "submit_answers", move |conn| {
            SqliteRepo::insert_answers(conn, &answers)
        })
        .await
    }

    pub async fn delete_answer(&self, scope: &CallerScope, answer_id: AnswerId) -> Result<usize> {
        self.dispatch(scope, "delete_answer", move |conn| {
            SqliteRepo::delete_answer(conn, answer_id)
        })
        .await
    }

    pub async fn get_answer(
        &self,
        scope: &CallerScope,
        answer_id: AnswerId,
    ) -> Result<Option<Answer>> {
        self.dispatch(scope, "get_answer", move |conn| {
            SqliteRepo::get_answer(conn, answer_id)
        })
        .await
    }

    pub async fn list_answers_for_question(
        &self,
        scope: &CallerScope,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>> {
        self.dispatch(scope, "list_answers_for_question", move |conn| {
            SqliteRepo::list_answers_for_question(conn, question_id)
        })
        .await
    }

    pub async fn list_answers_by_user(
        &self,
        scope: &CallerScope,
        user_id: UserId,
    ) -> Result<Vec<Answer>> {
        self.dispatch(scope, "list_answers_by_user", move |conn| {
            SqliteRepo::list_answers_by_user(conn, user_id)
        })
        .await
    }
}
