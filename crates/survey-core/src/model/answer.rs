use serde::{Deserialize, Serialize};

use super::{AnswerId, LikertValue, QuestionId, UserId};

/// One respondent's rating of one question
///
/// `answer_value` is kept as the raw stored integer so that aggregation can
/// classify anything outside the scale instead of failing to load it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub answer_value: i64,
}

impl Answer {
    pub fn new(id: AnswerId, question_id: QuestionId, user_id: UserId, answer_value: i64) -> Self {
        Self {
            id,
            question_id,
            user_id,
            answer_value,
        }
    }

    /// The scale point, if the stored value is on the scale
    pub fn likert(&self) -> Option<LikertValue> {
        LikertValue::try_from(self.answer_value).ok()
    }
}

/// Insert payload for an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub user_id: UserId,
    pub answer_value: i64,
}

impl NewAnswer {
    pub fn new(question_id: QuestionId, user_id: UserId, answer_value: i64) -> Self {
        Self {
            question_id,
            user_id,
            answer_value,
        }
    }

    pub fn from_likert(question_id: QuestionId, user_id: UserId, value: LikertValue) -> Self {
        Self::new(question_id, user_id, value.value())
    }
}
