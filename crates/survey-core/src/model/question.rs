use serde::{Deserialize, Serialize};

use super::{QuestionId, SurveyId};

/// A Likert-scale statement belonging to exactly one survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub survey_id: SurveyId,
    pub text: String,
}

impl Question {
    pub fn new(id: QuestionId, survey_id: SurveyId, text: impl Into<String>) -> Self {
        Self {
            id,
            survey_id,
            text: text.into(),
        }
    }
}

/// Insert payload for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub survey_id: SurveyId,
    pub text: String,
}

impl NewQuestion {
    pub fn new(survey_id: SurveyId, text: impl Into<String>) -> Self {
        Self {
            survey_id,
            text: text.into(),
        }
    }

    /// Build one payload per text, all targeting the same survey
    pub fn batch<I, S>(survey_id: SurveyId, texts: I) -> Vec<NewQuestion>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .map(|text| NewQuestion::new(survey_id, text))
            .collect()
    }
}
