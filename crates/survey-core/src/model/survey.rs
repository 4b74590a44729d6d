use serde::{Deserialize, Serialize};

use super::SurveyId;

/// A survey authored by an administrator
///
/// Deleting a survey removes its questions and, through them, every answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    /// Storage-assigned identifier
    pub id: SurveyId,

    /// Non-empty title
    pub title: String,

    /// Non-empty description
    pub description: String,
}

impl Survey {
    pub fn new(id: SurveyId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Insert payload for a survey; the id is assigned on insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSurvey {
    pub title: String,
    pub description: String,
}

impl NewSurvey {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Attach the generated id
    pub fn with_id(self, id: SurveyId) -> Survey {
        Survey {
            id,
            title: self.title,
            description: self.description,
        }
    }
}
