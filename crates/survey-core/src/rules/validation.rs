//! Write-boundary validation
//!
//! Every insert and update in the store runs one of these checks before any
//! SQL is issued. Text fields are rejected when empty or whitespace-only.

use crate::errors::{Result, SurveyError};
use crate::model::{LikertValue, NewAnswer, NewQuestion, NewSurvey, NewUser};

const MAX_USERNAME_LEN: usize = 64;

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validate survey title and description
///
/// # Errors
/// * `InvalidTitle` - title is blank
/// * `InvalidDescription` - description is blank
pub fn validate_survey(title: &str, description: &str) -> Result<()> {
    if is_blank(title) {
        return Err(SurveyError::InvalidTitle {
            reason: "Title cannot be empty or whitespace-only".to_string(),
        });
    }
    if is_blank(description) {
        return Err(SurveyError::InvalidDescription {
            reason: "Description cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

impl NewSurvey {
    /// # Errors
    /// See [`validate_survey`]
    pub fn validate(&self) -> Result<()> {
        validate_survey(&self.title, &self.description)
    }
}

/// # Errors
/// * `InvalidQuestionText` - text is blank
pub fn validate_question_text(text: &str) -> Result<()> {
    if is_blank(text) {
        return Err(SurveyError::InvalidQuestionText {
            reason: "Question text cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// # Errors
/// * `InvalidQuestionText` - text is blank
pub fn validate_question(question: &NewQuestion) -> Result<()> {
    validate_question_text(&question.text)
}

/// Range-check the Likert value
///
/// # Errors
/// * `InvalidAnswerValue` - value outside 1..=5
pub fn validate_answer(answer: &NewAnswer) -> Result<()> {
    LikertValue::try_from(answer.answer_value).map(|_| ())
}

/// # Errors
/// * `InvalidUsername` - blank, too long, or containing whitespace
pub fn validate_username(username: &str) -> Result<()> {
    if is_blank(username) {
        return Err(SurveyError::InvalidUsername {
            reason: "Username cannot be empty".to_string(),
        });
    }
    if username.chars().any(char::is_whitespace) {
        return Err(SurveyError::InvalidUsername {
            reason: "Username cannot contain whitespace".to_string(),
        });
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(SurveyError::InvalidUsername {
            reason: format!("Username is longer than {} characters", MAX_USERNAME_LEN),
        });
    }
    Ok(())
}

/// # Errors
/// * `InvalidUsername` - see [`validate_username`]
/// * `InvalidPassword` - blank
pub fn validate_new_user(user: &NewUser) -> Result<()> {
    validate_username(&user.username)?;
    if user.password.is_blank() {
        return Err(SurveyError::InvalidPassword {
            reason: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
