//! Survey Core - domain kernel for the survey data-access layer
//!
//! This crate holds everything that does not touch storage:
//! - User, Survey, Question and Answer models (insert payloads and stored rows)
//! - The five-point Likert scale and its labels
//! - Write-boundary validation rules
//! - Salted password hashing for stored credentials
//! - Results aggregation into ordered label → count distributions
//! - The structured error facility and logging facility shared by all crates

pub mod credentials;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod results;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, SurveyError};
pub use model::{
    Answer, AnswerId, LikertValue, NewAnswer, NewQuestion, NewSurvey, NewUser, Question,
    QuestionId, Survey, SurveyId, User, UserId,
};
pub use results::{aggregate_answers, Distribution, QuestionResult, ResponseBucket, SurveyResults};
