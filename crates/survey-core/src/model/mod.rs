pub mod answer;
pub mod likert;
pub mod question;
pub mod survey;
pub mod user;

pub use answer::{Answer, NewAnswer};
pub use likert::LikertValue;
pub use question::{NewQuestion, Question};
pub use survey::{NewSurvey, Survey};
pub use user::{NewUser, User};

/// Storage-assigned row identifiers
pub type UserId = i64;
pub type SurveyId = i64;
pub type QuestionId = i64;
pub type AnswerId = i64;
