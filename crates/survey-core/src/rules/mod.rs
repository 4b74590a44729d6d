pub mod validation;

pub use validation::{
    validate_answer, validate_new_user, validate_question, validate_question_text,
    validate_survey, validate_username,
};
