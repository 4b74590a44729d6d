//! SQLite repository implementation
//!
//! Per-entity CRUD for users, surveys, questions and answers. Every write
//! is validated before SQL is issued. Lookups that find nothing return
//! `None` or an empty `Vec`; updates and deletes report affected rows, so
//! 0 means the row was not there.
//!
//! Single-row functions take `&Connection` and so also run inside an open
//! `Transaction`. Batch functions take `&mut Connection` and commit all
//! rows or none.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use survey_core::credentials::{hash_password, verify_password};
use survey_core::model::{
    Answer, AnswerId, NewAnswer, NewQuestion, NewSurvey, NewUser, Question, QuestionId, Survey,
    SurveyId, User, UserId,
};
use survey_core::results::{QuestionResult, SurveyResults};
use survey_core::rules::{
    validate_answer, validate_new_user, validate_question, validate_question_text,
    validate_survey, validate_username,
};
use survey_core_types::Sensitive;

const USER_COLUMNS: &str = "id, username, password, isAdmin";
const SURVEY_COLUMNS: &str = "id, title, description";
const QUESTION_COLUMNS: &str = "id, surveyId, text";
const ANSWER_COLUMNS: &str = "id, questionId, userId, answerValue";

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User::new(row.get(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?, row.get(3)?))
}

fn survey_from_row(row: &Row) -> rusqlite::Result<Survey> {
    Ok(Survey::new(row.get(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
}

fn question_from_row(row: &Row) -> rusqlite::Result<Question> {
    Ok(Question::new(row.get(0)?, row.get(1)?, row.get::<_, String>(2)?))
}

fn answer_from_row(row: &Row) -> rusqlite::Result<Answer> {
    Ok(Answer::new(row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

/// Run a query returning many rows, in id order
fn query_all<T, P>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: fn(&Row) -> rusqlite::Result<T>,
) -> Result<Vec<T>>
where
    P: rusqlite::Params,
{
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Run a query returning at most one row
fn query_one<T, P>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: fn(&Row) -> rusqlite::Result<T>,
) -> Result<Option<T>>
where
    P: rusqlite::Params,
{
    conn.query_row(sql, params, map)
        .optional()
        .map_err(from_rusqlite)
}

/// SQLite repository for the survey schema
pub struct SqliteRepo;

impl SqliteRepo {
    // ===== USERS =====

    /// Insert a user, storing a salted hash of the password
    ///
    /// # Errors
    /// * `InvalidInput` - blank username or password
    /// * `AlreadyExists` - username already registered
    pub fn insert_user(conn: &Connection, user: &NewUser) -> Result<UserId> {
        validate_new_user(user)?;
        let password_hash = hash_password(&user.password)?;

        conn.execute(
            "INSERT INTO users (username, password, isAdmin) VALUES (?1, ?2, ?3)",
            rusqlite::params![user.username, password_hash, user.is_admin],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(user_id = id, is_admin = user.is_admin, "user inserted");
        Ok(id)
    }

    /// Update username and admin flag
    ///
    /// The stored password is left alone; `password_hash` on `user` is
    /// ignored. Use [`SqliteRepo::set_user_password`] to change it.
    ///
    /// # Errors
    /// * `InvalidInput` - invalid username
    /// * `AlreadyExists` - new username belongs to another user
    pub fn update_user(conn: &Connection, user: &User) -> Result<usize> {
        validate_username(&user.username)?;

        conn.execute(
            "UPDATE users SET username = ?1, isAdmin = ?2 WHERE id = ?3",
            rusqlite::params![user.username, user.is_admin, user.id],
        )
        .map_err(from_rusqlite)
    }

    /// Replace a user's password with a fresh salted hash
    pub fn set_user_password(
        conn: &Connection,
        user_id: UserId,
        password: &Sensitive<String>,
    ) -> Result<usize> {
        if password.is_blank() {
            return Err(survey_core::SurveyError::InvalidPassword {
                reason: "Password cannot be empty".to_string(),
            }
            .into());
        }
        let password_hash = hash_password(password)?;
        conn.execute(
            "UPDATE users SET password = ?1 WHERE id = ?2",
            rusqlite::params![password_hash, user_id],
        )
        .map_err(from_rusqlite)
    }

    /// Delete a user and, by cascade, their answers
    pub fn delete_user(conn: &Connection, user_id: UserId) -> Result<usize> {
        conn.execute("DELETE FROM users WHERE id = ?", [user_id])
            .map_err(from_rusqlite)
    }

    pub fn get_user(conn: &Connection, user_id: UserId) -> Result<Option<User>> {
        query_one(
            conn,
            &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
            [user_id],
            user_from_row,
        )
    }

    /// Exact, case-sensitive username lookup
    pub fn find_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
        query_one(
            conn,
            &format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS),
            [username],
            user_from_row,
        )
    }

    /// Look up a user by username and check the password
    ///
    /// Unknown usernames and wrong passwords both give `None`.
    pub fn get_user_by_credentials(
        conn: &Connection,
        username: &str,
        password: &Sensitive<String>,
    ) -> Result<Option<User>> {
        let user = Self::find_user_by_username(conn, username)?;
        Ok(user.filter(|u| verify_password(password, &u.password_hash)))
    }

    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        query_all(
            conn,
            &format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS),
            [],
            user_from_row,
        )
    }

    pub fn list_admin_users(conn: &Connection) -> Result<Vec<User>> {
        query_all(
            conn,
            &format!("SELECT {} FROM users WHERE isAdmin = 1 ORDER BY id", USER_COLUMNS),
            [],
            user_from_row,
        )
    }

    // ===== SURVEYS =====

    /// # Errors
    /// * `InvalidTitle` / `InvalidInput` - blank title or description
    pub fn insert_survey(conn: &Connection, survey: &NewSurvey) -> Result<SurveyId> {
        survey.validate()?;

        conn.execute(
            "INSERT INTO surveys (title, description) VALUES (?1, ?2)",
            rusqlite::params![survey.title, survey.description],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(survey_id = id, "survey inserted");
        Ok(id)
    }

    pub fn update_survey(conn: &Connection, survey: &Survey) -> Result<usize> {
        validate_survey(&survey.title, &survey.description)?;

        conn.execute(
            "UPDATE surveys SET title = ?1, description = ?2 WHERE id = ?3",
            rusqlite::params![survey.title, survey.description, survey.id],
        )
        .map_err(from_rusqlite)
    }

    /// Delete a survey, its questions and their answers
    pub fn delete_survey(conn: &Connection, survey_id: SurveyId) -> Result<usize> {
        conn.execute("DELETE FROM surveys WHERE id = ?", [survey_id])
            .map_err(from_rusqlite)
    }

    pub fn get_survey(conn: &Connection, survey_id: SurveyId) -> Result<Option<Survey>> {
        query_one(
            conn,
            &format!("SELECT {} FROM surveys WHERE id = ?", SURVEY_COLUMNS),
            [survey_id],
            survey_from_row,
        )
    }

    pub fn list_surveys(conn: &Connection) -> Result<Vec<Survey>> {
        query_all(
            conn,
            &format!("SELECT {} FROM surveys ORDER BY id", SURVEY_COLUMNS),
            [],
            survey_from_row,
        )
    }

    /// Insert a survey and its questions in one transaction
    ///
    /// Returns the stored survey and questions in the order given.
    pub fn create_survey_with_questions(
        conn: &mut Connection,
        survey: &NewSurvey,
        question_texts: &[String],
    ) -> Result<(Survey, Vec<Question>)> {
        survey.validate()?;
        for text in question_texts {
            validate_question_text(text)?;
        }

        let tx = conn.transaction().map_err(from_rusqlite)?;
        let survey_id = Self::insert_survey(&tx, survey)?;
        let mut questions = Vec::with_capacity(question_texts.len());
        for text in question_texts {
            let new_question = NewQuestion::new(survey_id, text.as_str());
            let id = Self::insert_question(&tx, &new_question)?;
            questions.push(Question::new(id, survey_id, text.as_str()));
        }
        tx.commit().map_err(from_rusqlite)?;

        Ok((survey.clone().with_id(survey_id), questions))
    }

    // ===== QUESTIONS =====

    /// # Errors
    /// * `InvalidInput` - blank text
    /// * `ConstraintViolation` - survey does not exist
    pub fn insert_question(conn: &Connection, question: &NewQuestion) -> Result<QuestionId> {
        validate_question(question)?;

        conn.execute(
            "INSERT INTO questions (surveyId, text) VALUES (?1, ?2)",
            rusqlite::params![question.survey_id, question.text],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert a batch of questions atomically
    ///
    /// Ids are returned in input order. Any failure rolls back the whole batch.
    pub fn insert_questions(
        conn: &mut Connection,
        questions: &[NewQuestion],
    ) -> Result<Vec<QuestionId>> {
        for question in questions {
            validate_question(question)?;
        }

        let tx = conn.transaction().map_err(from_rusqlite)?;
        let ids = questions
            .iter()
            .map(|q| Self::insert_question(&tx, q))
            .collect::<Result<Vec<_>>>()?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(batch_len = ids.len(), "questions inserted");
        Ok(ids)
    }

    pub fn update_question(conn: &Connection, question: &Question) -> Result<usize> {
        validate_question_text(&question.text)?;

        conn.execute(
            "UPDATE questions SET surveyId = ?1, text = ?2 WHERE id = ?3",
            rusqlite::params![question.survey_id, question.text, question.id],
        )
        .map_err(from_rusqlite)
    }

    /// Delete a question and its answers
    pub fn delete_question(conn: &Connection, question_id: QuestionId) -> Result<usize> {
        conn.execute("DELETE FROM questions WHERE id = ?", [question_id])
            .map_err(from_rusqlite)
    }

    pub fn get_question(conn: &Connection, question_id: QuestionId) -> Result<Option<Question>> {
        query_one(
            conn,
            &format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS),
            [question_id],
            question_from_row,
        )
    }

    pub fn list_questions_for_survey(
        conn: &Connection,
        survey_id: SurveyId,
    ) -> Result<Vec<Question>> {
        query_all(
            conn,
            &format!(
                "SELECT {} FROM questions WHERE surveyId = ? ORDER BY id",
                QUESTION_COLUMNS
            ),
            [survey_id],
            question_from_row,
        )
    }

    // ===== ANSWERS =====

    /// # Errors
    /// * `InvalidAnswerValue` - value outside 1..=5, rejected before insert
    /// * `ConstraintViolation` - question or user does not exist
    pub fn insert_answer(conn: &Connection, answer: &NewAnswer) -> Result<AnswerId> {
        validate_answer(answer)?;

        conn.execute(
            "INSERT INTO answers (questionId, userId, answerValue) VALUES (?1, ?2, ?3)",
            rusqlite::params![answer.question_id, answer.user_id, answer.answer_value],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert a batch of answers atomically
    ///
    /// Ids are returned in input order. Any failure rolls back the whole batch.
    pub fn insert_answers(conn: &mut Connection, answers: &[NewAnswer]) -> Result<Vec<AnswerId>> {
        for answer in answers {
            validate_answer(answer)?;
        }

        let tx = conn.transaction().map_err(from_rusqlite)?;
        let ids = answers
            .iter()
            .map(|a| Self::insert_answer(&tx, a))
            .collect::<Result<Vec<_>>>()?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(batch_len = ids.len(), "answers inserted");
        Ok(ids)
    }

    pub fn delete_answer(conn: &Connection, answer_id: AnswerId) -> Result<usize> {
        conn.execute("DELETE FROM answers WHERE id = ?", [answer_id])
            .map_err(from_rusqlite)
    }

    pub fn get_answer(conn: &Connection, answer_id: AnswerId) -> Result<Option<Answer>> {
        query_one(
            conn,
            &format!("SELECT {} FROM answers WHERE id = ?", ANSWER_COLUMNS),
            [answer_id],
            answer_from_row,
        )
    }

    pub fn list_answers_for_question(
        conn: &Connection,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>> {
        query_all(
            conn,
            &format!(
                "SELECT {} FROM answers WHERE questionId = ? ORDER BY id",
                ANSWER_COLUMNS
            ),
            [question_id],
            answer_from_row,
        )
    }

    pub fn list_answers_by_user(conn: &Connection, user_id: UserId) -> Result<Vec<Answer>> {
        query_all(
            conn,
            &format!(
                "SELECT {} FROM answers WHERE userId = ? ORDER BY id",
                ANSWER_COLUMNS
            ),
            [user_id],
            answer_from_row,
        )
    }

    // ===== RESULTS =====

    /// Aggregate every question of a survey
    ///
    /// `None` when the survey does not exist. Questions with no answers
    /// are included with an empty distribution.
    pub fn load_survey_results(
        conn: &Connection,
        survey_id: SurveyId,
    ) -> Result<Option<SurveyResults>> {
        let Some(survey) = Self::get_survey(conn, survey_id)? else {
            return Ok(None);
        };

        let questions = Self::list_questions_for_survey(conn, survey_id)?
            .into_iter()
            .map(|question| {
                let answers = Self::list_answers_for_question(conn, question.id)?;
                Ok(QuestionResult::new(question, &answers))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(SurveyResults { survey, questions }))
    }
}
