#![allow(dead_code)]

use rusqlite::Connection;
use survey_core::model::{NewQuestion, NewSurvey, NewUser, QuestionId, SurveyId, UserId};
use survey_store::{open_with_config, SqliteRepo, StoreConfig};

pub fn setup_test_db() -> Connection {
    open_with_config(&StoreConfig::InMemory).expect("Failed to open in-memory store")
}

pub fn create_user(conn: &Connection, username: &str) -> UserId {
    SqliteRepo::insert_user(conn, &NewUser::new(username, "password")).unwrap()
}

pub fn create_survey(conn: &Connection, title: &str) -> SurveyId {
    SqliteRepo::insert_survey(conn, &NewSurvey::new(title, format!("{} description", title)))
        .unwrap()
}

pub fn create_question(conn: &Connection, survey_id: SurveyId, text: &str) -> QuestionId {
    SqliteRepo::insert_question(conn, &NewQuestion::new(survey_id, text)).unwrap()
}

pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}
