// Deletes cascade: survey -> questions -> answers, and user -> answers

mod common;

use common::{count_rows, create_question, create_survey, create_user, setup_test_db};
use survey_core::model::NewAnswer;
use survey_store::SqliteRepo;

#[test]
fn test_delete_survey_removes_questions_and_answers() {
    let conn = setup_test_db();
    let user = create_user(&conn, "alice");
    let doomed = create_survey(&conn, "Doomed");
    let kept = create_survey(&conn, "Kept");
    let q1 = create_question(&conn, doomed, "Q1");
    let q2 = create_question(&conn, doomed, "Q2");
    let q_kept = create_question(&conn, kept, "Q3");
    for q in [q1, q2, q_kept] {
        SqliteRepo::insert_answer(&conn, &NewAnswer::new(q, user, 3)).unwrap();
    }

    assert_eq!(SqliteRepo::delete_survey(&conn, doomed).unwrap(), 1);

    assert!(SqliteRepo::list_questions_for_survey(&conn, doomed)
        .unwrap()
        .is_empty());
    assert!(SqliteRepo::list_answers_for_question(&conn, q1)
        .unwrap()
        .is_empty());
    assert_eq!(count_rows(&conn, "questions"), 1);
    assert_eq!(count_rows(&conn, "answers"), 1);
    assert_eq!(
        SqliteRepo::list_answers_for_question(&conn, q_kept)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_delete_question_removes_its_answers_only() {
    let conn = setup_test_db();
    let user = create_user(&conn, "bob");
    let survey_id = create_survey(&conn, "S");
    let q1 = create_question(&conn, survey_id, "Q1");
    let q2 = create_question(&conn, survey_id, "Q2");
    SqliteRepo::insert_answer(&conn, &NewAnswer::new(q1, user, 1)).unwrap();
    SqliteRepo::insert_answer(&conn, &NewAnswer::new(q2, user, 2)).unwrap();

    SqliteRepo::delete_question(&conn, q1).unwrap();

    let remaining = SqliteRepo::list_answers_by_user(&conn, user).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].question_id, q2);
}

#[test]
fn test_delete_user_removes_their_answers() {
    let conn = setup_test_db();
    let leaving = create_user(&conn, "leaving");
    let staying = create_user(&conn, "staying");
    let survey_id = create_survey(&conn, "S");
    let q = create_question(&conn, survey_id, "Q");
    SqliteRepo::insert_answer(&conn, &NewAnswer::new(q, leaving, 5)).unwrap();
    SqliteRepo::insert_answer(&conn, &NewAnswer::new(q, staying, 4)).unwrap();

    SqliteRepo::delete_user(&conn, leaving).unwrap();

    let answers = SqliteRepo::list_answers_for_question(&conn, q).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].user_id, staying);
    assert_eq!(count_rows(&conn, "questions"), 1, "questions are untouched");
}
