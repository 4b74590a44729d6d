#![allow(clippy::unwrap_used, clippy::expect_used)]

// Boundary logging: one start and one end/end_error event per operation

use survey_core::logging_facility::test_capture::init_test_capture;
use survey_core::model::NewSurvey;
use survey_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use survey_core_types::Sensitive;
use survey_engine::{CallerScope, Storage, SurveyRepository};

fn repository() -> SurveyRepository {
    SurveyRepository::new(Storage::in_memory().unwrap())
}

#[tokio::test]
async fn test_successful_call_logs_start_and_end() {
    let capture = init_test_capture();
    let repo = repository();
    let scope = CallerScope::new();
    let scope_id = scope.id().to_string();

    repo.insert_survey(&scope, NewSurvey::new("Logged", "d"))
        .await
        .unwrap();

    let events: Vec<_> = capture
        .events_for_op("insert_survey")
        .into_iter()
        .filter(|e| e.field("scope_id") == Some(scope_id.as_str()))
        .collect();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
    assert!(events[1].field("duration_ms").is_some());
    assert_eq!(events[0].field("request_id"), events[1].field("request_id"));
}

#[tokio::test]
async fn test_failed_call_logs_error_code() {
    let capture = init_test_capture();
    let repo = repository();
    let scope = CallerScope::new();
    let scope_id = scope.id().to_string();

    let _ = repo.insert_survey(&scope, NewSurvey::new("", "d")).await;

    let error_event = capture
        .events_for_op("insert_survey")
        .into_iter()
        .find(|e| {
            e.field("scope_id") == Some(scope_id.as_str())
                && e.event.as_deref() == Some(EVENT_END_ERROR)
        })
        .expect("Should have error event");

    assert_eq!(error_event.field("err_code"), Some("ERR_INVALID_TITLE"));
    let ends = capture.count_events(|e| {
        e.field("scope_id") == Some(scope_id.as_str()) && e.event.as_deref() == Some(EVENT_END)
    });
    assert_eq!(ends, 0);
}

#[tokio::test]
async fn test_password_never_logged() {
    let capture = init_test_capture();
    let repo = repository();
    let scope = CallerScope::new();

    repo.register_user(
        &scope,
        "logged_user".to_string(),
        Sensitive::from("plaintext-secret"),
        false,
    )
    .await
    .unwrap();

    let leaked = capture.count_events(|e| e.fields.values().any(|v| v.contains("plaintext-secret")));
    assert_eq!(leaked, 0);
}
