#![allow(clippy::unwrap_used, clippy::expect_used)]

use survey_core::errors::SurveyError;
use survey_core::logging_facility::test_capture::init_test_capture;
use survey_core::{log_op_end, log_op_error, log_op_start};
use survey_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(start_events, 1);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code_and_kind() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SurveyError::InvalidAnswerValue { value: 0 };
    log_op_error!(op_name, err, duration_ms = 10);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let events = capture.events_for_op(op_name);
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.level, tracing::Level::ERROR);
    assert_eq!(error_event.field("err_code"), Some("ERR_INVALID_ANSWER_VALUE"));
    assert_eq!(error_event.field("err_kind"), Some("InvalidAnswerValue"));
}

#[test]
fn test_log_macros_with_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, survey_id = 12, batch_len = 3);
    log_op_end!(op_name, duration_ms = 1, rows = 3);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].field("survey_id"), Some("12"));
    assert_eq!(events[0].field("batch_len"), Some("3"));
    assert_eq!(events[1].field("rows"), Some("3"));
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_5";

    log_op_start!(op_name);

    let events = capture.events_for_op(op_name);
    assert_eq!(
        events[0].component.as_deref(),
        Some("logging_facility_tests")
    );
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_fails_for_missing_event() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_password_never_reaches_log_fields() {
    let capture = init_test_capture();
    let op_name = "test_sensitive_unique_6";
    let password = survey_core_types::Sensitive::new("hunter2".to_string());

    log_op_start!(op_name, password = %password);

    let events = capture.events_for_op(op_name);
    let rendered = events[0].field("password").unwrap_or_default();
    assert!(!rendered.contains("hunter2"));
}
