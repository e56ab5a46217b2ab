#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{Exploding, Money, Version};
use veritas_core::errors::VeritasError;
use veritas_core::logging_facility::test_capture::init_test_capture;
use veritas_core::veritas_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_FALLTHROUGH, EVENT_PLACEHOLDER, EVENT_START,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_FAULT, FIELD_RULE, FIELD_TYPE_NAME,
};
use veritas_core::{assert_equal, equals, format, log_op_end, log_op_error, log_op_start, Value};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = VeritasError::Incomparable {
        type_name: "Acme.Widget".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_INCOMPARABLE"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("Incomparable"));
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_4";

    log_op_start!(op_name, type_name = "int");
    log_op_end!(op_name, duration_ms = 1);

    let start_count = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    let end_count = capture
        .count_events(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END));

    assert_eq!(start_count, 1, "Should have exactly one start event");
    assert_eq!(end_count, 1, "Should have exactly one end event");
}

#[test]
fn test_failed_assertion_logs_end_error() {
    let capture = init_test_capture();

    assert!(assert_equal(&Value::from("log-left"), &Value::from("log-right")).is_err());

    capture.assert_event_exists("assert_equal", EVENT_START);
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("assert_equal")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_NOT_EQUAL")
    });
    assert!(errors >= 1, "Should have logged the failed assertion");
}

#[test]
fn test_faulting_rule_logs_fallthrough() {
    let capture = init_test_capture();

    // Version's generic ordering faults on Money
    assert!(!equals(&Version::value(7, 7), &Money::value(7, "JPY")));

    let fallthroughs: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_FALLTHROUGH)
                && e.field(FIELD_FAULT)
                    .is_some_and(|f| f.contains("Object must be of type Version."))
        })
        .collect();

    assert!(!fallthroughs.is_empty(), "Should have logged a fallthrough");
    assert_eq!(fallthroughs[0].op.as_deref(), Some("equals"));
    assert_eq!(fallthroughs[0].field(FIELD_RULE), Some("comparable_generic"));
}

#[test]
fn test_format_fault_logs_placeholder() {
    let capture = init_test_capture();

    let rendered = format(&Value::object(Exploding));
    assert!(rendered.starts_with("FormatException was thrown"));

    let placeholders = capture.count_events(|e| {
        e.op.as_deref() == Some("format")
            && e.event.as_deref() == Some(EVENT_PLACEHOLDER)
            && e.field(FIELD_TYPE_NAME) == Some("Acme.Exploding")
    });
    assert!(placeholders >= 1, "Should have logged the placeholder");
}
