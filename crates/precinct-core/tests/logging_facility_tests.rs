#![allow(clippy::unwrap_used, clippy::expect_used)]

use precinct_core::errors::{ExError, ExErrorKind, PrecinctError};
use precinct_core::logging_facility::test_capture::init_test_capture;
use precinct_core::logging_facility::{AuditRecorder, Severity};
use precinct_core::{log_op_end, log_op_error, log_op_start};
use precinct_core_types::schema::{
    AUDIT_TARGET, EVENT_AUDIT, EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_BADGE,
    FIELD_ERR_CODE, FIELD_MESSAGE, FIELD_SEVERITY, FIELD_TEMPLATE,
};
use precinct_core_types::SessionId;
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PrecinctError::Transport {
        op: "editCRecord".to_string(),
        reason: "connection reset".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.level, Level::ERROR);
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_TRANSPORT"));
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_ex_unique_4";

    let err = ExError::new(ExErrorKind::ServiceUnavailable).with_key("PDStationServer");
    log_op_error!(op_name, err, duration_ms = 1, lookup_key = "PDStationServer");

    let error_event = capture
        .events()
        .into_iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have error event");
    assert_eq!(
        error_event.field(FIELD_ERR_CODE),
        Some("ERR_SERVICE_UNAVAILABLE")
    );
    assert_eq!(error_event.field("lookup_key"), Some("PDStationServer"));
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_5";

    log_op_start!(op_name, lookup_key = "SPBStationServer");
    log_op_end!(op_name, duration_ms = 7);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    let ends = capture
        .count_events(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END));

    assert_eq!(starts, 1, "Should have exactly one start event");
    assert_eq!(ends, 1, "Should have exactly one end event");
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_audit_entry_shape() {
    let capture = init_test_capture();
    let recorder = AuditRecorder::new(SessionId::new(), "PD1234");

    recorder.record(
        Severity::Info,
        "Request = editCRecord({0}, {1}), Response = {2}.",
        &["CR00001", "true", "success"],
    );

    let entries = capture.audit_entries(recorder.session_id().as_str());
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert!(entry.is_audit());
    assert_eq!(entry.target, AUDIT_TARGET);
    assert_eq!(entry.level, Level::INFO);
    assert_eq!(entry.event.as_deref(), Some(EVENT_AUDIT));
    assert_eq!(entry.field(FIELD_SEVERITY), Some("INFO"));
    assert_eq!(entry.field(FIELD_BADGE), Some("PD1234"));
    assert_eq!(
        entry.field(FIELD_TEMPLATE),
        Some("Request = editCRecord({0}, {1}), Response = {2}.")
    );
    assert_eq!(
        entry.field(FIELD_MESSAGE),
        Some("Request = editCRecord(CR00001, true), Response = success.")
    );
}

#[test]
fn test_audit_severity_maps_to_level() {
    let capture = init_test_capture();
    let recorder = AuditRecorder::new(SessionId::new(), "SPVM0001");

    recorder.record(Severity::Info, "first", &[]);
    recorder.record(Severity::Warning, "second", &[]);
    recorder.record(Severity::Severe, "third", &[]);

    let levels: Vec<_> = capture
        .audit_entries(recorder.session_id().as_str())
        .into_iter()
        .map(|e| e.level)
        .collect();
    assert_eq!(levels, vec![Level::INFO, Level::WARN, Level::ERROR]);
}

#[test]
fn test_audit_entries_are_isolated_per_session() {
    let capture = init_test_capture();
    let first = AuditRecorder::new(SessionId::new(), "PD1");
    let second = AuditRecorder::new(SessionId::new(), "PD2");

    first.record(Severity::Info, "one", &[]);
    second.record(Severity::Info, "two", &[]);
    second.record(Severity::Info, "three", &[]);

    assert_eq!(capture.audit_entries(first.session_id().as_str()).len(), 1);
    assert_eq!(capture.audit_entries(second.session_id().as_str()).len(), 2);
}
