//! Canonical schema constants for structured logging and audit events
//!
//! These constants keep field names stable between the emitting side, the
//! audit file layer and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SESSION_ID: &str = "session_id";

// Routing
pub const FIELD_BADGE: &str = "badge";
pub const FIELD_STATION: &str = "station";
pub const FIELD_LOOKUP_KEY: &str = "lookup_key";

// Audit entry fields
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_TEMPLATE: &str = "template";
pub const FIELD_VALUES: &str = "values";
pub const FIELD_MESSAGE: &str = "message";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_AUDIT: &str = "audit";

/// Tracing target every audit entry is emitted on
pub const AUDIT_TARGET: &str = "precinct::audit";

// Outcome values substituted into command audit entries
pub const OUTCOME_SUCCESS: &str = "success";
pub const OUTCOME_FAIL: &str = "fail";

/// Suffix appended to a station code to form its registry lookup key
pub const STATION_SERVICE_SUFFIX: &str = "StationServer";
