//! Precinct Core - officer record client kernel
//!
//! This crate provides the transport-agnostic part of the officer client:
//! - Badge parsing and station routing keys
//! - Record request models and client-side validation
//! - The `RecordService` / `ServiceLocator` capability traits
//! - The record command protocol and the session menu loop
//! - Error facility and structured logging / audit facility

pub mod badge;
pub mod console;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod protocol;
pub mod service;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use badge::{BadgeId, StationCode};
pub use console::Console;
pub use errors::{ExError, ExErrorKind, PrecinctError, Result};
pub use model::{
    CaptureStatus, CriminalRecordRequest, MissingPersonRecordRequest, RecordEditRequest, RecordId,
};
pub use service::{RecordService, ServiceLocator};
pub use session::{launch, Session, SessionContext, SessionState, Termination};
