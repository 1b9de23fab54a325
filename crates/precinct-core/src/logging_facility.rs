//! Structured logging and audit facility for Precinct
//!
//! This module provides:
//! - Single initialization point via `init(profile)` / `init_with_audit_file`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - The audit recorder writing one entry per executed command
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use precinct_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod audit;
pub mod init;
pub mod macros;
pub mod test_capture;

pub use audit::{render_template, AuditRecorder, Severity};
pub use init::{audit_file_for, init, init_with_audit_file, AuditSink, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
