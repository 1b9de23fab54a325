//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility: a console
//! layer selected by profile plus, when it can be opened, the audit file layer.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use precinct_core_types::schema::AUDIT_TARGET;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Environment variable overriding the console filter
pub const LOG_FILTER_ENV: &str = "PRECINCT_LOG";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable console output
    Development,
    /// JSON structured console output
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

/// Where audit entries end up after initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditSink {
    /// Appended line by line to this file
    File(PathBuf),
    /// File could not be opened; audit entries go to the console layer only
    ConsoleOnly,
}

static INSTALLED: OnceLock<AuditSink> = OnceLock::new();

/// Initialize the logging facility without an audit file
///
/// Audit entries are still emitted; they reach the console layer.
pub fn init(profile: Profile) {
    init_with_audit_file(profile, None);
}

/// Initialize the logging facility, appending audit entries to `audit_path`
///
/// If the audit file cannot be opened the facility degrades to console-only
/// operation and says so on stderr; the caller carries on either way.
/// Only the first call has any effect; later calls report the sink it
/// installed.
pub fn init_with_audit_file(profile: Profile, audit_path: Option<&Path>) -> AuditSink {
    INSTALLED
        .get_or_init(|| install(profile, audit_path))
        .clone()
}

fn install(profile: Profile, audit_path: Option<&Path>) -> AuditSink {
    // Test capture is initialized separately via init_test_capture()
    if profile == Profile::Test {
        return AuditSink::ConsoleOnly;
    }

    let audit_file = audit_path.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some((path.to_path_buf(), file)),
            Err(_) => {
                eprintln!("Couldn't create log file.");
                None
            }
        }
    });

    let console_filter = || {
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| {
            if audit_file.is_some() {
                EnvFilter::new(format!("precinct=warn,{}=off", AUDIT_TARGET))
            } else {
                EnvFilter::new(format!("precinct=warn,{}=info", AUDIT_TARGET))
            }
        })
    };

    let console = match profile {
        Profile::Development => fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(console_filter())
            .boxed(),
        Profile::Production => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter())
            .boxed(),
        Profile::Test => return AuditSink::ConsoleOnly,
    };

    let (sink, audit_layer) = match audit_file {
        Some((path, file)) => {
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_filter(Targets::new().with_target(AUDIT_TARGET, Level::TRACE));
            (AuditSink::File(path), Some(layer))
        }
        None => (AuditSink::ConsoleOnly, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(audit_layer)
        .init();

    sink
}

/// Default audit file for an officer: `<badge>.log`
pub fn audit_file_for(badge: &str) -> PathBuf {
    PathBuf::from(format!("{}.log", badge))
}
