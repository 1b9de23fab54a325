//! Audit recorder
//!
//! One audit entry per session lifecycle event and per record command that
//! reached the station service. Entries are ordinary `tracing` events on the
//! [`AUDIT_TARGET`] target; the subscriber assigns the timestamp and the audit
//! file layer (see [`super::init`]) persists them.

use precinct_core_types::schema::{AUDIT_TARGET, EVENT_AUDIT};
use precinct_core_types::SessionId;

/// Audit entry severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Severe => "SEVERE",
        }
    }
}

/// Writes audit entries for one officer session
///
/// Recording never fails from the caller's point of view: with no subscriber
/// or no file sink the entry simply goes nowhere or to the console.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    session_id: SessionId,
    badge: String,
}

impl AuditRecorder {
    pub fn new(session_id: SessionId, badge: impl Into<String>) -> Self {
        Self {
            session_id,
            badge: badge.into(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Record one entry, substituting `values` into the `{n}` placeholders
    pub fn record(&self, severity: Severity, template: &str, values: &[&str]) {
        let message = render_template(template, values);
        let session_id = self.session_id.as_str();
        let badge = self.badge.as_str();

        macro_rules! emit {
            ($level:ident) => {
                tracing::$level!(
                    target: AUDIT_TARGET,
                    event = EVENT_AUDIT,
                    severity = severity.as_str(),
                    template = template,
                    values = ?values,
                    session_id = session_id,
                    badge = badge,
                    "{}",
                    message
                )
            };
        }

        match severity {
            Severity::Info => emit!(info),
            Severity::Warning => emit!(warn),
            Severity::Severe => emit!(error),
        }
    }
}

/// Substitute positional `{n}` placeholders with `values[n]`
///
/// Placeholders without a matching value are left as written.
pub fn render_template(template: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            values.get(index).map(|value| (close, *value))
        });
        match substituted {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
