//! Record requests and results exchanged with a station record service
//!
//! Requests are only ever built from validated input (see
//! [`crate::validation`]); the constructors here take already-validated parts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identifier the station service assigns to a new record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a service-issued id; an empty id counts as "no record"
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Criminal status entered as `C` (captured) or `R` (on the run)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStatus {
    Captured,
    OnTheRun,
}

impl CaptureStatus {
    pub fn is_captured(self) -> bool {
        matches!(self, CaptureStatus::Captured)
    }
}

impl From<bool> for CaptureStatus {
    fn from(captured: bool) -> Self {
        if captured {
            CaptureStatus::Captured
        } else {
            CaptureStatus::OnTheRun
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriminalRecordRequest {
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub status: CaptureStatus,
}

/// Last-seen date as the officer typed it plus its parsed calendar value
///
/// The raw text is what goes over the wire; the parsed date proves it was a
/// real `MM/DD/YY` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSeenDate {
    raw: String,
    date: NaiveDate,
}

impl LastSeenDate {
    pub(crate) fn new(raw: String, date: NaiveDate) -> Self {
        Self { raw, date }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPersonRecordRequest {
    pub first_name: String,
    pub last_name: String,
    pub last_address: String,
    pub last_seen_date: LastSeenDate,
    pub last_location: String,
    /// Always false for a freshly reported missing person
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEditRequest {
    pub record_id: String,
    pub status: CaptureStatus,
}
