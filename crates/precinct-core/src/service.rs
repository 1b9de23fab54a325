//! Capability interfaces for the station record service and its discovery
//!
//! The command protocol only ever talks to a `dyn RecordService`; the
//! production handle lives in `precinct-remote` and tests substitute their
//! own.

use crate::badge::StationCode;
use crate::errors::ExError;
use crate::model::{CriminalRecordRequest, MissingPersonRecordRequest, RecordEditRequest, RecordId};

/// Operations a station record service exposes to officers
///
/// Business outcomes travel in `Ok`: `None` for a record that was not created,
/// `false` for an edit that did not apply. `Err` is reserved for transport
/// failures, which end the session.
#[allow(clippy::result_large_err)]
pub trait RecordService {
    /// Create a criminal record.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Transport` if the service cannot be reached.
    fn create_criminal_record(
        &self,
        request: &CriminalRecordRequest,
    ) -> Result<Option<RecordId>, ExError>;

    /// Create a missing-person record.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Transport` if the service cannot be reached.
    fn create_missing_record(
        &self,
        request: &MissingPersonRecordRequest,
    ) -> Result<Option<RecordId>, ExError>;

    /// Station-wide record counts, preformatted for display.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Transport` if the service cannot be reached.
    fn record_counts(&self) -> Result<String, ExError>;

    /// Change the captured status of an existing criminal record.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Transport` if the service cannot be reached.
    fn edit_criminal_record(&self, request: &RecordEditRequest) -> Result<bool, ExError>;
}

/// Resolves a station code to a live record service handle
#[allow(clippy::result_large_err)]
pub trait ServiceLocator {
    /// Look up `<station>StationServer` and bind a handle to it.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::ServiceUnavailable` if the registry is unreachable
    /// or nothing is bound under the station's lookup key.
    fn resolve(&self, station: &StationCode) -> Result<Box<dyn RecordService>, ExError>;
}
