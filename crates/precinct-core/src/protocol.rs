//! Record command protocol
//!
//! Each command goes through the same steps:
//! 1. collect and validate its fields in prompt order, stopping at the first
//!    rejection (no service call, no audit entry);
//! 2. call the station service exactly once;
//! 3. record exactly one audit entry with the inputs and the outcome;
//! 4. hand back the line to show the officer.
//!
//! Business failures (record not created, record not updated) are ordinary
//! outcomes. Only transport failures come back as `Err`, and those end the
//! session.

#![allow(clippy::result_large_err)]

use std::io::{BufRead, Write};

use precinct_core_types::schema::{OUTCOME_FAIL, OUTCOME_SUCCESS};

use crate::console::{Console, Field};
use crate::errors::{ExError, PrecinctError};
use crate::logging_facility::Severity;
use crate::model::{CriminalRecordRequest, MissingPersonRecordRequest, RecordEditRequest};
use crate::session::SessionContext;

const STATUS_PROMPT: &str = "Enter status ('C' = Captured / 'R' = On the run): ";

const CREATE_CRIMINAL_TEMPLATE: &str =
    "Request = createCRecord({0}, {1}, {2}, {3}), Response = {4}.";
const CREATE_MISSING_TEMPLATE: &str =
    "Request = createMRecord({0}, {1}, {2}, {3}, {4}, {5}), Response = {6}.";
const RECORD_COUNTS_TEMPLATE: &str = "Request = getRecordCounts, Response = {0}";
const EDIT_CRIMINAL_TEMPLATE: &str = "Request = editCRecord({0}, {1}), Response = {2}.";

/// A fully validated record command, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateCriminalRecord(CriminalRecordRequest),
    CreateMissingPersonRecord(MissingPersonRecordRequest),
    GetRecordCounts,
    EditCriminalRecordStatus(RecordEditRequest),
}

impl Command {
    /// Wire name of the service operation this command calls
    pub fn op(&self) -> &'static str {
        match self {
            Command::CreateCriminalRecord(_) => "createCRecord",
            Command::CreateMissingPersonRecord(_) => "createMRecord",
            Command::GetRecordCounts => "getRecordCounts",
            Command::EditCriminalRecordStatus(_) => "editCRecord",
        }
    }
}

/// What happened to a command the officer started
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The service was called; this line was shown to the officer
    Executed(String),
    /// A field failed local validation; the service was not called
    Rejected(PrecinctError),
    /// Input ended while the command was being entered
    InputClosed,
}

macro_rules! take {
    ($field:expr) => {
        match $field? {
            Field::Value(value) => value,
            Field::Rejected(err) => return Ok(Collected::Rejected(err)),
            Field::Closed => return Ok(Collected::Closed),
        }
    };
}

/// Fields gathered for a command, or the reason gathering stopped
#[derive(Debug, Clone, PartialEq)]
pub enum Collected {
    Ready(Command),
    Rejected(PrecinctError),
    Closed,
}

/// Prompt for a new criminal record
///
/// # Errors
/// Returns `ExErrorKind::Io` if the console fails.
pub fn collect_criminal_record<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Collected, ExError> {
    let first_name = take!(console.read_text("first_name", "Enter first name: "));
    let last_name = take!(console.read_text("last_name", "Enter last name: "));
    let description = take!(console.read_text("description", "Enter crime description: "));
    let status = take!(console.read_status("status", STATUS_PROMPT));

    Ok(Collected::Ready(Command::CreateCriminalRecord(
        CriminalRecordRequest {
            first_name,
            last_name,
            description,
            status,
        },
    )))
}

/// Prompt for a new missing-person record
///
/// # Errors
/// Returns `ExErrorKind::Io` if the console fails.
pub fn collect_missing_record<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Collected, ExError> {
    let first_name = take!(console.read_text("first_name", "Enter first name: "));
    let last_name = take!(console.read_text("last_name", "Enter last name: "));
    let last_address = take!(console.read_text("last_address", "Enter last seen address: "));
    let last_seen_date = take!(console.read_date(
        "last_seen_date",
        "Enter last seen date (e.g. 09/20/11): "
    ));
    let last_location = take!(console.read_text("last_location", "Enter last seen location: "));

    Ok(Collected::Ready(Command::CreateMissingPersonRecord(
        MissingPersonRecordRequest {
            first_name,
            last_name,
            last_address,
            last_seen_date,
            last_location,
            resolved: false,
        },
    )))
}

/// Prompt for a criminal record status change
///
/// # Errors
/// Returns `ExErrorKind::Io` if the console fails.
pub fn collect_record_edit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Collected, ExError> {
    let record_id = take!(console.read_text("record_id", "Enter record id: "));
    let status = take!(console.read_status("status", STATUS_PROMPT));

    Ok(Collected::Ready(Command::EditCriminalRecordStatus(
        RecordEditRequest { record_id, status },
    )))
}

/// Send a validated command to the station service
///
/// Records exactly one audit entry and returns the line to show the officer.
///
/// # Errors
/// Returns `ExErrorKind::Transport` if the service cannot be reached. No audit
/// entry is written for the command in that case; the session records the
/// fatal failure itself.
pub fn execute(command: &Command, ctx: &SessionContext) -> Result<String, ExError> {
    let service = ctx.service();
    let audit = ctx.audit();

    match command {
        Command::CreateCriminalRecord(request) => {
            let record_id = service.create_criminal_record(request)?;
            let captured = request.status.is_captured().to_string();
            audit.record(
                Severity::Info,
                CREATE_CRIMINAL_TEMPLATE,
                &[
                    request.first_name.as_str(),
                    request.last_name.as_str(),
                    request.description.as_str(),
                    captured.as_str(),
                    outcome(record_id.is_some()),
                ],
            );
            Ok(match record_id {
                Some(id) => format!("New criminal record {} was created.", id),
                None => "New criminal record could not be created.".to_string(),
            })
        }

        Command::CreateMissingPersonRecord(request) => {
            let record_id = service.create_missing_record(request)?;
            let resolved = request.resolved.to_string();
            audit.record(
                Severity::Info,
                CREATE_MISSING_TEMPLATE,
                &[
                    request.first_name.as_str(),
                    request.last_name.as_str(),
                    request.last_address.as_str(),
                    request.last_seen_date.as_str(),
                    request.last_location.as_str(),
                    resolved.as_str(),
                    outcome(record_id.is_some()),
                ],
            );
            Ok(match record_id {
                Some(id) => format!("New missing record {} was created.", id),
                None => "New missing record could not be created.".to_string(),
            })
        }

        Command::GetRecordCounts => {
            let counts = service.record_counts()?;
            audit.record(Severity::Info, RECORD_COUNTS_TEMPLATE, &[counts.as_str()]);
            Ok(counts)
        }

        Command::EditCriminalRecordStatus(request) => {
            let updated = service.edit_criminal_record(request)?;
            let captured = request.status.is_captured().to_string();
            audit.record(
                Severity::Info,
                EDIT_CRIMINAL_TEMPLATE,
                &[request.record_id.as_str(), captured.as_str(), outcome(updated)],
            );
            Ok(if updated {
                format!("Record {}'s status is updated", request.record_id)
            } else {
                format!("Record {} could not be updated.", request.record_id)
            })
        }
    }
}

fn outcome(success: bool) -> &'static str {
    if success {
        OUTCOME_SUCCESS
    } else {
        OUTCOME_FAIL
    }
}
