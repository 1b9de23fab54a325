//! Client-side validation of officer input
//!
//! Every record command runs its raw input through these checks before the
//! station service is contacted. A rejection is a local error: the officer
//! gets the message and is returned to the menu.

use chrono::NaiveDate;

use crate::errors::{PrecinctError, Result};
use crate::model::{CaptureStatus, LastSeenDate};

/// Pattern the last-seen date must match
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Widest a single `/`-separated date component may be
const MAX_DATE_COMPONENT_LEN: usize = 2;

/// Validate a free-text field: non-empty after trimming
///
/// # Errors
/// * `EmptyInput` - If the input is empty or whitespace-only
pub fn require_text(field: &'static str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PrecinctError::EmptyInput { field });
    }
    Ok(trimmed.to_string())
}

/// Validate a status character: `C` for captured, `R` for on the run
///
/// # Errors
/// * `EmptyInput` - If nothing was entered
/// * `WrongLength` - If more than one character was entered
/// * `InvalidStatusChoice` - If the single character is neither C nor R
pub fn parse_status(field: &'static str, raw: &str) -> Result<CaptureStatus> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let first = chars.next().ok_or(PrecinctError::EmptyInput { field })?;
    if chars.next().is_some() {
        return Err(PrecinctError::WrongLength { field });
    }
    match first.to_ascii_lowercase() {
        'c' => Ok(CaptureStatus::Captured),
        'r' => Ok(CaptureStatus::OnTheRun),
        _ => Err(PrecinctError::InvalidStatusChoice { value: first }),
    }
}

/// Validate a last-seen date in `MM/DD/YY` form
///
/// The calendar parse and the component width check both have to pass; the
/// width check rejects inputs like `9/2/111` outright.
///
/// # Errors
/// * `InvalidDate` - If the date does not parse or a component is too wide
pub fn parse_last_seen_date(raw: &str) -> Result<LastSeenDate> {
    let trimmed = raw.trim();
    let invalid = || PrecinctError::InvalidDate {
        value: trimmed.to_string(),
    };

    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())?;
    if trimmed
        .split('/')
        .any(|component| component.chars().count() > MAX_DATE_COMPONENT_LEN)
    {
        return Err(invalid());
    }

    Ok(LastSeenDate::new(trimmed.to_string(), date))
}
