//! Line-oriented officer console
//!
//! Wraps the session's input and output streams. Prompts are written without
//! a trailing newline and flushed before reading, like a terminal prompt.

use std::io::{BufRead, Write};

use crate::errors::{ExError, PrecinctError};
use crate::model::{CaptureStatus, LastSeenDate};
use crate::validation;

/// Result of asking the officer for one field
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Input passed local validation
    Value(T),
    /// Input failed local validation
    Rejected(PrecinctError),
    /// Input stream ended
    Closed,
}

impl<T> Field<T> {
    fn from_validation(result: crate::errors::Result<T>) -> Self {
        match result {
            Ok(value) => Field::Value(value),
            Err(err) => Field::Rejected(err),
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output
    ///
    /// # Errors
    /// Returns `ExErrorKind::Io` if the output stream fails.
    pub fn say(&mut self, line: &str) -> Result<(), ExError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line terminator
    ///
    /// Returns `None` once the input stream is exhausted.
    ///
    /// # Errors
    /// Returns `ExErrorKind::Io` if either stream fails.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>, ExError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt for a non-empty free-text field
    ///
    /// # Errors
    /// Returns `ExErrorKind::Io` if either stream fails.
    pub fn read_text(&mut self, field: &'static str, prompt: &str) -> Result<Field<String>, ExError> {
        Ok(match self.prompt(prompt)? {
            Some(raw) => Field::from_validation(validation::require_text(field, &raw)),
            None => Field::Closed,
        })
    }

    /// Prompt for a `C`/`R` status character
    ///
    /// # Errors
    /// Returns `ExErrorKind::Io` if either stream fails.
    pub fn read_status(
        &mut self,
        field: &'static str,
        prompt: &str,
    ) -> Result<Field<CaptureStatus>, ExError> {
        Ok(match self.prompt(prompt)? {
            Some(raw) => Field::from_validation(validation::parse_status(field, &raw)),
            None => Field::Closed,
        })
    }

    /// Prompt for a `MM/DD/YY` date
    ///
    /// Blank input is reported as empty input, not as a bad date.
    ///
    /// # Errors
    /// Returns `ExErrorKind::Io` if either stream fails.
    pub fn read_date(
        &mut self,
        field: &'static str,
        prompt: &str,
    ) -> Result<Field<LastSeenDate>, ExError> {
        Ok(match self.prompt(prompt)? {
            Some(raw) => Field::from_validation(
                validation::require_text(field, &raw)
                    .and_then(|text| validation::parse_last_seen_date(&text)),
            ),
            None => Field::Closed,
        })
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
