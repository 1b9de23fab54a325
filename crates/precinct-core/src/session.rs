//! Officer session: station discovery, then the command menu loop
//!
//! ```text
//! launch ──resolve──> Running ──(menu choice 4 / input closed)──> Terminated
//!    │                   │
//!    └─(lookup failed)   └─(transport failure)──> Fatal
//! ```
//!
//! Discovery happens exactly once. Local input mistakes keep the session
//! `Running`; any failure talking to the station service ends the process.

#![allow(clippy::result_large_err)]

use std::io::{BufRead, Write};

use crate::badge::{BadgeId, StationCode};
use crate::console::Console;
use crate::errors::{ExError, ExErrorKind, PrecinctError};
use crate::logging_facility::{AuditRecorder, Severity};
use crate::protocol::{self, Collected, Command, CommandOutcome};
use crate::service::{RecordService, ServiceLocator};

const MENU: [&str; 5] = [
    "0: Create a criminal record",
    "1: Create a missing person record",
    "2: Get station-wide record count",
    "3: Edit criminal record status",
    "4: Exit",
];

const ACTION_PROMPT: &str = "Enter action: ";

/// Process-wide state for one officer, built once the station is resolved
pub struct SessionContext {
    badge: BadgeId,
    service: Box<dyn RecordService>,
    audit: AuditRecorder,
}

impl SessionContext {
    pub fn new(badge: BadgeId, service: Box<dyn RecordService>, audit: AuditRecorder) -> Self {
        Self {
            badge,
            service,
            audit,
        }
    }

    pub fn badge(&self) -> &BadgeId {
        &self.badge
    }

    pub fn station(&self) -> &StationCode {
        self.badge.station()
    }

    pub fn service(&self) -> &dyn RecordService {
        self.service.as_ref()
    }

    pub fn audit(&self) -> &AuditRecorder {
        &self.audit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Menu entries, numbered as shown to the officer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    CreateCriminalRecord,
    CreateMissingPersonRecord,
    GetRecordCounts,
    EditCriminalRecord,
    Exit,
}

impl TryFrom<i64> for MenuSelection {
    type Error = PrecinctError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            0 => Ok(MenuSelection::CreateCriminalRecord),
            1 => Ok(MenuSelection::CreateMissingPersonRecord),
            2 => Ok(MenuSelection::GetRecordCounts),
            3 => Ok(MenuSelection::EditCriminalRecord),
            4 => Ok(MenuSelection::Exit),
            _ => Err(PrecinctError::InvalidMenuChoice { choice }),
        }
    }
}

impl MenuSelection {
    /// Parse a menu line typed by the officer
    ///
    /// # Errors
    /// * `NotAnInteger` - If the line is not an integer
    /// * `InvalidMenuChoice` - If the integer is not on the menu
    pub fn parse(raw: &str) -> Result<Self, PrecinctError> {
        Self::try_from(parse_choice(raw)?)
    }
}

/// Read the menu line as an integer, without checking it against the menu
///
/// # Errors
/// * `NotAnInteger` - If the line is not an integer
pub fn parse_choice(raw: &str) -> Result<i64, PrecinctError> {
    raw.trim()
        .parse()
        .map_err(|_| PrecinctError::NotAnInteger {
            input: raw.to_string(),
        })
}

/// How a session ended
#[derive(Debug, Clone)]
pub enum Termination {
    /// Officer chose Exit or closed the input
    ByUser,
    /// Discovery or transport failure; `message` is what the officer is told
    Fatal { message: String, error: ExError },
}

impl Termination {
    /// Process exit status for this ending
    pub fn exit_code(&self) -> i32 {
        match self {
            Termination::ByUser => 0,
            Termination::Fatal { .. } => 1,
        }
    }
}

/// The running menu loop over a resolved station service
pub struct Session<R, W> {
    ctx: SessionContext,
    console: Console<R, W>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ctx: SessionContext, console: Console<R, W>) -> Self {
        Self {
            ctx,
            console,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Show the menu, read one selection and act on it
    ///
    /// # Errors
    /// Returns a fatal `ExError` if the station service or the console fails.
    pub fn step(&mut self) -> Result<SessionState, ExError> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        self.console.say("")?;
        for entry in MENU {
            self.console.say(entry)?;
        }
        let Some(line) = self.console.prompt(ACTION_PROMPT)? else {
            self.state = SessionState::Terminated;
            return Ok(self.state);
        };

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(err) => {
                self.console.say(&err.to_string())?;
                return Ok(self.state);
            }
        };
        self.console.say("")?;

        let selection = match MenuSelection::try_from(choice) {
            Ok(selection) => selection,
            Err(err) => {
                self.console.say(&err.to_string())?;
                return Ok(self.state);
            }
        };

        if selection == MenuSelection::Exit {
            self.state = SessionState::Terminated;
            return Ok(self.state);
        }

        match self.dispatch(selection)? {
            CommandOutcome::Executed(line) => self.console.say(&line)?,
            CommandOutcome::Rejected(err) => self.console.say(&err.to_string())?,
            CommandOutcome::InputClosed => self.state = SessionState::Terminated,
        }
        Ok(self.state)
    }

    /// Run one record command end to end
    ///
    /// # Errors
    /// Returns a fatal `ExError` if the station service or the console fails.
    pub fn dispatch(&mut self, selection: MenuSelection) -> Result<CommandOutcome, ExError> {
        let collected = match selection {
            MenuSelection::CreateCriminalRecord => {
                protocol::collect_criminal_record(&mut self.console)?
            }
            MenuSelection::CreateMissingPersonRecord => {
                protocol::collect_missing_record(&mut self.console)?
            }
            MenuSelection::GetRecordCounts => Collected::Ready(Command::GetRecordCounts),
            MenuSelection::EditCriminalRecord => protocol::collect_record_edit(&mut self.console)?,
            MenuSelection::Exit => return Ok(CommandOutcome::InputClosed),
        };

        Ok(match collected {
            Collected::Ready(command) => {
                tracing::debug!(op = command.op(), "dispatching record command");
                CommandOutcome::Executed(protocol::execute(&command, &self.ctx)?)
            }
            Collected::Rejected(err) => CommandOutcome::Rejected(err),
            Collected::Closed => CommandOutcome::InputClosed,
        })
    }

    /// Loop until the officer exits or a fatal error occurs
    pub fn run(mut self) -> Termination {
        let greeting = format!("Welcome officer {}!", self.ctx.badge());
        let mut result = self
            .console
            .say("")
            .and_then(|_| self.console.say(&greeting));

        while result.is_ok() && self.state == SessionState::Running {
            result = self.step().map(|_| ());
        }

        let audit = self.ctx.audit();
        match result {
            Ok(()) => {
                let message = "Client terminated by user.";
                audit.record(Severity::Info, message, &[]);
                // Best effort: the session is over either way.
                let _ = self.console.say(message);
                Termination::ByUser
            }
            Err(error) => {
                let message = fatal_message(&self.ctx.station().lookup_key(), &error);
                audit.record(Severity::Severe, &message, &[]);
                Termination::Fatal { message, error }
            }
        }
    }
}

/// Line shown and audited when the session ends on `error`
///
/// Failures talking to the station name the station server; failures on
/// the officer's own terminal do not.
fn fatal_message(lookup_key: &str, error: &ExError) -> String {
    let detail = if error.message().is_empty() {
        error.to_string()
    } else {
        error.message().to_string()
    };
    match error.kind() {
        ExErrorKind::Io => format!("Console error: {}. Exiting.", detail),
        _ => format!("{} error: {}. Exiting.", lookup_key, detail),
    }
}

/// Resolve the officer's station service, then run the session
///
/// Never enters the menu loop if discovery fails.
pub fn launch<R: BufRead, W: Write>(
    badge: BadgeId,
    locator: &dyn ServiceLocator,
    audit: AuditRecorder,
    mut console: Console<R, W>,
) -> Termination {
    let lookup_key = badge.station().lookup_key();
    tracing::debug!(
        badge = badge.as_str(),
        station = badge.station().as_str(),
        lookup_key = lookup_key.as_str(),
        "resolving station service"
    );

    let service = match locator.resolve(badge.station()) {
        Ok(service) => service,
        Err(error) => {
            let message = format!("Could not find {} object. Exiting.", lookup_key);
            audit.record(Severity::Severe, &message, &[]);
            return Termination::Fatal { message, error };
        }
    };

    let message = format!("Retrieved {} object successfully.", lookup_key);
    audit.record(Severity::Info, &message, &[]);
    if let Err(error) = console.say(&message) {
        let message = fatal_message(&lookup_key, &error);
        audit.record(Severity::Severe, &message, &[]);
        return Termination::Fatal { message, error };
    }

    Session::new(SessionContext::new(badge, service, audit), console).run()
}
