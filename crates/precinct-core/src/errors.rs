use thiserror::Error;

/// Result type alias using PrecinctError
pub type Result<T> = std::result::Result<T, PrecinctError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error the client can raise maps to one of these kinds. Each kind has
/// a stable code and belongs to exactly one of two tiers: local input problems
/// the session recovers from, and fatal failures that end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Local input validation
    InvalidInput,
    InvalidChoice,
    InvalidDate,

    // Discovery / transport
    ServiceUnavailable,
    Transport,

    // IO
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidChoice => "ERR_INVALID_CHOICE",
            ExErrorKind::InvalidDate => "ERR_INVALID_DATE",
            ExErrorKind::ServiceUnavailable => "ERR_SERVICE_UNAVAILABLE",
            ExErrorKind::Transport => "ERR_TRANSPORT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether an error of this kind terminates the session
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExErrorKind::ServiceUnavailable
                | ExErrorKind::Transport
                | ExErrorKind::Io
                | ExErrorKind::Internal
        )
    }
}

/// Canonical structured error type
///
/// Carries the kind plus optional operation and registry key context. This is
/// what crosses the service boundary and what the binary reports on exit.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add registry lookup key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the registry lookup key, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for officer client operations
///
/// The `Display` text of the local variants is exactly what the officer sees
/// at the prompt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrecinctError {
    // ===== Local input errors =====
    /// Menu selection was not an integer
    #[error("Please enter an integer.")]
    NotAnInteger { input: String },

    /// Menu selection was an integer outside the menu
    #[error("Invalid choice.")]
    InvalidMenuChoice { choice: i64 },

    /// A field was empty or whitespace-only
    #[error("Please enter some input.")]
    EmptyInput { field: &'static str },

    /// A status field had more than one character
    #[error("Please enter a single character.")]
    WrongLength { field: &'static str },

    /// A status field was one character but not C or R
    #[error("Please choose 'C' or 'R'.")]
    InvalidStatusChoice { value: char },

    /// A date did not match MM/DD/YY
    #[error("Enter a valid date.")]
    InvalidDate { value: String },

    // ===== Fatal errors =====
    /// Registry unreachable or key not bound
    #[error("Could not find {lookup_key} object: {reason}")]
    ServiceUnavailable { lookup_key: String, reason: String },

    /// Communication with the station service failed mid-session
    #[error("{op} failed: {reason}")]
    Transport { op: String, reason: String },

    /// Console IO failure
    #[error("IO error: {message}")]
    Io { message: String },
}

impl PrecinctError {
    /// Whether this error ends the session
    pub fn is_fatal(&self) -> bool {
        ExError::from(self.clone()).is_fatal()
    }
}

/// Conversion from PrecinctError to ExError
impl From<PrecinctError> for ExError {
    fn from(err: PrecinctError) -> Self {
        match err {
            PrecinctError::NotAnInteger { input } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("menu_select")
                .with_message(format!("Not an integer: {:?}", input)),

            PrecinctError::InvalidMenuChoice { choice } => {
                ExError::new(ExErrorKind::InvalidChoice)
                    .with_op("menu_select")
                    .with_message(format!("No menu entry {}", choice))
            }

            PrecinctError::EmptyInput { field } => ExError::new(ExErrorKind::InvalidInput)
                .with_op(field)
                .with_message("Empty input"),

            PrecinctError::WrongLength { field } => ExError::new(ExErrorKind::InvalidInput)
                .with_op(field)
                .with_message("Expected a single character"),

            PrecinctError::InvalidStatusChoice { value } => {
                ExError::new(ExErrorKind::InvalidChoice)
                    .with_op("status")
                    .with_message(format!("Unknown status '{}'", value))
            }

            PrecinctError::InvalidDate { value } => ExError::new(ExErrorKind::InvalidDate)
                .with_op("last_seen_date")
                .with_message(format!("Not a MM/DD/YY date: {:?}", value)),

            PrecinctError::ServiceUnavailable { lookup_key, reason } => {
                ExError::new(ExErrorKind::ServiceUnavailable)
                    .with_op("resolve")
                    .with_key(lookup_key)
                    .with_message(reason)
            }

            PrecinctError::Transport { op, reason } => ExError::new(ExErrorKind::Transport)
                .with_op(op)
                .with_message(reason),

            PrecinctError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

/// Conversion from console IO failures
impl From<std::io::Error> for PrecinctError {
    fn from(err: std::io::Error) -> Self {
        PrecinctError::Io {
            message: err.to_string(),
        }
    }
}

/// Conversion from console IO failures straight into the facility type
impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        PrecinctError::from(err).into()
    }
}
