use serde::Serialize;
use thiserror::Error;

/// Failures that abort the whole run.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Could not open input file '{path}': {source}")]
    InputOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open output file '{path}': {source}")]
    OutputOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            EtlError::InputOpenError { .. }
            | EtlError::OutputOpenError { .. }
            | EtlError::SerializationError(_) => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputOpenError { path, .. } => {
                format!("Error: Could not open input file '{}'.", path)
            }
            EtlError::OutputOpenError { path, .. } => {
                format!("Error: Could not open output file '{}'.", path)
            }
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::InputOpenError { .. } => {
                "Check that the input file exists in the working directory and is readable"
            }
            EtlError::OutputOpenError { .. } => {
                "Check that the output location is writable and not a directory"
            }
            EtlError::IoError(_) => "Check disk space and file permissions, then rerun",
            EtlError::SerializationError(_) => "Check the summary path and rerun",
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

/// Per-line failures. The `Display` text is written verbatim to the output line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Invalid Roman numeral(s)")]
    InvalidNumeral,

    #[error("Division by zero is undefined.")]
    DivisionByZero,

    #[error("Invalid operator: {0}")]
    InvalidOperator(char),

    #[error("Result out of range")]
    OutOfRange,
}

impl LineError {
    /// Stable key used when counting diagnostics in the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            LineError::InvalidInput => "invalid_input",
            LineError::InvalidNumeral => "invalid_numeral",
            LineError::DivisionByZero => "division_by_zero",
            LineError::InvalidOperator(_) => "invalid_operator",
            LineError::OutOfRange => "out_of_range",
        }
    }
}

/// Why a single token failed to decode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralError {
    #[error("empty numeral")]
    Empty,

    #[error("invalid symbol '{0}'")]
    InvalidSymbol(char),

    #[error("symbol '{0}' repeated more than three times")]
    TooManyRepeats(char),

    #[error("not the canonical spelling of {0}")]
    NonCanonical(u64),
}

impl From<NumeralError> for LineError {
    fn from(_: NumeralError) -> Self {
        LineError::InvalidNumeral
    }
}
