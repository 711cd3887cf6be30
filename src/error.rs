//! Crate-level error type and `Result` alias, plus the per-token
//! `ArgumentError` diagnostics collected while binding arguments.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// One problem found while binding argument tokens to the option schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Unknown option: {token}")]
    UnknownOption { token: String },

    #[error("Missing value for option: --{option}")]
    MissingValue { option: &'static str },

    #[error("Invalid value for option --{option}: '{value}' ({reason})")]
    InvalidValue {
        option: &'static str,
        value: String,
        reason: String,
    },

    #[error("Option --{option} does not take a value, got: '{value}'")]
    UnexpectedValue { option: &'static str, value: String },

    #[error("Option --{option} is given more than once")]
    Repeated { option: &'static str },
}

impl ArgumentError {
    /// Long name of the option the diagnostic is about, if it names one.
    pub fn option(&self) -> Option<&'static str> {
        match self {
            ArgumentError::UnknownOption { .. } => None,
            ArgumentError::MissingValue { option }
            | ArgumentError::InvalidValue { option, .. }
            | ArgumentError::UnexpectedValue { option, .. }
            | ArgumentError::Repeated { option } => Some(*option),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} invalid argument(s): {}", .0.len(), join_diagnostics(.0))]
    InvalidArguments(Vec<ArgumentError>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_diagnostics(errors: &[ArgumentError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
