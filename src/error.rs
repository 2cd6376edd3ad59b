//! Error hierarchy for trainsum
//!
//! Construction failures at the sensor boundary are reported as
//! [`InvalidInput`]; everything the driver can hit on top of that (files,
//! JSON, configuration) is folded into [`TrainSumError`].

use crate::models::WorkoutKind;
use thiserror::Error;

/// Top-level error type for all trainsum operations
#[derive(Debug, Error)]
pub enum TrainSumError {
    /// Sensor package rejected by the factory
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed package file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Reasons a sensor package cannot be turned into a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// Tag is not one of RUN, WLK, SWM
    #[error("Unknown workout type: {tag:?}")]
    UnknownWorkoutType { tag: String },

    /// Too many or too few readings for the variant
    #[error("{kind} expects {expected} readings, got {actual}")]
    WrongArity {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A reading has the right position but an unusable value
    #[error("Invalid reading {field}={value}: {reason}")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl From<serde_json::Error> for TrainSumError {
    fn from(err: serde_json::Error) -> Self {
        TrainSumError::Parse(err.to_string())
    }
}

/// Result type alias for trainsum operations
pub type Result<T> = std::result::Result<T, TrainSumError>;

impl TrainSumError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrainSumError::InvalidInput(_) => ErrorSeverity::Error,
            TrainSumError::Parse(_) => ErrorSeverity::Error,
            TrainSumError::Io(_) => ErrorSeverity::Error,
            TrainSumError::Configuration(_) => ErrorSeverity::Warning,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainSumError::InvalidInput(InvalidInput::UnknownWorkoutType { tag }) => {
                format!(
                    "Unrecognised workout type {:?}. Expected one of RUN, WLK, SWM.",
                    tag
                )
            }
            TrainSumError::InvalidInput(InvalidInput::WrongArity {
                kind,
                expected,
                actual,
            }) => {
                format!(
                    "A {} package needs {} readings ({}), but {} were given.",
                    kind,
                    expected,
                    kind.reading_names().join(", "),
                    actual
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents the operation
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}
