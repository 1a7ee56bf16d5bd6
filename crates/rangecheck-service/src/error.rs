//! Service error types

use crate::kind::ValueKind;
use rangecheck_domain::IntervalError;
use thiserror::Error;

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur while evaluating a range request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No value kind is registered under the requested type tag
    #[error("Unknown type: {0}")]
    UnknownType(String),

    /// The range literal could not be parsed
    #[error(transparent)]
    Interval(#[from] IntervalError),

    /// The value literal could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A decode function rejected its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot decode '{input}' as {kind}: {reason}")]
pub struct DecodeError {
    /// Value kind the decoder produces
    pub kind: ValueKind,
    /// Rejected text
    pub input: String,
    /// Underlying parser message
    pub reason: String,
}

impl DecodeError {
    /// Create a decode error from any displayable parser error
    pub fn new(kind: ValueKind, input: &str, reason: impl std::fmt::Display) -> Self {
        Self {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
