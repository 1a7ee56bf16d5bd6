//! Error types for interval construction and parsing

use thiserror::Error;

/// Result type alias for interval operations.
pub type Result<T> = std::result::Result<T, IntervalError>;

/// Errors raised while building or parsing an interval
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// Both bounds are present and the lower one is greater than the upper one
    #[error("Invalid bound: lower bound must be <= upper bound")]
    InvalidBound,

    /// The text is not a canonical interval string
    #[error("Invalid range format '{input}': {reason}")]
    InvalidRangeFormat {
        /// The text that failed to parse
        input: String,
        /// What was wrong with it
        reason: FormatIssue,
    },
}

/// Reason attached to [`IntervalError::InvalidRangeFormat`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    /// Brackets and `Infinitive` tokens do not form one of the nine shapes
    #[error("unrecognized bracket or bound combination")]
    UnrecognizedShape,

    /// The interior has no `", "` separator between the bounds
    #[error("expected ', ' between lower and upper bound")]
    MissingSeparator,

    /// The decode function rejected one of the bound tokens
    #[error("cannot decode {side} bound: {message}")]
    Decode {
        /// Which bound failed
        side: BoundSide,
        /// The decoder's own error message
        message: String,
    },

    /// Both bounds decoded but the lower one is greater than the upper one
    #[error("lower bound is greater than upper bound")]
    InvertedBounds,
}

/// The side of an interval a bound sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    /// The lower bound
    Lower,
    /// The upper bound
    Upper,
}

impl BoundSide {
    /// Get the side name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundSide::Lower => "lower",
            BoundSide::Upper => "upper",
        }
    }
}

impl std::fmt::Display for BoundSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IntervalError {
    /// Build an [`IntervalError::InvalidRangeFormat`] for `input`
    pub fn format(input: impl Into<String>, reason: FormatIssue) -> Self {
        IntervalError::InvalidRangeFormat {
            input: input.into(),
            reason,
        }
    }

    /// The format issue, if this is a parse failure
    pub fn format_issue(&self) -> Option<&FormatIssue> {
        match self {
            IntervalError::InvalidRangeFormat { reason, .. } => Some(reason),
            IntervalError::InvalidBound => None,
        }
    }
}
