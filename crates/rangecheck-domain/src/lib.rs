//! Rangecheck Domain Layer
//!
//! This crate contains the interval model and its canonical text codec.
//! It has no infrastructure dependencies and never logs: every operation is a
//! pure function that returns a typed error and lets the caller decide what to
//! do with it.
//!
//! ## Key Concepts
//!
//! - **Interval**: an immutable range over any totally-ordered `T`, in one of
//!   nine shapes (open, closed, half-open, one-sided, unbounded)
//! - **BoundKind**: the tag naming which of the nine shapes an interval has
//! - **Canonical string**: the bracket form `[lo, hi)` used for display and
//!   re-parsing, with `Infinitive` standing in for an absent bound
//! - **IntervalCodec**: parses canonical strings back into intervals using a
//!   caller-supplied decode function
//!
//! ## Example
//!
//! ```
//! use rangecheck_domain::{Interval, IntervalCodec};
//!
//! let interval = Interval::closed(5, 7).unwrap();
//! assert_eq!(interval.render(), "[5, 7]");
//!
//! let codec = IntervalCodec::new(|s: &str| s.parse::<i32>());
//! let parsed = codec.parse("[5, 7]").unwrap();
//! assert!(parsed.contains(&5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod interval;

// Re-exports for convenience
pub use codec::{classify_brackets, IntervalCodec, INFINITY_TOKEN};
pub use error::{BoundSide, FormatIssue, IntervalError, Result};
pub use interval::{BoundKind, Interval};
