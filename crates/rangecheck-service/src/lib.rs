//! Rangecheck Service
//!
//! Answers "is this value inside this range?" for requests made of three
//! strings: a canonical range literal, a value literal and a type tag.
//!
//! The service provides:
//! - Type tag resolution onto a closed set of value kinds
//! - An explicit decoder table, one decode function per value kind
//! - Ordered value types for kinds the standard library cannot order totally
//!   (floats) or does not provide (decimals, dates)
//! - Range checks and range canonicalization
//!
//! # Examples
//!
//! ```
//! use rangecheck_service::{RangeRequest, RangeService};
//!
//! let service = RangeService::default();
//! let request = RangeRequest::new("[5, 7]", "6", "Integer.class");
//! assert!(service.in_range(&request).unwrap());
//! ```

#![warn(missing_docs)]

mod decoders;
mod error;
mod kind;
mod service;
mod values;

pub use decoders::{Decoder, DecoderTable};
pub use error::{DecodeError, Result, ServiceError};
pub use kind::ValueKind;
pub use service::{CanonicalRange, RangeRequest, RangeService};
pub use values::{Decimal, LocalDate, ParseDecimalError, TotalF32, TotalF64};
