//! Range checks over typed values

use crate::decoders::{Decoder, DecoderTable};
use crate::error::Result;
use crate::kind::ValueKind;
use rangecheck_domain::{BoundKind, IntervalCodec};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A range check request: three strings, decoded according to the type tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRequest {
    /// Canonical range literal, e.g. `[5, 7)`
    pub range: String,

    /// Value literal to test for membership
    pub value: String,

    /// Type tag naming the value kind, e.g. `Integer` or `LocalDate.class`
    #[serde(rename = "typeName", alias = "classDefinition")]
    pub type_name: String,
}

impl RangeRequest {
    /// Create a new request
    pub fn new(
        range: impl Into<String>,
        value: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            range: range.into(),
            value: value.into(),
            type_name: type_name.into(),
        }
    }
}

/// A range literal after parsing and re-rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRange {
    /// Value kind the bounds were decoded as
    pub value_kind: String,
    /// Bound kind name, e.g. `closed_open`
    pub bound_kind: String,
    /// Canonical rendering
    pub rendered: String,
}

/// Evaluates range requests with an explicit decoder table
pub struct RangeService {
    decoders: DecoderTable,
}

impl RangeService {
    /// Create a service using the given decoders
    pub fn new(decoders: DecoderTable) -> Self {
        Self { decoders }
    }

    /// Check whether the request's value lies in the request's range
    ///
    /// # Errors
    /// - [`ServiceError::UnknownType`](crate::ServiceError::UnknownType) if the type tag resolves to no value kind
    /// - [`ServiceError::Interval`](crate::ServiceError::Interval) if the range literal is malformed
    /// - [`ServiceError::Decode`](crate::ServiceError::Decode) if the value literal cannot be decoded
    pub fn in_range(&self, request: &RangeRequest) -> Result<bool> {
        self.check(&request.range, &request.value, &request.type_name)
    }

    /// Check whether `value` lies in `range`, both decoded as `type_name`
    pub fn check(&self, range: &str, value: &str, type_name: &str) -> Result<bool> {
        let kind = ValueKind::resolve(type_name).inspect_err(|e| warn!("Rejected range check: {}", e))?;

        let table = &self.decoders;
        let outcome = match kind {
            ValueKind::Integer => evaluate(range, value, table.integer),
            ValueKind::Long => evaluate(range, value, table.long),
            ValueKind::Float => evaluate(range, value, table.float),
            ValueKind::Double => evaluate(range, value, table.double),
            ValueKind::BigDecimal => evaluate(range, value, table.big_decimal),
            ValueKind::BigInteger => evaluate(range, value, table.big_integer),
            ValueKind::Text => evaluate(range, value, table.text),
            ValueKind::LocalDate => evaluate(range, value, table.local_date),
        };

        match &outcome {
            Ok(contained) => debug!(
                "Range check {} {} {} as {}",
                value,
                if *contained { "in" } else { "not in" },
                range,
                kind
            ),
            Err(e) => warn!("Rejected range check of '{}' against '{}': {}", value, range, e),
        }

        outcome
    }

    /// Parse `range` as `type_name` and render it back in canonical form
    pub fn canonicalize(&self, range: &str, type_name: &str) -> Result<CanonicalRange> {
        let kind = ValueKind::resolve(type_name)?;

        let table = &self.decoders;
        let (bound_kind, rendered) = match kind {
            ValueKind::Integer => render(range, table.integer),
            ValueKind::Long => render(range, table.long),
            ValueKind::Float => render(range, table.float),
            ValueKind::Double => render(range, table.double),
            ValueKind::BigDecimal => render(range, table.big_decimal),
            ValueKind::BigInteger => render(range, table.big_integer),
            ValueKind::Text => render(range, table.text),
            ValueKind::LocalDate => render(range, table.local_date),
        }?;

        debug!("Canonicalized '{}' as {} to '{}'", range, kind, rendered);

        Ok(CanonicalRange {
            value_kind: kind.as_str().to_string(),
            bound_kind: bound_kind.as_str().to_string(),
            rendered,
        })
    }
}

impl Default for RangeService {
    fn default() -> Self {
        Self::new(DecoderTable::standard())
    }
}

fn evaluate<V: Ord>(range: &str, value: &str, decode: Decoder<V>) -> Result<bool> {
    let codec = IntervalCodec::new(decode);
    let interval = codec.parse(range)?;
    let value = codec.parse_value(value)?;
    Ok(interval.contains(&value))
}

fn render<V: Ord + fmt::Display>(range: &str, decode: Decoder<V>) -> Result<(BoundKind, String)> {
    let interval = IntervalCodec::new(decode).parse(range)?;
    Ok((interval.kind(), interval.render()))
}
