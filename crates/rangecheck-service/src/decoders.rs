//! Decoder table - one decode function per value kind

use crate::error::DecodeError;
use crate::kind::ValueKind;
use crate::values::{Decimal, LocalDate, TotalF32, TotalF64};
use num::BigInt;
use std::str::FromStr;

/// A decode function turning text into a value of type `V`
pub type Decoder<V> = fn(&str) -> Result<V, DecodeError>;

/// Explicit mapping from every [`ValueKind`] to its decode function
///
/// Built once by the caller and handed to the service by value. Fields are
/// public so a caller (or a test) can replace a single decoder.
///
/// # Examples
///
/// ```
/// use rangecheck_service::{DecodeError, DecoderTable, RangeService, ValueKind};
///
/// // Accept thousands separators for integers
/// fn lenient_integer(text: &str) -> Result<i32, DecodeError> {
///     text.replace('_', "")
///         .parse()
///         .map_err(|e| DecodeError::new(ValueKind::Integer, text, e))
/// }
///
/// let table = DecoderTable {
///     integer: lenient_integer,
///     ..DecoderTable::standard()
/// };
/// let service = RangeService::new(table);
/// assert!(service.check("[1_000, 2_000]", "1_500", "Integer").unwrap());
/// ```
#[derive(Clone, Copy)]
pub struct DecoderTable {
    /// Decoder for [`ValueKind::Integer`]
    pub integer: Decoder<i32>,
    /// Decoder for [`ValueKind::Long`]
    pub long: Decoder<i64>,
    /// Decoder for [`ValueKind::Float`]
    pub float: Decoder<TotalF32>,
    /// Decoder for [`ValueKind::Double`]
    pub double: Decoder<TotalF64>,
    /// Decoder for [`ValueKind::BigDecimal`]
    pub big_decimal: Decoder<Decimal>,
    /// Decoder for [`ValueKind::BigInteger`]
    pub big_integer: Decoder<BigInt>,
    /// Decoder for [`ValueKind::Text`]
    pub text: Decoder<String>,
    /// Decoder for [`ValueKind::LocalDate`]
    pub local_date: Decoder<LocalDate>,
}

impl DecoderTable {
    /// The standard decoders: each value type's `FromStr`, and identity for text
    pub fn standard() -> Self {
        Self {
            integer: |text| parse_as(ValueKind::Integer, text),
            long: |text| parse_as(ValueKind::Long, text),
            float: |text| parse_as(ValueKind::Float, text),
            double: |text| parse_as(ValueKind::Double, text),
            big_decimal: |text| parse_as(ValueKind::BigDecimal, text),
            big_integer: |text| parse_as(ValueKind::BigInteger, text),
            text: |text| Ok(text.to_string()),
            local_date: |text| parse_as(ValueKind::LocalDate, text),
        }
    }
}

impl Default for DecoderTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_as<V>(kind: ValueKind, text: &str) -> Result<V, DecodeError>
where
    V: FromStr,
    V::Err: std::fmt::Display,
{
    text.parse().map_err(|e| DecodeError::new(kind, text, e))
}
