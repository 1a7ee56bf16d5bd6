//! Ordered value types for the kinds the standard library does not cover
//!
//! Every type here is `Ord` (as intervals require), renders through
//! `Display` and parses through `FromStr`, with the two being inverses.

use num::bigint::Sign;
use num::BigInt;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::macros::format_description;
use time::{Date, Month};

/// Arbitrary-precision decimal number
///
/// Stored as an unscaled integer and a count of fractional digits, so
/// `1.50` keeps its scale when rendered. Comparison is numeric: `1.5` and
/// `1.50` are equal. Exponent notation is folded into the scale when
/// parsing, so `2.5e-3` renders as `0.0025`.
#[derive(Debug, Clone)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

/// Largest exponent magnitude accepted in `1.5e3` notation
const MAX_EXPONENT: i64 = 10_000;

/// A decimal literal was malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal '{0}'")]
pub struct ParseDecimalError(String);

impl Decimal {
    /// Create a decimal equal to `unscaled / 10^scale`
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    /// Number of digits after the decimal point
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn unscaled_at(&self, scale: u32) -> BigInt {
        let factor = num::pow(BigInt::from(10u8), (scale - self.scale) as usize);
        &self.unscaled * factor
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.unscaled_at(scale).cmp(&other.unscaled_at(scale))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalError(s.to_string());

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                let exponent: i64 = exponent.parse().map_err(|_| invalid())?;
                if exponent.abs() > MAX_EXPONENT {
                    return Err(invalid());
                }
                (mantissa, exponent)
            }
            None => (unsigned, 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let digits = format!("{}{}", whole, fraction);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let magnitude: BigInt = digits.parse().map_err(|_| invalid())?;
        let unscaled = if negative { -magnitude } else { magnitude };

        // A positive exponent beyond the fraction digits leaves whole zeros to append
        let scale = i64::try_from(fraction.len()).map_err(|_| invalid())? - exponent;
        if scale < 0 {
            let factor = num::pow(BigInt::from(10u8), scale.unsigned_abs() as usize);
            return Ok(Self::new(unscaled * factor, 0));
        }

        let scale = u32::try_from(scale).map_err(|_| invalid())?;
        Ok(Self::new(unscaled, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unscaled.sign() == Sign::Minus {
            f.write_str("-")?;
        }

        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }

        // Left-pad so there is at least one digit before the point
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}.{}", whole, fraction)
    }
}

macro_rules! total_float {
    ($name:ident, $float:ty) => {
        #[doc = concat!("`", stringify!($float), "` ordered by IEEE 754 total order (`total_cmp`)")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub $float);

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseFloatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

total_float!(TotalF32, f32);
total_float!(TotalF64, f64);

/// Calendar date rendered and parsed as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate(Date);

impl LocalDate {
    /// Create a date from year, month (1-12) and day
    ///
    /// # Errors
    /// Returns an error if the components do not name a real date
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, time::error::ComponentRange> {
        let month = Month::try_from(month)?;
        Ok(Self(Date::from_calendar_date(year, month, day)?))
    }
}

impl FromStr for LocalDate {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s, format_description!("[year]-[month]-[day]")).map(Self)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .0
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
