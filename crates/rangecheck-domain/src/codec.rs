//! Canonical string codec for intervals
//!
//! The canonical form is `open-bracket lower ", " upper close-bracket`, where
//! `[`/`]` mark an included bound, `(`/`)` an excluded one, and the token
//! `Infinitive` an absent bound. Which of the nine [`BoundKind`]s a string
//! denotes is decided from the two brackets and the position of `Infinitive`
//! tokens alone, before any value is decoded.
//!
//! Bound values are written with their `Display` form and not escaped. A
//! value whose rendering contains `", "`, or equals `Infinitive` in any
//! case, does not survive a render/parse round trip.

use crate::error::{BoundSide, FormatIssue, IntervalError, Result};
use crate::interval::{BoundKind, Interval};
use std::fmt;
use std::str::FromStr;

/// Placeholder for an absent bound in the canonical string form
///
/// Rendered with this exact case; matched case-insensitively when parsing.
pub const INFINITY_TOKEN: &str = "Infinitive";

/// Separator between the lower and upper bound tokens
const SEPARATOR: &str = ", ";

/// Parses canonical interval strings with a caller-supplied decode function
///
/// The decoder turns one bound token into a `T`. The codec calls it at most
/// once per bound and never for an `Infinitive` token; it does not retry or
/// cache results.
///
/// # Examples
///
/// ```
/// use rangecheck_domain::{BoundKind, IntervalCodec};
///
/// let codec = IntervalCodec::new(|s: &str| s.parse::<i64>());
///
/// let interval = codec.parse("[Infinitive, 100)").unwrap();
/// assert_eq!(interval.kind(), BoundKind::LessThan);
/// assert!(interval.contains(&99));
///
/// let value = codec.parse_value("100").unwrap();
/// assert!(!interval.contains(&value));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntervalCodec<F> {
    decode: F,
}

impl<F> IntervalCodec<F> {
    /// Create a codec around a decode function
    pub fn new<T, E>(decode: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<T, E>,
    {
        Self { decode }
    }

    /// Parse a canonical interval string
    ///
    /// # Errors
    /// Returns [`IntervalError::InvalidRangeFormat`] if the brackets and
    /// `Infinitive` tokens match none of the nine shapes, the `", "` separator
    /// is missing, a bound fails to decode, or the decoded bounds are inverted.
    pub fn parse<T, E>(&self, text: &str) -> Result<Interval<T>>
    where
        F: Fn(&str) -> std::result::Result<T, E>,
        T: Ord,
        E: fmt::Display,
    {
        let raw = RawBounds::split(text).map_err(|issue| IntervalError::format(text, issue))?;
        let kind = raw.kind().map_err(|issue| IntervalError::format(text, issue))?;
        let (lower_token, upper_token) = raw
            .tokens()
            .map_err(|issue| IntervalError::format(text, issue))?;

        // Sides the kind does not carry are `Infinitive` and never decoded
        let lower = || self.decode_bound(text, lower_token, BoundSide::Lower);
        let upper = || self.decode_bound(text, upper_token, BoundSide::Upper);

        let built = match kind {
            BoundKind::Open => Interval::open(lower()?, upper()?),
            BoundKind::Closed => Interval::closed(lower()?, upper()?),
            BoundKind::OpenClosed => Interval::open_closed(lower()?, upper()?),
            BoundKind::ClosedOpen => Interval::closed_open(lower()?, upper()?),
            BoundKind::LessThan => Ok(Interval::less_than(upper()?)),
            BoundKind::AtLeast => Ok(Interval::at_least(lower()?)),
            BoundKind::AtMost => Ok(Interval::at_most(upper()?)),
            BoundKind::GreaterThan => Ok(Interval::greater_than(lower()?)),
            BoundKind::All => Ok(Interval::all()),
        };

        built.map_err(|_| IntervalError::format(text, FormatIssue::InvertedBounds))
    }

    /// Decode a bare value with the same decode function
    ///
    /// # Errors
    /// Whatever the decode function returns, unchanged.
    pub fn parse_value<T, E>(&self, text: &str) -> std::result::Result<T, E>
    where
        F: Fn(&str) -> std::result::Result<T, E>,
    {
        (self.decode)(text)
    }

    fn decode_bound<T, E>(&self, input: &str, token: &str, side: BoundSide) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        (self.decode)(token).map_err(|e| {
            IntervalError::format(
                input,
                FormatIssue::Decode {
                    side,
                    message: e.to_string(),
                },
            )
        })
    }
}

/// Determine the bound kind of a canonical interval string without decoding it
///
/// Only the outer brackets and the tokens touching them are inspected; the
/// `", "` separator is not required here, so `[5,7]` classifies as
/// [`BoundKind::Closed`] even though [`IntervalCodec::parse`] rejects it.
///
/// # Errors
/// Returns [`IntervalError::InvalidRangeFormat`] when the text has no bracket
/// pair or a bracket/`Infinitive` combination outside the nine shapes (for
/// example `(Infinitive, 5]`).
pub fn classify_brackets(text: &str) -> Result<BoundKind> {
    RawBounds::split(text)
        .and_then(|raw| raw.kind())
        .map_err(|issue| IntervalError::format(text, issue))
}

impl<T> FromStr for Interval<T>
where
    T: FromStr + Ord,
    T::Err: fmt::Display,
{
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self> {
        IntervalCodec::new(|token: &str| token.parse::<T>()).parse(s)
    }
}

/// Brackets and undecoded interior of a canonical string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawBounds<'a> {
    open: char,
    interior: &'a str,
    close: char,
}

impl<'a> RawBounds<'a> {
    fn split(text: &'a str) -> std::result::Result<Self, FormatIssue> {
        let trimmed = text.trim();
        let mut chars = trimmed.chars();

        let (open, close) = match (chars.next(), chars.next_back()) {
            (Some(open @ ('[' | '(')), Some(close @ (']' | ')'))) => (open, close),
            _ => return Err(FormatIssue::UnrecognizedShape),
        };

        Ok(Self {
            open,
            interior: chars.as_str(),
            close,
        })
    }

    /// Lower and upper tokens, split on the first separator
    ///
    /// The upper token keeps any later separators.
    fn tokens(&self) -> std::result::Result<(&'a str, &'a str), FormatIssue> {
        self.interior
            .split_once(SEPARATOR)
            .ok_or(FormatIssue::MissingSeparator)
    }

    fn kind(&self) -> std::result::Result<BoundKind, FormatIssue> {
        // The tokens touching each bracket; without a comma both are the whole interior
        let leading = self.interior.split(',').next().unwrap_or_default();
        let trailing = self.interior.rsplit(',').next().unwrap_or_default();

        let lower_inf = is_infinity(leading.trim());
        let upper_inf = is_infinity(trailing.trim());

        match (self.open, lower_inf, upper_inf, self.close) {
            (_, true, true, _) => Ok(BoundKind::All),
            ('[', true, false, ']') => Ok(BoundKind::AtMost),
            ('[', true, false, ')') => Ok(BoundKind::LessThan),
            ('[', false, true, ']') => Ok(BoundKind::AtLeast),
            ('(', false, true, ']') => Ok(BoundKind::GreaterThan),
            ('[', false, false, ']') => Ok(BoundKind::Closed),
            ('(', false, false, ')') => Ok(BoundKind::Open),
            ('(', false, false, ']') => Ok(BoundKind::OpenClosed),
            ('[', false, false, ')') => Ok(BoundKind::ClosedOpen),
            _ => Err(FormatIssue::UnrecognizedShape),
        }
    }
}

fn is_infinity(token: &str) -> bool {
    token.eq_ignore_ascii_case(INFINITY_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::num::ParseIntError;

    fn int_codec() -> IntervalCodec<impl Fn(&str) -> std::result::Result<i32, ParseIntError>> {
        IntervalCodec::new(|s: &str| s.parse::<i32>())
    }

    fn issue_of(text: &str) -> FormatIssue {
        match int_codec().parse(text) {
            Err(IntervalError::InvalidRangeFormat { reason, .. }) => reason,
            other => panic!("Expected InvalidRangeFormat for {:?}, got {:?}", text, other),
        }
    }

    #[test]
    fn test_classify_brackets() {
        let cases = [
            ("[Infinitive, Infinitive]", BoundKind::All),
            ("[Infinitive, 5]", BoundKind::AtMost),
            ("[Infinitive, 5)", BoundKind::LessThan),
            ("[5, Infinitive]", BoundKind::AtLeast),
            ("(5, Infinitive]", BoundKind::GreaterThan),
            ("[5, 7]", BoundKind::Closed),
            ("(5, 7)", BoundKind::Open),
            ("(5, 7]", BoundKind::OpenClosed),
            ("[5, 7)", BoundKind::ClosedOpen),
        ];

        for (text, kind) in cases {
            assert_eq!(classify_brackets(text), Ok(kind), "classifying {}", text);
        }
    }

    #[test]
    fn test_classify_rejects_other_shapes() {
        for text in [
            "(Infinitive, 5]",
            "(Infinitive, 5)",
            "[5, Infinitive)",
            "(5, Infinitive)",
            "5, 7",
            "{5, 7}",
            "[5, 7",
            "",
            "[",
        ] {
            assert!(classify_brackets(text).is_err(), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_infinity_token_case_insensitive() {
        assert_eq!(classify_brackets("[INFINITIVE, 5)"), Ok(BoundKind::LessThan));
        assert_eq!(classify_brackets("[3, infinitive]"), Ok(BoundKind::AtLeast));

        let interval = int_codec().parse("[infinitive, INFINITIVE]").unwrap();
        assert_eq!(interval.kind(), BoundKind::All);
        assert_eq!(interval.render(), "[Infinitive, Infinitive]");
    }

    #[test]
    fn test_parse_closed() {
        let interval = int_codec().parse("[5, 7]").unwrap();
        assert_eq!(interval, Interval::closed(5, 7).unwrap());
        assert!(interval.contains(&5));
    }

    #[test]
    fn test_parse_one_sided() {
        let codec = int_codec();
        assert_eq!(codec.parse("[Infinitive, 100)").unwrap(), Interval::less_than(100));
        assert_eq!(codec.parse("[Infinitive, 100]").unwrap(), Interval::at_most(100));
        assert_eq!(codec.parse("[-4, Infinitive]").unwrap(), Interval::at_least(-4));
        assert_eq!(codec.parse("(-4, Infinitive]").unwrap(), Interval::greater_than(-4));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let interval = int_codec().parse("  (1, 9]\n").unwrap();
        assert_eq!(interval, Interval::open_closed(1, 9).unwrap());
    }

    #[test]
    fn test_missing_brackets() {
        assert_eq!(issue_of("5, 7"), FormatIssue::UnrecognizedShape);
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(issue_of("[5,7]"), FormatIssue::MissingSeparator);
        assert_eq!(issue_of("[5 7]"), FormatIssue::MissingSeparator);
    }

    #[test]
    fn test_classify_does_not_need_separator() {
        assert_eq!(classify_brackets("[5,7]"), Ok(BoundKind::Closed));
        assert_eq!(classify_brackets("(5 7]"), Ok(BoundKind::OpenClosed));
        assert_eq!(classify_brackets("[Infinitive,7)"), Ok(BoundKind::LessThan));
        assert_eq!(classify_brackets("(5 ,infinitive]"), Ok(BoundKind::GreaterThan));
        assert_eq!(classify_brackets("[]"), Ok(BoundKind::Closed));

        // Parsing still insists on the separator
        assert_eq!(issue_of("[Infinitive,7)"), FormatIssue::MissingSeparator);
    }

    #[test]
    fn test_shape_is_checked_before_separator() {
        assert_eq!(issue_of("(Infinitive,5]"), FormatIssue::UnrecognizedShape);
    }

    #[test]
    fn test_separator_is_strict() {
        // A second space stays in the upper token and reaches the decoder
        assert!(matches!(
            issue_of("[5,  7]"),
            FormatIssue::Decode { side: BoundSide::Upper, .. }
        ));
    }

    #[test]
    fn test_decode_failure_is_wrapped() {
        let err = int_codec().parse("[five, 7]").unwrap_err();
        match err {
            IntervalError::InvalidRangeFormat { input, reason } => {
                assert_eq!(input, "[five, 7]");
                assert_eq!(
                    reason,
                    FormatIssue::Decode {
                        side: BoundSide::Lower,
                        message: "invalid digit found in string".to_string(),
                    }
                );
            }
            other => panic!("Expected InvalidRangeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_bounds_while_parsing() {
        assert_eq!(issue_of("[7, 5]"), FormatIssue::InvertedBounds);
    }

    #[test]
    fn test_decoder_skips_infinity_tokens() {
        let calls = Cell::new(0);
        let codec = IntervalCodec::new(|s: &str| {
            calls.set(calls.get() + 1);
            s.parse::<i32>()
        });

        codec.parse("[Infinitive, Infinitive]").unwrap();
        assert_eq!(calls.get(), 0);

        codec.parse("(3, Infinitive]").unwrap();
        assert_eq!(calls.get(), 1);

        codec.parse("(3, 4)").unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_parse_value_propagates_decoder_error() {
        let codec = int_codec();
        assert_eq!(codec.parse_value("6"), Ok(6));

        let err: ParseIntError = codec.parse_value("six").unwrap_err();
        assert_eq!(err, "six".parse::<i32>().unwrap_err());
    }

    #[test]
    fn test_from_str() {
        let interval: Interval<u64> = "[10, 20)".parse().unwrap();
        assert!(interval.contains(&19));
        assert!(!interval.contains(&20));

        assert!("[10, -1)".parse::<Interval<u64>>().is_err());
    }

    #[test]
    fn test_text_values_containing_separator_are_mis_split() {
        // The first ", " always splits; a text bound containing it cannot round-trip
        let interval = Interval::closed("a, b".to_string(), "c".to_string()).unwrap();
        let rendered = interval.render();
        assert_eq!(rendered, "[a, b, c]");

        let reparsed: Interval<String> = rendered.parse().unwrap();
        assert_eq!(reparsed.lower().map(String::as_str), Some("a"));
        assert_eq!(reparsed.upper().map(String::as_str), Some("b, c"));
    }

    #[test]
    fn test_text_values_equal_to_infinity_token_do_not_round_trip() {
        // A text bound spelled like the infinity token reads back as an absent bound
        let closed = Interval::closed("Infinitive".to_string(), "z".to_string()).unwrap();
        assert_eq!(closed.render(), "[Infinitive, z]");
        assert!(!closed.contains(&"A".to_string()));

        let reparsed: Interval<String> = closed.render().parse().unwrap();
        assert_eq!(reparsed.kind(), BoundKind::AtMost);
        assert!(reparsed.contains(&"A".to_string()));

        // On the wrong side for its bracket it no longer parses at all
        let open = Interval::open("a".to_string(), "infinitive".to_string()).unwrap();
        assert_eq!(open.render(), "(a, infinitive)");
        match open.render().parse::<Interval<String>>() {
            Err(IntervalError::InvalidRangeFormat { reason, .. }) => {
                assert_eq!(reason, FormatIssue::UnrecognizedShape);
            }
            other => panic!("Expected UnrecognizedShape, got {:?}", other),
        }
    }
}
