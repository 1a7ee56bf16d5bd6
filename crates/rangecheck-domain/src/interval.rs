//! Interval module - ranges over totally-ordered values

use crate::codec::INFINITY_TOKEN;
use crate::error::{IntervalError, Result};
use std::fmt;

/// The nine interval shapes
///
/// Each kind fixes whether a side is bounded and, if so, whether the bound
/// value itself belongs to the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// `(lo, hi)`: both bounds excluded
    Open,
    /// `[lo, hi]`: both bounds included
    Closed,
    /// `(lo, hi]`: lower excluded, upper included
    OpenClosed,
    /// `[lo, hi)`: lower included, upper excluded
    ClosedOpen,
    /// Everything strictly below the upper bound
    LessThan,
    /// Everything at or above the lower bound
    AtLeast,
    /// Everything at or below the upper bound
    AtMost,
    /// Everything strictly above the lower bound
    GreaterThan,
    /// Every value
    All,
}

impl BoundKind {
    /// All bound kinds, in declaration order
    pub const ALL: [BoundKind; 9] = [
        BoundKind::Open,
        BoundKind::Closed,
        BoundKind::OpenClosed,
        BoundKind::ClosedOpen,
        BoundKind::LessThan,
        BoundKind::AtLeast,
        BoundKind::AtMost,
        BoundKind::GreaterThan,
        BoundKind::All,
    ];

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundKind::Open => "open",
            BoundKind::Closed => "closed",
            BoundKind::OpenClosed => "open_closed",
            BoundKind::ClosedOpen => "closed_open",
            BoundKind::LessThan => "less_than",
            BoundKind::AtLeast => "at_least",
            BoundKind::AtMost => "at_most",
            BoundKind::GreaterThan => "greater_than",
            BoundKind::All => "all",
        }
    }

    /// Whether intervals of this kind carry a lower bound
    pub fn has_lower(&self) -> bool {
        !matches!(self, BoundKind::LessThan | BoundKind::AtMost | BoundKind::All)
    }

    /// Whether intervals of this kind carry an upper bound
    pub fn has_upper(&self) -> bool {
        !matches!(
            self,
            BoundKind::AtLeast | BoundKind::GreaterThan | BoundKind::All
        )
    }
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of an interval, carrying exactly the bounds its kind needs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Shape<T> {
    Open { lower: T, upper: T },
    Closed { lower: T, upper: T },
    OpenClosed { lower: T, upper: T },
    ClosedOpen { lower: T, upper: T },
    LessThan { upper: T },
    AtLeast { lower: T },
    AtMost { upper: T },
    GreaterThan { lower: T },
    All,
}

/// An immutable interval over a totally-ordered value type
///
/// Intervals are only built through the factory functions below. Factories
/// taking two bounds reject `lower > upper` with
/// [`IntervalError::InvalidBound`]; one-sided factories cannot fail.
///
/// # Examples
///
/// ```
/// use rangecheck_domain::{BoundKind, Interval};
///
/// let interval = Interval::closed_open(1, 10).unwrap();
/// assert_eq!(interval.kind(), BoundKind::ClosedOpen);
/// assert!(interval.contains(&1));
/// assert!(!interval.contains(&10));
/// assert_eq!(interval.render(), "[1, 10)");
///
/// assert!(Interval::closed(10, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    shape: Shape<T>,
}

impl<T: Ord> Interval<T> {
    /// Interval including both bounds: `[lower, upper]`
    ///
    /// # Errors
    /// Returns [`IntervalError::InvalidBound`] if `lower > upper`
    pub fn closed(lower: T, upper: T) -> Result<Self> {
        check_order(&lower, &upper)?;
        Ok(Self::from_shape(Shape::Closed { lower, upper }))
    }

    /// Interval excluding both bounds: `(lower, upper)`
    ///
    /// # Errors
    /// Returns [`IntervalError::InvalidBound`] if `lower > upper`
    pub fn open(lower: T, upper: T) -> Result<Self> {
        check_order(&lower, &upper)?;
        Ok(Self::from_shape(Shape::Open { lower, upper }))
    }

    /// Interval excluding the lower bound and including the upper: `(lower, upper]`
    ///
    /// # Errors
    /// Returns [`IntervalError::InvalidBound`] if `lower > upper`
    pub fn open_closed(lower: T, upper: T) -> Result<Self> {
        check_order(&lower, &upper)?;
        Ok(Self::from_shape(Shape::OpenClosed { lower, upper }))
    }

    /// Interval including the lower bound and excluding the upper: `[lower, upper)`
    ///
    /// # Errors
    /// Returns [`IntervalError::InvalidBound`] if `lower > upper`
    pub fn closed_open(lower: T, upper: T) -> Result<Self> {
        check_order(&lower, &upper)?;
        Ok(Self::from_shape(Shape::ClosedOpen { lower, upper }))
    }

    /// Alias for [`Interval::closed`]
    pub fn of(lower: T, upper: T) -> Result<Self> {
        Self::closed(lower, upper)
    }

    /// Every value strictly below `upper`
    pub fn less_than(upper: T) -> Self {
        Self::from_shape(Shape::LessThan { upper })
    }

    /// Every value at or below `upper`
    pub fn at_most(upper: T) -> Self {
        Self::from_shape(Shape::AtMost { upper })
    }

    /// Every value at or above `lower`
    pub fn at_least(lower: T) -> Self {
        Self::from_shape(Shape::AtLeast { lower })
    }

    /// Every value strictly above `lower`
    pub fn greater_than(lower: T) -> Self {
        Self::from_shape(Shape::GreaterThan { lower })
    }

    /// Every value
    pub fn all() -> Self {
        Self::from_shape(Shape::All)
    }

    /// Check if the interval contains a value
    pub fn contains(&self, value: &T) -> bool {
        match &self.shape {
            Shape::Open { lower, upper } => lower < value && value < upper,
            Shape::Closed { lower, upper } => lower <= value && value <= upper,
            Shape::OpenClosed { lower, upper } => lower < value && value <= upper,
            Shape::ClosedOpen { lower, upper } => lower <= value && value < upper,
            Shape::LessThan { upper } => value < upper,
            Shape::AtLeast { lower } => lower <= value,
            Shape::AtMost { upper } => value <= upper,
            Shape::GreaterThan { lower } => lower < value,
            Shape::All => true,
        }
    }
}

impl<T> Interval<T> {
    fn from_shape(shape: Shape<T>) -> Self {
        Self { shape }
    }

    /// Get the bound kind
    pub fn kind(&self) -> BoundKind {
        match self.shape {
            Shape::Open { .. } => BoundKind::Open,
            Shape::Closed { .. } => BoundKind::Closed,
            Shape::OpenClosed { .. } => BoundKind::OpenClosed,
            Shape::ClosedOpen { .. } => BoundKind::ClosedOpen,
            Shape::LessThan { .. } => BoundKind::LessThan,
            Shape::AtLeast { .. } => BoundKind::AtLeast,
            Shape::AtMost { .. } => BoundKind::AtMost,
            Shape::GreaterThan { .. } => BoundKind::GreaterThan,
            Shape::All => BoundKind::All,
        }
    }

    /// Get the lower bound, if the kind has one
    pub fn lower(&self) -> Option<&T> {
        match &self.shape {
            Shape::Open { lower, .. }
            | Shape::Closed { lower, .. }
            | Shape::OpenClosed { lower, .. }
            | Shape::ClosedOpen { lower, .. }
            | Shape::AtLeast { lower }
            | Shape::GreaterThan { lower } => Some(lower),
            Shape::LessThan { .. } | Shape::AtMost { .. } | Shape::All => None,
        }
    }

    /// Get the upper bound, if the kind has one
    pub fn upper(&self) -> Option<&T> {
        match &self.shape {
            Shape::Open { upper, .. }
            | Shape::Closed { upper, .. }
            | Shape::OpenClosed { upper, .. }
            | Shape::ClosedOpen { upper, .. }
            | Shape::LessThan { upper }
            | Shape::AtMost { upper } => Some(upper),
            Shape::AtLeast { .. } | Shape::GreaterThan { .. } | Shape::All => None,
        }
    }
}

impl<T: fmt::Display> Interval<T> {
    /// Render the canonical string form, e.g. `[5, 7)` or `[Infinitive, 100)`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Canonical form. Unbounded sides print as `Infinitive`; the bracket next to
/// them is fixed per kind so the output parses back to the same kind.
impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            Shape::Open { lower, upper } => write!(f, "({}, {})", lower, upper),
            Shape::Closed { lower, upper } => write!(f, "[{}, {}]", lower, upper),
            Shape::OpenClosed { lower, upper } => write!(f, "({}, {}]", lower, upper),
            Shape::ClosedOpen { lower, upper } => write!(f, "[{}, {})", lower, upper),
            Shape::LessThan { upper } => write!(f, "[{}, {})", INFINITY_TOKEN, upper),
            Shape::AtLeast { lower } => write!(f, "[{}, {}]", lower, INFINITY_TOKEN),
            Shape::AtMost { upper } => write!(f, "[{}, {}]", INFINITY_TOKEN, upper),
            Shape::GreaterThan { lower } => write!(f, "({}, {}]", lower, INFINITY_TOKEN),
            Shape::All => write!(f, "[{}, {}]", INFINITY_TOKEN, INFINITY_TOKEN),
        }
    }
}

fn check_order<T: Ord>(lower: &T, upper: &T) -> Result<()> {
    if lower > upper {
        return Err(IntervalError::InvalidBound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::of(5, 50).unwrap();
        assert_eq!(interval.lower(), Some(&5));
        assert_eq!(interval.upper(), Some(&50));
        assert_eq!(interval.kind(), BoundKind::Closed);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert_eq!(Interval::closed(500, 1), Err(IntervalError::InvalidBound));
        assert_eq!(Interval::open(500, 1), Err(IntervalError::InvalidBound));
        assert_eq!(Interval::open_closed(500, 1), Err(IntervalError::InvalidBound));
        assert_eq!(Interval::closed_open(500, 1), Err(IntervalError::InvalidBound));
        assert_eq!(Interval::of(500, 1), Err(IntervalError::InvalidBound));
    }

    #[test]
    fn test_equal_bounds_allowed() {
        assert!(Interval::closed(3, 3).unwrap().contains(&3));
        assert!(!Interval::open(3, 3).unwrap().contains(&3));
        assert!(!Interval::open_closed(3, 3).unwrap().contains(&3));
        assert!(!Interval::closed_open(3, 3).unwrap().contains(&3));
    }

    #[test]
    fn test_closed_contains() {
        let interval = Interval::closed(5, 7).unwrap();
        for x in [5, 6, 7] {
            assert!(interval.contains(&x), "{} should be in [5, 7]", x);
        }
        for x in [i32::MIN, 4, 8, i32::MAX] {
            assert!(!interval.contains(&x), "{} should not be in [5, 7]", x);
        }
    }

    #[test]
    fn test_open_contains() {
        let interval = Interval::open(5, 7).unwrap();
        assert!(!interval.contains(&5));
        assert!(interval.contains(&6));
        assert!(!interval.contains(&7));
    }

    #[test]
    fn test_half_open_contains() {
        let open_closed = Interval::open_closed(5, 7).unwrap();
        assert!(!open_closed.contains(&5));
        assert!(open_closed.contains(&6));
        assert!(open_closed.contains(&7));

        let closed_open = Interval::closed_open(5, 7).unwrap();
        assert!(closed_open.contains(&5));
        assert!(closed_open.contains(&6));
        assert!(!closed_open.contains(&7));
    }

    #[test]
    fn test_one_sided_contains() {
        let less_than = Interval::less_than(5);
        assert!(less_than.contains(&4));
        assert!(less_than.contains(&-9000));
        assert!(!less_than.contains(&5));

        let at_least = Interval::at_least(5);
        assert!(at_least.contains(&5));
        assert!(!at_least.contains(&4));

        let at_most = Interval::at_most(5);
        assert!(at_most.contains(&5));
        assert!(at_most.contains(&-234234));
        assert!(!at_most.contains(&6));

        let greater_than = Interval::greater_than(5);
        assert!(greater_than.contains(&6));
        assert!(!greater_than.contains(&5));
    }

    #[test]
    fn test_all_contains_everything() {
        let all: Interval<Option<String>> = Interval::all();
        assert!(all.contains(&Some("anything".to_string())));
        assert!(all.contains(&Some(String::new())));
        assert!(all.contains(&None));
    }

    #[test]
    fn test_intervals_are_independent() {
        let first = Interval::of(5, 10).unwrap();
        let second = Interval::of(11, 20).unwrap();

        assert!(first.contains(&10));
        assert!(!second.contains(&10));
    }

    #[test]
    fn test_string_interval() {
        let text = Interval::open("abc".to_string(), "xyz".to_string()).unwrap();
        assert!(!text.contains(&"abc".to_string()));
        assert!(!text.contains(&"xyz".to_string()));
        assert!(text.contains(&"abd".to_string()));
    }

    #[test]
    fn test_absent_bounds() {
        assert_eq!(Interval::less_than(5).lower(), None);
        assert_eq!(Interval::less_than(5).upper(), Some(&5));
        assert_eq!(Interval::greater_than(5).lower(), Some(&5));
        assert_eq!(Interval::greater_than(5).upper(), None);
        assert_eq!(Interval::<i32>::all().lower(), None);
        assert_eq!(Interval::<i32>::all().upper(), None);
    }

    #[test]
    fn test_kind_matches_bounds() {
        let intervals = [
            Interval::open(1, 2).unwrap(),
            Interval::closed(1, 2).unwrap(),
            Interval::open_closed(1, 2).unwrap(),
            Interval::closed_open(1, 2).unwrap(),
            Interval::less_than(2),
            Interval::at_least(1),
            Interval::at_most(2),
            Interval::greater_than(1),
            Interval::all(),
        ];

        for (interval, kind) in intervals.iter().zip(BoundKind::ALL) {
            assert_eq!(interval.kind(), kind);
            assert_eq!(interval.lower().is_some(), kind.has_lower());
            assert_eq!(interval.upper().is_some(), kind.has_upper());
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(Interval::open(5, 7).unwrap().render(), "(5, 7)");
        assert_eq!(Interval::closed(5, 7).unwrap().render(), "[5, 7]");
        assert_eq!(Interval::open_closed(5, 7).unwrap().render(), "(5, 7]");
        assert_eq!(Interval::closed_open(5, 7).unwrap().render(), "[5, 7)");
        assert_eq!(Interval::less_than(100).render(), "[Infinitive, 100)");
        assert_eq!(Interval::at_least(5).render(), "[5, Infinitive]");
        assert_eq!(Interval::at_most(5).render(), "[Infinitive, 5]");
        assert_eq!(Interval::greater_than(5).render(), "(5, Infinitive]");
        assert_eq!(Interval::<i32>::all().render(), "[Infinitive, Infinitive]");
    }

    #[test]
    fn test_display_matches_render() {
        let interval = Interval::closed_open(-3, 12).unwrap();
        assert_eq!(format!("{}", interval), interval.render());
    }

    #[test]
    fn test_bound_kind_names() {
        assert_eq!(BoundKind::OpenClosed.as_str(), "open_closed");
        assert_eq!(BoundKind::GreaterThan.to_string(), "greater_than");
    }
}
