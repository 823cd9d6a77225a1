//! Optional inclusive bounds shared by numeric and length validators.

use std::fmt::Display;
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive};

use serde::{Deserialize, Serialize};

/// Optional inclusive `min` / `max`.
///
/// A missing side is unbounded. Zero is an ordinary bound: `Bounds::at_least(0)`
/// rejects negatives. Use [`Bounds::legacy`] for the older convention where a
/// bound of exactly zero meant "no bound".
///
/// # Examples
///
/// ```
/// use verifiers::foundation::Bounds;
///
/// let b = Bounds::from(1..=100);
/// assert!(b.violation(&42).is_none());
/// assert!(b.violation(&150).is_some());
///
/// // Deserializes from host configuration
/// let b: Bounds<i64> = serde_json::from_str(r#"{ "min": 18 }"#).unwrap();
/// assert_eq!(b, Bounds::at_least(18));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds<T> {
    /// Lower bound (inclusive).
    pub min: Option<T>,
    /// Upper bound (inclusive).
    pub max: Option<T>,
}

/// Which side of a [`Bounds`] was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundViolation<T> {
    /// Value is below `min`.
    Below(T),
    /// Value is above `max`.
    Above(T),
}

impl<T> Bounds<T> {
    /// No bound on either side.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Creates bounds from optional sides.
    #[must_use]
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Lower bound only.
    #[must_use]
    pub const fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Upper bound only.
    #[must_use]
    pub const fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Both sides.
    #[must_use]
    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns `true` when neither side is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T: Default + PartialEq> Bounds<T> {
    /// Bounds where a side equal to zero (`T::default()`) is dropped.
    ///
    /// Reproduces callers written against the falsy-zero convention, where
    /// `min = 0` could not be expressed.
    ///
    /// ```
    /// use verifiers::foundation::Bounds;
    ///
    /// assert_eq!(Bounds::legacy(0, 10), Bounds::at_most(10));
    /// assert_eq!(Bounds::legacy(0.0, 0.0), Bounds::<f64>::none());
    /// ```
    #[must_use]
    pub fn legacy(min: T, max: T) -> Self {
        let zero = T::default();
        Self {
            min: (min != zero).then_some(min),
            max: (max != zero).then_some(max),
        }
    }
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Checks `value` and reports the violated side, if any.
    #[must_use]
    pub fn violation(&self, value: &T) -> Option<BoundViolation<T>> {
        if let Some(min) = self.min
            && *value < min
        {
            return Some(BoundViolation::Below(min));
        }
        if let Some(max) = self.max
            && *value > max
        {
            return Some(BoundViolation::Above(max));
        }
        None
    }

    /// Returns `true` when `value` satisfies both sides.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.violation(value).is_none()
    }
}

impl<T: Display> Display for Bounds<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => write!(f, "[{min}, {max}]"),
            (Some(min), None) => write!(f, "[{min}, ..)"),
            (None, Some(max)) => write!(f, "(.., {max}]"),
            (None, None) => write!(f, "(..)"),
        }
    }
}

impl<T> From<RangeInclusive<T>> for Bounds<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Self::between(min, max)
    }
}

impl<T> From<RangeFrom<T>> for Bounds<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<RangeToInclusive<T>> for Bounds<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<RangeFull> for Bounds<T> {
    fn from(_: RangeFull) -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_real_bound() {
        let b = Bounds::at_least(0);
        assert_eq!(b.violation(&-1), Some(BoundViolation::Below(0)));
        assert!(b.contains(&0));
    }

    #[test]
    fn legacy_drops_zero_sides() {
        let b = Bounds::legacy(0, 10);
        assert!(b.contains(&-5));
        assert_eq!(b.violation(&11), Some(BoundViolation::Above(10)));
    }

    #[test]
    fn ranges_convert() {
        assert_eq!(Bounds::from(1..=5), Bounds::between(1, 5));
        assert_eq!(Bounds::from(3..), Bounds::at_least(3));
        assert_eq!(Bounds::from(..=9), Bounds::at_most(9));
        assert!(Bounds::<i64>::from(..).is_unbounded());
    }

    #[test]
    fn display_shows_open_sides() {
        assert_eq!(Bounds::between(1, 2).to_string(), "[1, 2]");
        assert_eq!(Bounds::at_least(1).to_string(), "[1, ..)");
        assert_eq!(Bounds::<u8>::none().to_string(), "(..)");
    }

    #[test]
    fn deserializes_partial_bounds() {
        let b: Bounds<usize> = serde_json::from_str(r#"{"max": 400}"#).unwrap();
        assert_eq!(b, Bounds::at_most(400));
    }
}
