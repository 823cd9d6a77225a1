//! Error type for validation failures
//!
//! Every validator in this crate either hands back the normalized value or a
//! [`ValidationError`]. Callers that only care about the binary outcome can
//! use `is_ok()` / `ok()`; the variant is there for diagnostics and logs.

use std::fmt::Display;

/// Why a candidate value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No value was supplied (JSON `null`).
    #[error("value is required")]
    Missing,

    /// The value has the wrong dynamic type (e.g. a number where text is expected).
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Text that does not look like a number.
    #[error("`{value}` is not numeric")]
    NotNumeric { value: String },

    /// Numeric value below the lower bound.
    #[error("value {actual} is below the minimum {min}")]
    BelowMin { min: String, actual: String },

    /// Numeric value above the upper bound.
    #[error("value {actual} is above the maximum {max}")]
    AboveMax { max: String, actual: String },

    /// Text shorter than the lower length bound.
    #[error("length {actual} is shorter than {min}")]
    TooShort { min: usize, actual: usize },

    /// Text longer than the upper length bound.
    #[error("length {actual} is longer than {max}")]
    TooLong { max: usize, actual: usize },

    /// Text does not have the expected shape.
    #[error("`{value}` is not a valid {expected}")]
    InvalidFormat {
        expected: &'static str,
        value: String,
    },

    /// Email address belongs to a different domain.
    #[error("domain `{actual}` does not match `{expected}`")]
    DomainMismatch { expected: String, actual: String },

    /// Date has the right shape but is not a real calendar date or time.
    #[error("`{value}` is not a calendar date")]
    InvalidCalendar { value: String },

    /// Nothing was left after normalization.
    #[error("value is empty after normalization")]
    Empty,
}

impl ValidationError {
    /// Builds a [`ValidationError::BelowMin`] from any displayable bound.
    pub fn below_min(min: impl Display, actual: impl Display) -> Self {
        Self::BelowMin {
            min: min.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Builds a [`ValidationError::AboveMax`] from any displayable bound.
    pub fn above_max(max: impl Display, actual: impl Display) -> Self {
        Self::AboveMax {
            max: max.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Builds a [`ValidationError::InvalidFormat`].
    pub fn invalid_format(expected: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            expected,
            value: value.into(),
        }
    }

    /// Broad error category for grouping in logs and metrics.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Missing | Self::Empty => "presence",
            Self::TypeMismatch { .. } | Self::NotNumeric { .. } => "type",
            Self::BelowMin { .. } | Self::AboveMax { .. } => "range",
            Self::TooShort { .. } | Self::TooLong { .. } => "length",
            Self::InvalidFormat { .. } | Self::InvalidCalendar { .. } => "format",
            Self::DomainMismatch { .. } => "domain",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing => "required",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::NotNumeric { .. } => "not_numeric",
            Self::BelowMin { .. } => "min",
            Self::AboveMax { .. } => "max",
            Self::TooShort { .. } => "min_length",
            Self::TooLong { .. } => "max_length",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::DomainMismatch { .. } => "domain_mismatch",
            Self::InvalidCalendar { .. } => "invalid_calendar",
            Self::Empty => "empty",
        }
    }
}

/// A validation result using [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
