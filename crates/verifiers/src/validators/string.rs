//! Plain and whitespace-trimmed string validators
//!
//! Input must already be text: a JSON number is rejected rather than
//! stringified. Length is measured in bytes by default; use
//! [`StringValidator::chars`] to count Unicode scalar values instead.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{BoundViolation, Bounds, Validate, ValidationError};

// Runs that need rewriting: two or more whitespace chars, or any single
// whitespace char that is not a plain space.
static WHITESPACE_RUN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"[ \t\n\r\x0B\x0C]{2,}|[\t\n\r\x0B\x0C]").expect("whitespace pattern is valid")
});

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

/// Strips edge whitespace and collapses inner runs into a single space.
///
/// Only ASCII whitespace is touched; a leading or trailing NUL is stripped too.
pub(crate) fn collapse_whitespace(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_matches(|c: char| {
        matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' | '\0')
    });
    WHITESPACE_RUN.replace_all(trimmed, " ")
}

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Validates that a value is text within optional length bounds.
///
/// Returns the text unchanged.
///
/// # Examples
///
/// ```
/// use verifiers::foundation::Validate;
/// use verifiers::validators::StringValidator;
///
/// let v = StringValidator::new().min(3).max(10);
/// assert_eq!(v.validate("hello").unwrap(), "hello");
/// assert!(v.validate("hi").is_err());
///
/// // "é" is two bytes but one char
/// assert!(StringValidator::new().max(1).validate("é").is_err());
/// assert!(StringValidator::new().max(1).chars().validate("é").is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StringValidator {
    bounds: Bounds<usize>,
    mode: LengthMode,
}

impl StringValidator {
    /// Creates a string validator with no length bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bounds: Bounds::none(),
            mode: LengthMode::Bytes,
        }
    }

    /// Sets the minimum length (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub const fn min(mut self, min: usize) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the maximum length (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub const fn max(mut self, max: usize) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Replaces both length bounds.
    #[must_use = "builder methods must be chained or built"]
    pub const fn bounds(mut self, bounds: Bounds<usize>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Counts Unicode scalar values instead of bytes.
    #[must_use = "builder methods must be chained or built"]
    pub const fn chars(mut self) -> Self {
        self.mode = LengthMode::Chars;
        self
    }

    /// Sets the length counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub const fn mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Checks only the length bounds.
    pub fn check_length(&self, input: &str) -> Result<(), ValidationError> {
        let actual = self.mode.measure(input);
        match self.bounds.violation(&actual) {
            None => Ok(()),
            Some(BoundViolation::Below(min)) => {
                tracing::trace!(min, actual, "string too short");
                Err(ValidationError::TooShort { min, actual })
            }
            Some(BoundViolation::Above(max)) => {
                tracing::trace!(max, actual, "string too long");
                Err(ValidationError::TooLong { max, actual })
            }
        }
    }
}

impl From<Bounds<usize>> for StringValidator {
    fn from(bounds: Bounds<usize>) -> Self {
        Self::new().bounds(bounds)
    }
}

impl Validate for StringValidator {
    type Input = str;
    type Normalized = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        self.check_length(input)?;
        Ok(input.to_owned())
    }
}

// ============================================================================
// TRIMMED STRING VALIDATOR
// ============================================================================

/// Collapses whitespace, then applies a [`StringValidator`] to the result.
///
/// # Examples
///
/// ```
/// use verifiers::foundation::Validate;
/// use verifiers::validators::{StringValidator, TrimmedStringValidator};
///
/// let v = TrimmedStringValidator::new(StringValidator::new().min(1).max(10));
/// assert_eq!(v.validate("  a \t  b\n").unwrap(), "a b");
/// assert!(v.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TrimmedStringValidator {
    inner: StringValidator,
}

impl TrimmedStringValidator {
    /// Wraps a plain string validator; its bounds apply to the cleaned text.
    #[must_use]
    pub const fn new(inner: StringValidator) -> Self {
        Self { inner }
    }
}

impl From<Bounds<usize>> for TrimmedStringValidator {
    fn from(bounds: Bounds<usize>) -> Self {
        Self::new(StringValidator::from(bounds))
    }
}

impl Validate for TrimmedStringValidator {
    type Input = str;
    type Normalized = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        self.inner.validate(&collapse_whitespace(input))
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Validates that `value` is text within `bounds` (byte length).
pub fn validate_string(
    value: &Value,
    bounds: impl Into<Bounds<usize>>,
) -> Result<String, ValidationError> {
    StringValidator::from(bounds.into()).validate_any(value)
}

/// Collapses whitespace in `value` and validates the result within `bounds`.
pub fn validate_trimmed_string(
    value: &Value,
    bounds: impl Into<Bounds<usize>>,
) -> Result<String, ValidationError> {
    TrimmedStringValidator::from(bounds.into()).validate_any(value)
}

// ============================================================================
// TESTS
// ============================================================================
