//! Integer and float validators
//!
//! Both accept a JSON number or numeric-looking text (surrounding whitespace
//! tolerated, optional sign, decimal point, exponent) and return the native
//! value after an optional inclusive bounds check.

use std::fmt::Display;
use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::validatable::json_type_name;
use crate::foundation::{BoundViolation, Bounds, Validate, ValidationError};

static NUMERIC_TEXT: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$",
    )
    .expect("numeric pattern is valid")
});

/// Returns the trimmed numeric text, or `None` when `text` is not numeric.
///
/// `inf`, `NaN`, hex and empty strings are rejected even though Rust's own
/// float parser accepts some of them.
pub(crate) fn numeric_text(text: &str) -> Option<&str> {
    NUMERIC_TEXT
        .is_match(text)
        .then(|| text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B'))
}

/// Truncates toward zero; out-of-range values saturate at the `i64` limits.
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

fn parse_int(value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::Missing),
        Value::Number(n) => Ok(n
            .as_i64()
            .unwrap_or_else(|| truncate(n.as_f64().unwrap_or_default()))),
        Value::String(s) => {
            let text = numeric_text(s).ok_or_else(|| ValidationError::NotNumeric {
                value: s.clone(),
            })?;
            text.parse::<i64>()
                .or_else(|_| text.parse::<f64>().map(truncate))
                .map_err(|_| ValidationError::NotNumeric { value: s.clone() })
        }
        other => Err(ValidationError::TypeMismatch {
            expected: "number",
            actual: json_type_name(other),
        }),
    }
}

fn parse_float(value: &Value) -> Result<f64, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::Missing),
        Value::Number(n) => n.as_f64().ok_or_else(|| ValidationError::NotNumeric {
            value: n.to_string(),
        }),
        Value::String(s) => numeric_text(s)
            .and_then(|text| text.parse::<f64>().ok())
            .ok_or_else(|| ValidationError::NotNumeric { value: s.clone() }),
        other => Err(ValidationError::TypeMismatch {
            expected: "number",
            actual: json_type_name(other),
        }),
    }
}

fn check_bounds<T>(bounds: &Bounds<T>, value: T) -> Result<T, ValidationError>
where
    T: PartialOrd + Copy + Display,
{
    match bounds.violation(&value) {
        None => Ok(value),
        Some(BoundViolation::Below(min)) => {
            tracing::trace!(%min, actual = %value, "numeric value below minimum");
            Err(ValidationError::below_min(min, value))
        }
        Some(BoundViolation::Above(max)) => {
            tracing::trace!(%max, actual = %value, "numeric value above maximum");
            Err(ValidationError::above_max(max, value))
        }
    }
}

// ============================================================================
// INTEGER
// ============================================================================

/// Validates numeric input and converts it to `i64` by truncation.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verifiers::foundation::Validate;
/// use verifiers::validators::IntValidator;
///
/// let v = IntValidator::new().min(1).max(100);
/// assert_eq!(v.validate(&json!("42")).unwrap(), 42);
/// assert_eq!(v.validate(&json!(" 7.9 ")).unwrap(), 7);
/// assert!(v.validate(&json!("150")).is_err());
/// assert!(v.validate(&json!("abc")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntValidator {
    bounds: Bounds<i64>,
}

impl IntValidator {
    /// Creates an unbounded integer validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bounds: Bounds::none(),
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min(mut self, min: i64) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max(mut self, max: i64) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Replaces both bounds.
    #[must_use = "builder methods must be chained or built"]
    pub const fn bounds(mut self, bounds: Bounds<i64>) -> Self {
        self.bounds = bounds;
        self
    }
}

impl From<Bounds<i64>> for IntValidator {
    fn from(bounds: Bounds<i64>) -> Self {
        Self { bounds }
    }
}

impl Validate for IntValidator {
    type Input = Value;
    type Normalized = i64;

    fn validate(&self, input: &Value) -> Result<i64, ValidationError> {
        let value = parse_int(input).inspect_err(|error| {
            tracing::trace!(validator = self.name(), code = error.code(), "integer rejected");
        })?;
        check_bounds(&self.bounds, value)
    }
}

// ============================================================================
// FLOAT
// ============================================================================

/// Validates numeric input and converts it to `f64`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verifiers::foundation::Validate;
/// use verifiers::validators::FloatValidator;
///
/// let v = FloatValidator::new().max(10.0);
/// assert_eq!(v.validate(&json!("2.5")).unwrap(), 2.5);
/// assert!(v.validate(&json!("10.5")).is_err());
/// assert!(v.validate(&json!("inf")).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatValidator {
    bounds: Bounds<f64>,
}

impl FloatValidator {
    /// Creates an unbounded float validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bounds: Bounds::none(),
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn min(mut self, min: f64) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max(mut self, max: f64) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Replaces both bounds.
    #[must_use = "builder methods must be chained or built"]
    pub const fn bounds(mut self, bounds: Bounds<f64>) -> Self {
        self.bounds = bounds;
        self
    }
}

impl From<Bounds<f64>> for FloatValidator {
    fn from(bounds: Bounds<f64>) -> Self {
        Self { bounds }
    }
}

impl Validate for FloatValidator {
    type Input = Value;
    type Normalized = f64;

    fn validate(&self, input: &Value) -> Result<f64, ValidationError> {
        let value = parse_float(input).inspect_err(|error| {
            tracing::trace!(validator = self.name(), code = error.code(), "float rejected");
        })?;
        check_bounds(&self.bounds, value)
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Validates `value` as an integer within `bounds`, truncating any fraction.
pub fn validate_int(value: &Value, bounds: impl Into<Bounds<i64>>) -> Result<i64, ValidationError> {
    IntValidator::from(bounds.into()).validate(value)
}

/// Validates `value` as a float within `bounds`.
pub fn validate_float(
    value: &Value,
    bounds: impl Into<Bounds<f64>>,
) -> Result<f64, ValidationError> {
    FloatValidator::from(bounds.into()).validate(value)
}

// ============================================================================
// TESTS
// ============================================================================
