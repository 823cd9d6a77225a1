//! `AsValidatable` trait with GAT for universal input conversion
//!
//! Raw input usually arrives as a `serde_json::Value` decoded from a request,
//! but callers also hold plain `&str`, `String`, or native numbers. This trait
//! lets a single validator accept all of them while keeping the "text must
//! already be text" rule: a JSON number is never silently stringified.

use std::borrow::Borrow;

use serde_json::Value;

use crate::foundation::ValidationError;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses a GAT so the output can be either a borrowed reference or an owned
/// value, unified through [`Borrow`].
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

/// Returns a human-readable type name for a JSON value.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TEXT INPUTS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for Value {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            Value::Null => Err(ValidationError::Missing),
            other => Err(ValidationError::TypeMismatch {
                expected: "string",
                actual: json_type_name(other),
            }),
        }
    }
}

// ============================================================================
// DYNAMIC (SCALAR) INPUTS
// ============================================================================

impl AsValidatable<Value> for Value {
    type Output<'a> = &'a Value;

    #[inline]
    fn as_validatable(&self) -> Result<&Value, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<Value> for str {
    type Output<'a> = Value;

    fn as_validatable(&self) -> Result<Value, ValidationError> {
        Ok(Value::String(self.to_owned()))
    }
}

impl AsValidatable<Value> for String {
    type Output<'a> = Value;

    fn as_validatable(&self) -> Result<Value, ValidationError> {
        Ok(Value::String(self.clone()))
    }
}

macro_rules! scalar_as_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsValidatable<Value> for $ty {
                type Output<'a> = Value;

                #[inline]
                fn as_validatable(&self) -> Result<Value, ValidationError> {
                    Ok(Value::from(*self))
                }
            }
        )*
    };
}

scalar_as_value!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_string_is_text() {
        let value = json!("hello");
        let text: &str = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn json_number_is_not_text() {
        let err = AsValidatable::<str>::as_validatable(&json!(123)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                expected: "string",
                actual: "number"
            }
        );
    }

    #[test]
    fn json_null_is_missing() {
        let err = AsValidatable::<str>::as_validatable(&Value::Null).unwrap_err();
        assert_eq!(err, ValidationError::Missing);
    }

    #[test]
    fn natives_become_json_scalars() {
        let v: Value = AsValidatable::<Value>::as_validatable(&42_i32).unwrap();
        assert_eq!(v, json!(42));
        let v: Value = AsValidatable::<Value>::as_validatable("7").unwrap();
        assert_eq!(v, json!("7"));
    }
}
