//! Core traits for the validation system
//!
//! Unlike a pure checker, every validator in this crate verifies and
//! normalizes in one step: a successful call hands back the canonical form
//! of the input.

use std::borrow::Borrow;

use crate::foundation::ValidationError;
use crate::foundation::validatable::AsValidatable;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// # Examples
///
/// ```
/// use verifiers::foundation::{Validate, ValidationError};
///
/// struct NonBlank;
///
/// impl Validate for NonBlank {
///     type Input = str;
///     type Normalized = String;
///
///     fn validate(&self, input: &str) -> Result<String, ValidationError> {
///         let trimmed = input.trim();
///         if trimmed.is_empty() {
///             Err(ValidationError::Empty)
///         } else {
///             Ok(trimmed.to_owned())
///         }
///     }
/// }
///
/// assert_eq!(NonBlank.validate("  hi ").unwrap(), "hi");
/// assert!(NonBlank.validate("   ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so validators can take `str` directly.
    type Input: ?Sized;

    /// The canonical value returned on success.
    type Normalized;

    /// Validates the input and returns its normalized form.
    fn validate(&self, input: &Self::Input) -> Result<Self::Normalized, ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// A single validator can accept `&str`, `String`, or a
    /// `serde_json::Value` without explicit conversion by the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use verifiers::foundation::Validate;
    /// use verifiers::validators::StringValidator;
    ///
    /// let v = StringValidator::new();
    /// assert!(v.validate_any("hello").is_ok());
    /// assert!(v.validate_any(&json!("hello")).is_ok());
    /// assert!(v.validate_any(&json!(123)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<Self::Normalized, ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }

    /// Returns `true` when the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// Returns the name of this validator.
    ///
    /// Recorded as the `validator` field of rejection trace events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
