//! Email address validator with an optional exact-domain check.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};
use crate::validators::string::StringValidator;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Longest accepted address, in bytes.
pub const MAX_EMAIL_LENGTH: usize = 400;

/// Validates email shape and, optionally, that the domain matches exactly.
///
/// The domain comparison is case-sensitive string equality on everything
/// after the `@`; subdomains do not match their parent.
///
/// # Examples
///
/// ```
/// use verifiers::foundation::Validate;
/// use verifiers::validators::EmailValidator;
///
/// assert!(EmailValidator::new().is_valid("a@b.com"));
/// assert!(EmailValidator::new().domain("b.com").is_valid("a@b.com"));
/// assert!(!EmailValidator::new().domain("c.com").is_valid("a@b.com"));
/// assert!(!EmailValidator::new().is_valid("not-an-email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EmailValidator {
    domain: Option<String>,
}

impl EmailValidator {
    /// Creates a validator that accepts any domain.
    #[must_use]
    pub const fn new() -> Self {
        Self { domain: None }
    }

    /// Requires the part after `@` to equal `domain`.
    ///
    /// An empty domain disables the check.
    #[must_use = "builder methods must be chained or built"]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.domain = (!domain.is_empty()).then_some(domain);
        self
    }
}

impl Validate for EmailValidator {
    type Input = str;
    type Normalized = ();

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        StringValidator::new()
            .min(1)
            .max(MAX_EMAIL_LENGTH)
            .validate(input)?;

        if !EMAIL_REGEX.is_match(input) {
            tracing::trace!(validator = self.name(), input, "email shape rejected");
            return Err(ValidationError::invalid_format("email", input));
        }

        if let Some(expected) = &self.domain {
            let Some((_, actual)) = input.split_once('@') else {
                return Err(ValidationError::invalid_format("email", input));
            };
            if actual != expected {
                tracing::trace!(
                    validator = self.name(),
                    expected = %expected,
                    actual,
                    "email domain rejected"
                );
                return Err(ValidationError::DomainMismatch {
                    expected: expected.clone(),
                    actual: actual.to_owned(),
                });
            }
        }

        Ok(())
    }
}

/// Returns `true` when `value` is a well-formed address (in `domain`, if given).
pub fn validate_email(value: &Value, domain: Option<&str>) -> bool {
    let validator = match domain {
        Some(domain) => EmailValidator::new().domain(domain),
        None => EmailValidator::new(),
    };
    validator.validate_any(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_common_addresses() {
        for email in ["a@b.com", "first.last+tag@sub.example.org", "x_y%z@host-1.io"] {
            assert!(validate_email(&json!(email), None), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "not-an-email", "@b.com", "a@", "a@b", "a@b.c", "a b@c.com", "a@b.c0m"] {
            assert!(!validate_email(&json!(email), None), "{email}");
        }
    }

    #[test]
    fn rejects_non_text() {
        assert!(!validate_email(&json!(42), None));
        assert!(!validate_email(&Value::Null, None));
    }

    #[test]
    fn rejects_overlong_addresses() {
        let local = "a".repeat(MAX_EMAIL_LENGTH);
        let err = EmailValidator::new()
            .validate(&format!("{local}@b.com"))
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 400, .. }));
    }

    #[test]
    fn domain_match_is_exact() {
        assert!(validate_email(&json!("a@b.com"), Some("b.com")));
        assert!(!validate_email(&json!("a@b.com"), Some("c.com")));
        assert!(!validate_email(&json!("a@B.com"), Some("b.com")));
        assert!(!validate_email(&json!("a@sub.b.com"), Some("b.com")));
    }

    #[test]
    fn trailing_newline_is_rejected() {
        assert!(!validate_email(&json!("a@b.com\n"), None));
        assert!(!validate_email(&json!("a@b.com\n"), Some("b.com")));
    }

    #[test]
    fn empty_domain_is_ignored() {
        assert!(validate_email(&json!("a@b.com"), Some("")));
    }

    #[test]
    fn domain_mismatch_reports_both_sides() {
        let err = EmailValidator::new()
            .domain("c.com")
            .validate("a@b.com")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DomainMismatch {
                expected: "c.com".into(),
                actual: "b.com".into()
            }
        );
    }
}
