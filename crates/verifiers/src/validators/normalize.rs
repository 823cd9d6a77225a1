//! Plain-ASCII string normalization
//!
//! Collapses whitespace, folds accented Latin letters to ASCII (`ß` expands
//! to `ss`), drops everything outside `[A-Za-z0-9- :]` and applies a case
//! transform. The result is idempotent: normalizing twice changes nothing.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{Validate, ValidationError};
use crate::validators::string::{TrimmedStringValidator, collapse_whitespace};

const SUBSTITUTION_TABLE: &[(char, &str)] = &[
    ('á', "a"),
    ('Á', "A"),
    ('é', "e"),
    ('É', "E"),
    ('í', "i"),
    ('Í', "I"),
    ('ó', "o"),
    ('Ó', "O"),
    ('ú', "u"),
    ('Ú', "U"),
    ('ñ', "n"),
    ('Ñ', "N"),
    ('ä', "a"),
    ('Ä', "A"),
    ('ë', "e"),
    ('Ë', "E"),
    ('ï', "i"),
    ('Ï', "I"),
    ('ö', "o"),
    ('Ö', "O"),
    ('ü', "u"),
    ('Ü', "U"),
    ('ç', "c"),
    ('Ç', "C"),
    ('ß', "ss"),
];

static SUBSTITUTIONS: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| SUBSTITUTION_TABLE.iter().copied().collect());

/// Replaces accented characters using the substitution table.
fn fold_accents(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match SUBSTITUTIONS.get(&c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

#[inline]
fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | ' ')
}

/// Output letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterCase {
    /// ASCII lowercase.
    #[default]
    Lower,
    /// ASCII uppercase.
    Upper,
}

/// Normalizes text to single-spaced plain ASCII.
///
/// Fails with [`ValidationError::Empty`] when nothing is left; the
/// [`normalize_string`] wrapper turns that into an empty string.
///
/// # Examples
///
/// ```
/// use verifiers::foundation::Validate;
/// use verifiers::validators::Normalizer;
///
/// let upper = Normalizer::new().uppercase();
/// assert_eq!(upper.validate("Él Niño").unwrap(), "EL NINO");
/// assert_eq!(Normalizer::new().validate("café #1").unwrap(), "cafe 1");
/// assert!(Normalizer::new().validate(" ¿? ").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Normalizer {
    case: LetterCase,
}

impl Normalizer {
    /// Creates a lowercasing normalizer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case: LetterCase::Lower,
        }
    }

    /// Produces uppercase output.
    #[must_use = "builder methods must be chained or built"]
    pub const fn uppercase(mut self) -> Self {
        self.case = LetterCase::Upper;
        self
    }

    /// Sets the output case.
    #[must_use = "builder methods must be chained or built"]
    pub const fn case(mut self, case: LetterCase) -> Self {
        self.case = case;
        self
    }
}

impl Validate for Normalizer {
    type Input = str;
    type Normalized = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        let trimmed = TrimmedStringValidator::default().validate(input)?;

        let mut folded = fold_accents(&trimmed);
        folded.retain(is_kept);

        // Dropped characters can leave doubled or edge spaces behind.
        let mut out = collapse_whitespace(&folded).into_owned();
        match self.case {
            LetterCase::Lower => out.make_ascii_lowercase(),
            LetterCase::Upper => out.make_ascii_uppercase(),
        }

        if out.is_empty() {
            tracing::trace!(input, "nothing left after normalization");
            return Err(ValidationError::Empty);
        }
        Ok(out)
    }
}

/// Normalizes `value`, returning an empty string when it cannot be normalized.
///
/// An empty result is ambiguous on purpose: callers that need to tell
/// "unusable input" apart should use [`try_normalize_string`].
pub fn normalize_string(value: &Value, uppercase: bool) -> String {
    try_normalize_string(value, uppercase).unwrap_or_default()
}

/// Normalizes `value`, failing when it is not text or nothing is left.
pub fn try_normalize_string(value: &Value, uppercase: bool) -> Result<String, ValidationError> {
    let case = if uppercase {
        LetterCase::Upper
    } else {
        LetterCase::Lower
    };
    Normalizer::new().case(case).validate_any(value)
}
