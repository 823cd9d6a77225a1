//! Free-form date normalization
//!
//! Accepts day-first dates written with `-`, `/` or space separators, with
//! month names in Spanish or English, and an optional `HH:MM:SS` time:
//!
//! | Input                      | Output                |
//! |----------------------------|-----------------------|
//! | `25-12-2024`               | `2024-12-25`          |
//! | `25/12/2024 10:30:00`      | `2024-12-25 10:30:00` |
//! | `25 de diciembre de 2024`  | `2024-12-25`          |
//! | `25 December 2024`         | `2024-12-25`          |
//!
//! The pipeline is a fixed sequence of linear passes: normalize the text,
//! replace month names with their two-digit number, find the first
//! `DD?MM?YYYY[ HH:MM:SS]` occurrence, and reorder it year first.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{Validate, ValidationError};
use crate::validators::normalize::Normalizer;

/// Uppercase month names and their two-digit numbers.
///
/// `OCTUBE` is a historical misspelling kept so stored inputs that relied on
/// it still parse; `OCTUBRE` is the correct spelling.
const MONTH_TABLE: &[(&str, &str)] = &[
    ("ENERO", "01"),
    ("FEBRERO", "02"),
    ("MARZO", "03"),
    ("ABRIL", "04"),
    ("MAYO", "05"),
    ("JUNIO", "06"),
    ("JULIO", "07"),
    ("AGOSTO", "08"),
    ("SEPTIEMBRE", "09"),
    ("OCTUBE", "10"),
    ("OCTUBRE", "10"),
    ("NOVIEMBRE", "11"),
    ("DICIEMBRE", "12"),
    ("JANUARY", "01"),
    ("FEBRUARY", "02"),
    ("MARCH", "03"),
    ("APRIL", "04"),
    ("MAY", "05"),
    ("JUNE", "06"),
    ("JULY", "07"),
    ("AUGUST", "08"),
    ("SEPTEMBER", "09"),
    ("OCTOBER", "10"),
    ("NOVEMBER", "11"),
    ("DECEMBER", "12"),
];

static MONTHS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| MONTH_TABLE.iter().copied().collect());

// Longest names first so `MAYO` wins over `MAY` at the same position.
static MONTH_NAMES: LazyLock<regex::Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = MONTH_TABLE.iter().map(|(name, _)| *name).collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    regex::Regex::new(&names.join("|")).expect("month names form a valid pattern")
});

// Connector words between day, month and year: "25 DE 12 DE 2024".
static FILLER_WORDS: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"([0-9]) (?:DE|DEL|OF) ").expect("filler pattern is valid")
});

static DAY_FIRST_DATE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"([0-9]{2})[-/ ]([0-9]{2})[-/ ]([0-9]{4})(?:[ \t\n\r]+([0-9]{2}):([0-9]{2}):([0-9]{2}))?",
    )
    .expect("date pattern is valid")
});

// ============================================================================
// PIPELINE
// ============================================================================

/// Date fields captured positionally: day, month, year, then optional time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts<'a> {
    day: &'a str,
    month: &'a str,
    year: &'a str,
    time: Option<(&'a str, &'a str, &'a str)>,
}

impl fmt::Display for DateParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)?;
        if let Some((hour, minute, second)) = self.time {
            write!(f, " {hour}:{minute}:{second}")?;
        }
        Ok(())
    }
}

/// Uppercase-normalizes `input` and replaces month names with numbers.
///
/// Slashes are turned into hyphens first; the normalizer would otherwise
/// delete them and glue `25/12/2024` into `25122024`.
fn prepare(input: &str) -> String {
    let normalized = Normalizer::new()
        .uppercase()
        .validate(&input.replace('/', "-"))
        .unwrap_or_default();
    MONTH_NAMES
        .replace_all(&normalized, |caps: &regex::Captures<'_>| {
            MONTHS.get(&caps[0]).copied().unwrap_or_default()
        })
        .into_owned()
}

/// Copy of `prepared` with connector words after a number removed.
///
/// Only the date search sees this copy; passthrough output keeps the words.
fn searchable(prepared: &str) -> String {
    FILLER_WORDS.replace_all(prepared, "$1 ").into_owned()
}

fn find_parts(prepared: &str) -> Option<DateParts<'_>> {
    let caps = DAY_FIRST_DATE.captures(prepared)?;
    let group = |i: usize| caps.get(i).map(|m| m.as_str());
    let time = match (group(4), group(5), group(6)) {
        (Some(hour), Some(minute), Some(second)) => Some((hour, minute, second)),
        _ => None,
    };
    Some(DateParts {
        day: group(1)?,
        month: group(2)?,
        year: group(3)?,
        time,
    })
}

// ============================================================================
// CANONICAL DATE
// ============================================================================

/// A calendar-checked date with an optional time of day.
///
/// Displays in canonical form: `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDate {
    /// Calendar date.
    pub date: NaiveDate,
    /// Time of day, when the input carried one.
    pub time: Option<NaiveTime>,
}

impl CanonicalDate {
    fn from_parts(parts: &DateParts<'_>) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(
            parts.year.parse().ok()?,
            parts.month.parse().ok()?,
            parts.day.parse().ok()?,
        )?;
        let time = match parts.time {
            Some((hour, minute, second)) => Some(NaiveTime::from_hms_opt(
                hour.parse().ok()?,
                minute.parse().ok()?,
                second.parse().ok()?,
            )?),
            None => None,
        };
        Some(Self { date, time })
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )?;
        if let Some(time) = self.time {
            write!(
                f,
                " {:02}:{:02}:{:02}",
                time.hour(),
                time.minute(),
                time.second()
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// How much a [`DateValidator`] insists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateMode {
    /// Never fails: text without a recognisable date is returned normalized.
    Passthrough,
    /// Fails when no day-first date is found. Day and month are not range-checked.
    #[default]
    Pattern,
    /// Like `Pattern`, and the result must be a real calendar date and time.
    Strict,
}

/// Normalizes free-form day-first dates to `YYYY-MM-DD[ HH:MM:SS]`.
///
/// # Examples
///
/// ```
/// use verifiers::foundation::Validate;
/// use verifiers::validators::DateValidator;
///
/// let v = DateValidator::new();
/// assert_eq!(v.validate("25 DICIEMBRE 2024").unwrap(), "2024-12-25");
/// assert_eq!(v.validate("25/12/2024 10:30:00").unwrap(), "2024-12-25 10:30:00");
/// assert!(v.validate("not a date").is_err());
///
/// // Shape alone is enough unless the validator is strict
/// assert_eq!(v.validate("31-02-2024").unwrap(), "2024-02-31");
/// assert!(DateValidator::strict().validate("31-02-2024").is_err());
///
/// assert_eq!(DateValidator::passthrough().validate("not a date").unwrap(), "NOT A DATE");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateValidator {
    mode: DateMode,
}

impl DateValidator {
    /// Creates a validator in [`DateMode::Pattern`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: DateMode::Pattern,
        }
    }

    /// Creates a validator in [`DateMode::Passthrough`].
    #[must_use]
    pub const fn passthrough() -> Self {
        Self {
            mode: DateMode::Passthrough,
        }
    }

    /// Creates a validator in [`DateMode::Strict`].
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            mode: DateMode::Strict,
        }
    }

    /// Sets the mode.
    #[must_use = "builder methods must be chained or built"]
    pub const fn mode(mut self, mode: DateMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parses `input` into a calendar-checked [`CanonicalDate`].
    ///
    /// Always applies the strict calendar check, whatever the mode.
    ///
    /// ```
    /// use verifiers::validators::DateValidator;
    ///
    /// let parsed = DateValidator::new().parse("1 de marzo de 2024 08:00:00");
    /// assert!(parsed.is_err()); // single-digit day
    ///
    /// let parsed = DateValidator::new().parse("01 de marzo de 2024 08:00:00").unwrap();
    /// assert_eq!(parsed.to_string(), "2024-03-01 08:00:00");
    /// ```
    pub fn parse(&self, input: &str) -> Result<CanonicalDate, ValidationError> {
        let prepared = prepare(input);
        let searched = searchable(&prepared);
        let parts = find_parts(&searched).ok_or_else(|| {
            tracing::trace!(prepared = %prepared, "no day-first date found");
            ValidationError::invalid_format("date", prepared.clone())
        })?;
        CanonicalDate::from_parts(&parts).ok_or_else(|| {
            tracing::trace!(date = %parts, "date is not on the calendar");
            ValidationError::InvalidCalendar {
                value: parts.to_string(),
            }
        })
    }
}

impl Validate for DateValidator {
    type Input = str;
    type Normalized = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        if self.mode == DateMode::Strict {
            return self.parse(input).map(|date| date.to_string());
        }

        let prepared = prepare(input);
        let searched = searchable(&prepared);
        match find_parts(&searched) {
            Some(parts) => {
                let reordered = parts.to_string();
                tracing::trace!(input, output = %reordered, "date reordered");
                Ok(reordered)
            }
            None if self.mode == DateMode::Passthrough => {
                tracing::trace!(input, output = %prepared, "date passed through");
                Ok(prepared)
            }
            None => {
                tracing::trace!(
                    validator = self.name(),
                    prepared = %prepared,
                    "no day-first date found"
                );
                Err(ValidationError::invalid_format("date", prepared))
            }
        }
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Normalizes `value` to a canonical date, failing when no date is found.
pub fn validate_date(value: &Value) -> Result<String, ValidationError> {
    DateValidator::new().validate_any(value)
}

/// Normalizes `value` to a canonical date, or returns the normalized text
/// unchanged when no date is found. Non-text yields an empty string.
pub fn normalize_date(value: &Value) -> String {
    DateValidator::passthrough()
        .validate_any(value)
        .unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn month_names_become_numbers() {
        assert_eq!(prepare("25 diciembre 2024"), "25 12 2024");
        assert_eq!(prepare("1 January"), "1 01");
    }

    #[test]
    fn longer_month_name_wins() {
        assert_eq!(prepare("mayo"), "05");
        assert_eq!(prepare("may"), "05");
        assert_eq!(prepare("septiembre september"), "09 09");
    }

    #[test]
    fn both_october_spellings_map() {
        assert_eq!(prepare("octube"), "10");
        assert_eq!(prepare("octubre"), "10");
    }

    #[test]
    fn slash_dates_survive_normalization() {
        assert_eq!(prepare("25/12/2024"), "25-12-2024");
    }

    #[test]
    fn reorders_numeric_dates() {
        assert_eq!(validate_date(&json!("25-12-2024")).unwrap(), "2024-12-25");
        assert_eq!(validate_date(&json!("25 12 2024")).unwrap(), "2024-12-25");
        assert_eq!(validate_date(&json!("25-12 2024")).unwrap(), "2024-12-25");
    }

    #[test]
    fn keeps_time_component() {
        assert_eq!(
            validate_date(&json!("25/12/2024   10:30:00")).unwrap(),
            "2024-12-25 10:30:00"
        );
    }

    #[test]
    fn partial_time_is_ignored() {
        assert_eq!(
            validate_date(&json!("25-12-2024 10:30")).unwrap(),
            "2024-12-25"
        );
    }

    #[test]
    fn connector_words_are_dropped() {
        assert_eq!(prepare("25 de diciembre de 2024"), "25 DE 12 DE 2024");
        assert_eq!(searchable(&prepare("25 de diciembre de 2024")), "25 12 2024");
        assert_eq!(searchable(&prepare("05 of may 2023")), "05 05 2023");
        assert_eq!(searchable(&prepare("25th of December")), "25TH OF 12");
        assert_eq!(
            validate_date(&json!("25 de diciembre de 2024")).unwrap(),
            "2024-12-25"
        );
    }

    #[test]
    fn surrounding_text_is_dropped() {
        assert_eq!(
            validate_date(&json!("Fecha: 05 05 2023, fin")).unwrap(),
            "2023-05-05"
        );
        assert_eq!(
            validate_date(&json!("Madrid, 5 de... no: 05 de mayo de 2023")).unwrap(),
            "2023-05-05"
        );
    }

    #[test]
    fn single_digit_day_is_not_a_date() {
        assert_eq!(
            validate_date(&json!("5 de mayo de 2023")),
            Err(ValidationError::invalid_format("date", "5 DE 05 DE 2023"))
        );
    }

    #[test]
    fn passthrough_keeps_connector_words() {
        assert_eq!(normalize_date(&json!("Capitulo 3 of 10")), "CAPITULO 3 OF 10");
        assert_eq!(normalize_date(&json!("Calle 5 de Mayo")), "CALLE 5 DE 05");
        assert_eq!(normalize_date(&json!("25 de 12 de 2024")), "2024-12-25");
    }

    #[test]
    fn day_first_is_positional() {
        // No range check outside strict mode
        assert_eq!(validate_date(&json!("12-25-2024")).unwrap(), "2024-25-12");
    }

    #[test]
    fn passthrough_returns_normalized_text() {
        assert_eq!(normalize_date(&json!("not a date")), "NOT A DATE");
        assert_eq!(normalize_date(&json!("25-12-2024")), "2024-12-25");
        assert_eq!(normalize_date(&json!(20241225)), "");
    }

    #[test]
    fn strict_checks_calendar() {
        let strict = DateValidator::strict();
        assert_eq!(strict.validate("29-02-2024").unwrap(), "2024-02-29");
        assert!(matches!(
            strict.validate("29-02-2023"),
            Err(ValidationError::InvalidCalendar { .. })
        ));
        assert!(strict.validate("25-12-2024 24:00:00").is_err());
        assert_eq!(
            strict.validate("25-12-2024 23:59:59").unwrap(),
            "2024-12-25 23:59:59"
        );
    }

    #[test]
    fn parse_returns_typed_date() {
        let parsed = DateValidator::new().parse("25 december 2024").unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(parsed.time, None);
    }

    #[test]
    fn mode_deserializes_from_config() {
        let mode: DateMode = serde_json::from_str(r#""strict""#).unwrap();
        assert_eq!(DateValidator::new().mode(mode), DateValidator::strict());
    }
}
