//! # verifiers
//!
//! Validate-and-normalize helpers for user-supplied input. Every check hands
//! back the canonical form of the value it accepted.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use verifiers::prelude::*;
//!
//! assert_eq!(validate_int(&json!("42"), 1..=100), Ok(42));
//! assert_eq!(
//!     validate_trimmed_string(&json!("  a   b  "), 1..=10).unwrap(),
//!     "a b"
//! );
//! assert_eq!(normalize_string(&json!("Él Niño"), true), "EL NINO");
//! assert!(validate_email(&json!("a@b.com"), Some("b.com")));
//! assert_eq!(
//!     validate_date(&json!("25/12/2024 10:30:00")).unwrap(),
//!     "2024-12-25 10:30:00"
//! );
//! ```
//!
//! ## Validators
//!
//! - **Numeric**: [`IntValidator`](validators::IntValidator),
//!   [`FloatValidator`](validators::FloatValidator)
//! - **Text**: [`StringValidator`](validators::StringValidator),
//!   [`TrimmedStringValidator`](validators::TrimmedStringValidator),
//!   [`Normalizer`](validators::Normalizer)
//! - **Formats**: [`EmailValidator`](validators::EmailValidator),
//!   [`DateValidator`](validators::DateValidator)
//!
//! All validators are stateless and `Send + Sync`. The lookup tables and
//! regexes behind them are built once per process.

pub mod foundation;
pub mod prelude;
pub mod validators;
