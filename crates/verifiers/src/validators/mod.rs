//! Built-in validators
//!
//! Each validator verifies a raw value and returns its canonical form in the
//! same step. The free functions are thin wrappers over the structs with
//! default settings.
//!
//! # Dependency order
//!
//! - [`numeric`]: integers and floats
//! - [`string`]: plain text, then whitespace-trimmed text on top of it
//! - [`normalize`]: plain-ASCII folding on top of trimmed text
//! - [`email`]: address shape on top of plain text
//! - [`date`]: day-first dates on top of normalization

pub mod date;
pub mod email;
pub mod normalize;
pub mod numeric;
pub mod string;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use date::{CanonicalDate, DateMode, DateValidator, normalize_date, validate_date};
pub use email::{EmailValidator, MAX_EMAIL_LENGTH, validate_email};
pub use normalize::{LetterCase, Normalizer, normalize_string, try_normalize_string};
pub use numeric::{FloatValidator, IntValidator, validate_float, validate_int};
pub use string::{
    LengthMode, StringValidator, TrimmedStringValidator, validate_string,
    validate_trimmed_string,
};
