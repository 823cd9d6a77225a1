//! Prelude module for convenient imports.
//!
//! ```
//! use verifiers::prelude::*;
//! use serde_json::json;
//!
//! assert_eq!(validate_int(&json!("42"), 1..=100), Ok(42));
//! assert_eq!(validate_date(&json!("25-12-2024")).unwrap(), "2024-12-25");
//! ```

pub use crate::foundation::{
    AsValidatable, BoundViolation, Bounds, Validate, ValidationError, ValidationResult,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
