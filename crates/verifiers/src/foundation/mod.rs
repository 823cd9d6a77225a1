//! Core validation types and traits
//!
//! This module contains the building blocks shared by every validator:
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`], [`ValidationResult`]
//! - **Constraints**: [`Bounds`], [`BoundViolation`]
//!
//! # Examples
//!
//! ```
//! use verifiers::foundation::{Bounds, Validate};
//! use verifiers::validators::IntValidator;
//!
//! let age = IntValidator::new().bounds(Bounds::between(18, 100));
//! assert_eq!(age.validate_any("42").unwrap(), 42);
//! assert!(age.validate_any("17").is_err());
//! ```

pub mod bounds;
pub mod error;
pub mod traits;
pub mod validatable;

pub use bounds::{BoundViolation, Bounds};
pub use error::{ValidationError, ValidationResult};
pub use traits::Validate;
pub use validatable::AsValidatable;
