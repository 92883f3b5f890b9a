//! # Error Types
//!
//! Validation error types for stocktake-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stocktake-core errors (this file)                                      │
//! │  ├── ValidationError    - A single field failed a rule                  │
//! │  └── ProductFormErrors  - Per-field results of a whole-form check       │
//! │                                                                         │
//! │  The store itself has NO error type: "not found" on update/delete is    │
//! │  a silent no-op, and lookups return Option. The only failures in the    │
//! │  system happen at the input-validation boundary, before any mutation.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the field name in every error message
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw user input doesn't meet the field rules.
/// They are raised before any store operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    /// A required field is missing, empty, or whitespace-only.
    #[error("{field} is required")]
    Required { field: String },

    /// Text input does not parse as a number of the expected kind.
    #[error("{field} must be a valid number")]
    InvalidNumber { field: String },

    /// Value parsed but must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

impl ValidationError {
    /// Creates a `Required` error for the given field.
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }

    /// Creates an `InvalidNumber` error for the given field.
    pub fn invalid_number(field: &str) -> Self {
        ValidationError::InvalidNumber {
            field: field.to_string(),
        }
    }

    /// Creates a `MustBePositive` error for the given field.
    pub fn must_be_positive(field: &str) -> Self {
        ValidationError::MustBePositive {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Product Form Errors
// =============================================================================

/// The collected result of validating a whole product form.
///
/// One slot per validated field. All field checks are evaluated
/// independently (never short-circuited), so a caller can surface every
/// violation at once - e.g. highlight the name, quantity, and price inputs
/// in the same pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductFormErrors {
    /// Name check result (`None` = passed).
    pub name: Option<ValidationError>,

    /// Quantity check result (`None` = passed).
    pub quantity: Option<ValidationError>,

    /// Price check result (`None` = passed).
    pub price: Option<ValidationError>,
}

impl ProductFormErrors {
    /// Returns `true` when every field passed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.price.is_none()
    }

    /// Number of fields that failed.
    pub fn len(&self) -> usize {
        [&self.name, &self.quantity, &self.price]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Joins the individual field messages, e.g.
/// `"name is required; quantity must be a valid number"`.
impl fmt::Display for ProductFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in [&self.name, &self.quantity, &self.price]
            .into_iter()
            .flatten()
        {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ProductFormErrors {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::invalid_number("quantity");
        assert_eq!(err.to_string(), "quantity must be a valid number");

        let err = ValidationError::must_be_positive("price");
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_form_errors_empty_by_default() {
        let errors = ProductFormErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.to_string(), "");
    }

    #[test]
    fn test_form_errors_display_joins_fields() {
        let errors = ProductFormErrors {
            name: Some(ValidationError::required("name")),
            quantity: Some(ValidationError::invalid_number("quantity")),
            price: None,
        };
        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "name is required; quantity must be a valid number"
        );
    }
}
