//! # Validation Module
//!
//! Input validation for Stocktake.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host UI                                                       │
//! │  ├── Collects raw text from the name/quantity/price inputs             │
//! │  └── Immediate per-field feedback                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Parses quantity/price text                                        │
//! │  ├── Runs ALL field rules (no short-circuit)                           │
//! │  └── Produces a ProductDraft only when every rule passes               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Performs NO validation - it trusts drafts from this boundary      │
//! │                                                                         │
//! │  Validation is all-or-nothing: if any field fails, the store is        │
//! │  never touched.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use stocktake_core::validation::{validate_product_name, validate_quantity};
//!
//! // Validate a name before building a draft
//! validate_product_name("Dell Laptop").unwrap();
//!
//! // Validate an already-parsed quantity
//! validate_quantity(5).unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ProductFormErrors, ValidationError};
use crate::product::ProductDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use stocktake_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Dell Laptop").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::must_be_positive("quantity"));
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be positive (> 0)
/// - `NaN` parses as a float but is rejected here
///
/// ## Example
/// ```rust
/// use stocktake_core::validation::validate_price;
///
/// assert!(validate_price(2.50).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-5.0).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::must_be_positive("price"));
    }

    Ok(())
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw product input, exactly as collected from text fields.
///
/// `quantity` and `price` stay `String` here: parsing them is part of
/// validation, and a parse failure is a field error like any other, not a
/// caller-side panic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    /// Runs every field rule and either returns a ready-to-store draft or
    /// the full set of field errors.
    ///
    /// ## Behavior
    /// - name: rejected when blank or whitespace-only
    /// - quantity: trimmed, must parse as an integer, must be > 0
    /// - price: trimmed, must parse as a number, must be > 0
    ///
    /// All three checks run unconditionally so the caller can flag every
    /// violated field in one pass.
    ///
    /// ## Example
    /// ```rust
    /// use stocktake_core::ProductForm;
    ///
    /// let form = ProductForm {
    ///     name: String::new(),
    ///     description: String::new(),
    ///     category: String::new(),
    ///     quantity: "abc".to_string(),
    ///     price: "-5".to_string(),
    /// };
    ///
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors.len(), 3); // name, quantity, and price all flagged
    /// ```
    pub fn validate(&self) -> Result<ProductDraft, ProductFormErrors> {
        let name_error = validate_product_name(&self.name).err();

        let quantity = self.quantity.trim().parse::<i64>();
        let quantity_error = match &quantity {
            Err(_) => Some(ValidationError::invalid_number("quantity")),
            Ok(q) => validate_quantity(*q).err(),
        };

        let price = self.price.trim().parse::<f64>();
        let price_error = match &price {
            Err(_) => Some(ValidationError::invalid_number("price")),
            Ok(p) => validate_price(*p).err(),
        };

        let errors = ProductFormErrors {
            name: name_error,
            quantity: quantity_error,
            price: price_error,
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        // Both parses succeeded or we would have returned above.
        Ok(ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            quantity: quantity.unwrap_or_default(),
            price: price.unwrap_or_default(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, quantity: &str, price: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            description: "desc".to_string(),
            category: "cat".to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Dell Laptop").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(1200.0).is_ok());

        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-5.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_valid_form_produces_draft() {
        let draft = form("Widget", "10", "2.50").validate().unwrap();

        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.description, "desc");
        assert_eq!(draft.category, "cat");
        assert_eq!(draft.quantity, 10);
        assert_eq!(draft.price, 2.5);
    }

    #[test]
    fn test_numeric_inputs_are_trimmed() {
        let draft = form("Widget", " 10 ", " 2.50 ").validate().unwrap();
        assert_eq!(draft.quantity, 10);
        assert_eq!(draft.price, 2.5);
    }

    #[test]
    fn test_all_three_errors_raised_at_once() {
        let errors = form("", "abc", "-5").validate().unwrap_err();

        assert_eq!(
            errors.name,
            Some(ValidationError::required("name"))
        );
        assert_eq!(
            errors.quantity,
            Some(ValidationError::invalid_number("quantity"))
        );
        assert_eq!(
            errors.price,
            Some(ValidationError::must_be_positive("price"))
        );
    }

    #[test]
    fn test_single_field_failure_keeps_other_fields_clean() {
        let errors = form("Widget", "0", "2.50").validate().unwrap_err();

        assert_eq!(errors.name, None);
        assert_eq!(
            errors.quantity,
            Some(ValidationError::must_be_positive("quantity"))
        );
        assert_eq!(errors.price, None);
    }

    #[test]
    fn test_quantity_must_be_an_integer() {
        // "2.5" is a valid price but not a valid quantity
        let errors = form("Widget", "2.5", "2.5").validate().unwrap_err();
        assert_eq!(
            errors.quantity,
            Some(ValidationError::invalid_number("quantity"))
        );
        assert_eq!(errors.price, None);
    }

    #[test]
    fn test_name_blank_check_trims_but_value_is_kept_raw() {
        // " Widget " passes the blank check; the draft keeps the raw input
        let draft = form(" Widget ", "1", "1").validate().unwrap();
        assert_eq!(draft.name, " Widget ");
    }
}
