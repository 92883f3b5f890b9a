//! # Domain Types
//!
//! Core domain types used throughout Stocktake.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │    ProductDraft     │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (store-owned)   │◄───────│  (no id yet)        │                │
//! │  │  name               │ create │  name               │                │
//! │  │  description        │        │  description        │                │
//! │  │  category           │        │  category           │                │
//! │  │  quantity           │        │  quantity           │                │
//! │  │  price              │        │  price              │                │
//! │  └─────────────────────┘        └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store, never user-supplied, and never reused even
//! after deletion. A `ProductDraft` is the candidate a caller hands to the
//! store's create operation; the store turns it into a `Product` by stamping
//! the next id.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product tracked in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store. Never reused.
    pub id: i64,

    /// Display name. Non-empty (enforced at the validation boundary).
    pub name: String,

    /// Free-text description. May be empty.
    pub description: String,

    /// Free-text category. May be empty.
    pub category: String,

    /// Units on hand. Positive at creation/update time (enforced at the
    /// validation boundary, not by the store).
    pub quantity: i64,

    /// Unit price. Positive at creation/update time (same enforcement point).
    pub price: f64,
}

impl Product {
    /// Builds a `Product` from a draft by stamping the given id.
    ///
    /// Only the store calls this on the create path; everything else either
    /// holds a full `Product` or a `ProductDraft`.
    pub fn from_draft(draft: ProductDraft, id: i64) -> Self {
        Product {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            quantity: draft.quantity,
            price: draft.price,
        }
    }

    /// Total value of this line: `price × quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use stocktake_core::ProductDraft;
    /// use stocktake_core::Product;
    ///
    /// let draft = ProductDraft::new("Mouse", "Wireless mouse", "Accessories", 15, 25.0);
    /// let product = Product::from_draft(draft, 2);
    /// assert_eq!(product.line_value(), 375.0);
    /// ```
    #[inline]
    pub fn line_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Unit price rendered for display, two decimal places: `"$25.00"`.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Line value rendered for display, two decimal places: `"$375.00"`.
    pub fn line_value_display(&self) -> String {
        format!("${:.2}", self.line_value())
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// A product candidate without an identity.
///
/// This is what dialogs produce after validation and what the store's create
/// operation consumes. The store assigns the id; a draft never carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

impl ProductDraft {
    /// Creates a draft from already-validated parts.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Self {
        ProductDraft {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            quantity,
            price,
        }
    }
}

impl From<Product> for ProductDraft {
    /// Strips the identity off a product, e.g. to re-create it elsewhere.
    fn from(p: Product) -> Self {
        ProductDraft {
            name: p.name,
            description: p.description,
            category: p.category,
            quantity: p.quantity,
            price: p.price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_stamps_id() {
        let draft = ProductDraft::new("Widget", "", "", 10, 2.5);
        let product = Product::from_draft(draft.clone(), 7);

        assert_eq!(product.id, 7);
        assert_eq!(product.name, draft.name);
        assert_eq!(product.quantity, draft.quantity);
        assert_eq!(product.price, draft.price);
    }

    #[test]
    fn test_line_value() {
        let product = Product::from_draft(ProductDraft::new("Laptop", "", "", 5, 1200.0), 1);
        assert_eq!(product.line_value(), 6000.0);
    }

    #[test]
    fn test_display_renders_two_decimals() {
        let product = Product::from_draft(ProductDraft::new("Keyboard", "", "", 8, 80.0), 3);
        assert_eq!(product.price_display(), "$80.00");
        assert_eq!(product.line_value_display(), "$640.00");

        let fractional = Product::from_draft(ProductDraft::new("Widget", "", "", 3, 2.5), 4);
        assert_eq!(fractional.price_display(), "$2.50");
        assert_eq!(fractional.line_value_display(), "$7.50");
    }

    #[test]
    fn test_serialized_field_names_are_stable() {
        // The serialized shape is the host-facing contract.
        let product = Product::from_draft(
            ProductDraft::new("Mouse", "Wireless mouse", "Accessories", 15, 25.0),
            2,
        );
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "Mouse");
        assert_eq!(json["description"], "Wireless mouse");
        assert_eq!(json["category"], "Accessories");
        assert_eq!(json["quantity"], 15);
        assert_eq!(json["price"], 25.0);
    }
}
