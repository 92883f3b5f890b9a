//! # Inventory Statistics
//!
//! Derived totals over a product snapshot.
//!
//! Statistics are a pure computation, not store state: they are recomputed
//! from whichever snapshot the caller holds, so a stats value is always
//! consistent with the list it was derived from.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::product::Product;

// =============================================================================
// Inventory Stats
// =============================================================================

/// Running totals for a product snapshot.
///
/// ## Fields
/// - `total_count`: number of distinct products in the snapshot
/// - `total_quantity`: sum of `quantity` over the snapshot
/// - `total_value`: sum of `price × quantity` over the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_count: usize,
    pub total_quantity: i64,
    pub total_value: f64,
}

impl InventoryStats {
    /// Computes totals over any product snapshot.
    ///
    /// ## Example
    /// ```rust
    /// use stocktake_core::{InventoryStats, Product, ProductDraft};
    ///
    /// let products = vec![
    ///     Product::from_draft(ProductDraft::new("Laptop", "", "", 5, 1200.0), 1),
    ///     Product::from_draft(ProductDraft::new("Mouse", "", "", 15, 25.0), 2),
    /// ];
    /// let stats = InventoryStats::from_products(&products);
    /// assert_eq!(stats.total_count, 2);
    /// assert_eq!(stats.total_quantity, 20);
    /// assert_eq!(stats.total_value, 6375.0);
    /// ```
    pub fn from_products(products: &[Product]) -> Self {
        InventoryStats {
            total_count: products.len(),
            total_quantity: products.iter().map(|p| p.quantity).sum(),
            total_value: products.iter().map(|p| p.line_value()).sum(),
        }
    }

    /// Totals for an empty snapshot.
    #[inline]
    pub fn empty() -> Self {
        InventoryStats {
            total_count: 0,
            total_quantity: 0,
            total_value: 0.0,
        }
    }

    /// Total value rendered for display, two decimal places: `"$7015.00"`.
    pub fn total_value_display(&self) -> String {
        format!("${:.2}", self.total_value)
    }
}

impl Default for InventoryStats {
    fn default() -> Self {
        InventoryStats::empty()
    }
}

/// Debug-friendly one-line summary. Hosts format their own stat tiles; this
/// is for logs.
impl fmt::Display for InventoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} products, {} units, {}",
            self.total_count,
            self.total_quantity,
            self.total_value_display()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductDraft;

    fn product(id: i64, quantity: i64, price: f64) -> Product {
        Product::from_draft(
            ProductDraft::new(format!("Product {}", id), "", "", quantity, price),
            id,
        )
    }

    #[test]
    fn test_empty_snapshot_is_all_zeroes() {
        let stats = InventoryStats::from_products(&[]);
        assert_eq!(stats, InventoryStats::empty());
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.total_quantity, 0);
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.total_value_display(), "$0.00");
    }

    #[test]
    fn test_totals_over_snapshot() {
        let products = vec![
            product(1, 5, 1200.0),
            product(2, 15, 25.0),
            product(3, 8, 80.0),
        ];
        let stats = InventoryStats::from_products(&products);

        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.total_quantity, 28);
        // 6000 + 375 + 640
        assert_eq!(stats.total_value, 7015.0);
        assert_eq!(stats.total_value_display(), "$7015.00");
    }

    #[test]
    fn test_display_summary() {
        let stats = InventoryStats::from_products(&[product(1, 3, 2.5)]);
        assert_eq!(stats.to_string(), "1 products, 3 units, $7.50");
    }
}
