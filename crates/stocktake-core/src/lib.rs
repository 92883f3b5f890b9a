//! # stocktake-core: Pure Domain Logic for Stocktake
//!
//! This crate is the **heart** of Stocktake. It contains the product domain
//! model, the input-validation contract, and the statistics computation as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stocktake Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host UI (out of tree)                        │   │
//! │  │    Product list ──► Stats panel ──► Add/Edit dialogs            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots + mutation calls             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stocktake-store                                │   │
//! │  │    Inventory (product list + id counter), InventoryState        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stocktake-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  product  │  │   stats   │  │ validation│  │   error   │   │   │
//! │  │   │  Product  │  │ Inventory │  │ProductForm│  │ Validation│   │   │
//! │  │   │   Draft   │  │   Stats   │  │   rules   │  │   Error   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Domain types ([`Product`], [`ProductDraft`])
//! - [`stats`] - Derived inventory statistics ([`InventoryStats`])
//! - [`validation`] - Raw-input validation ([`ProductForm`] and field rules)
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: Validation failures are typed, never strings or panics
//! 4. **Validate at the edge**: All checks happen BEFORE the store is touched
//!
//! ## Example Usage
//!
//! ```rust
//! use stocktake_core::ProductForm;
//!
//! // Raw text exactly as collected from input fields
//! let form = ProductForm {
//!     name: "Widget".to_string(),
//!     description: "A basic widget".to_string(),
//!     category: "Hardware".to_string(),
//!     quantity: "10".to_string(),
//!     price: "2.50".to_string(),
//! };
//!
//! // All field checks run at once; a clean form yields a draft
//! let draft = form.validate().expect("form is valid");
//! assert_eq!(draft.quantity, 10);
//! assert_eq!(draft.price, 2.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod product;
pub mod stats;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stocktake_core::Product` instead of
// `use stocktake_core::product::Product`

pub use error::{ProductFormErrors, ValidationError};
pub use product::{Product, ProductDraft};
pub use stats::InventoryStats;
pub use validation::{
    validate_price, validate_product_name, validate_quantity, ProductForm, ValidationResult,
};
