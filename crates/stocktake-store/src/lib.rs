//! # stocktake-store: The In-Memory Inventory Store
//!
//! This crate owns the authoritative product list for Stocktake. It is the
//! sole authority over product identity: ids are assigned here, on the
//! create path, and are never reused.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stocktake Data Flow                               │
//! │                                                                         │
//! │  Host UI action                stocktake-store                          │
//! │  ──────────────                ───────────────                          │
//! │                                                                         │
//! │  Submit add dialog ──────────► create(draft)  ──► push, id = next_id   │
//! │                                                                         │
//! │  Submit edit dialog ─────────► update(product) ─► replace in place     │
//! │                                                                         │
//! │  Tap delete ─────────────────► delete(id) ──────► retain others        │
//! │                                                                         │
//! │  Render list / stats ────────► list() / stats() ► owned snapshot       │
//! │                                                                         │
//! │  Change notification is re-fetch-on-demand: after a mutation the host  │
//! │  calls list()/stats() again. Snapshots are owned copies, so a          │
//! │  previously rendered frame never changes under the host's feet.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`inventory`] - [`Inventory`]: the product collection, id counter, and
//!   CRUD operations
//! - [`state`] - [`InventoryState`]: shared handle serializing access for
//!   multi-threaded hosts
//!
//! ## Usage
//!
//! ```rust
//! use stocktake_core::ProductDraft;
//! use stocktake_store::Inventory;
//!
//! // A new store comes seeded with the example catalog (ids 1-3)
//! let mut inventory = Inventory::new();
//! assert_eq!(inventory.len(), 3);
//!
//! // Create assigns the next id and returns it
//! let id = inventory.create(ProductDraft::new("Widget", "", "Hardware", 10, 2.50));
//! assert_eq!(id, 4);
//!
//! // Stats are derived from the current list
//! assert_eq!(inventory.stats().total_count, 4);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod inventory;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use inventory::Inventory;
pub use state::InventoryState;
