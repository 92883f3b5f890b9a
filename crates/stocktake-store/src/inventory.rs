//! # Inventory
//!
//! The product collection and its id counter.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Operations                                │
//! │                                                                         │
//! │  Operation              Effect                       Not-found case     │
//! │  ─────────              ──────                       ──────────────     │
//! │                                                                         │
//! │  create(draft) ───────► append with id = next_id,    (cannot fail)      │
//! │                         next_id += 1                                    │
//! │                                                                         │
//! │  update(product) ─────► replace matching element     silent no-op       │
//! │                         in place, same position                         │
//! │                                                                         │
//! │  delete(id) ──────────► remove matching element,     silent no-op       │
//! │                         order of rest preserved                         │
//! │                                                                         │
//! │  get(id) ─────────────► borrow matching element      None               │
//! │                                                                         │
//! │  list() ──────────────► owned snapshot,              (cannot fail)      │
//! │                         insertion order                                 │
//! │                                                                         │
//! │  NOTE: ids are never reused. Deleting id 2 and creating a new product  │
//! │        yields id 4 (or wherever the counter is), never 2 again.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - All ids in the collection are pairwise distinct
//! - Insertion order is preserved; it is the display order
//! - `next_id` only ever increases
//! - The store performs NO input validation; drafts come pre-validated from
//!   the `stocktake-core` boundary

use tracing::debug;

use stocktake_core::{InventoryStats, Product, ProductDraft};

/// The example catalog a fresh store starts with.
/// (name, description, category, quantity, price)
const SEED_CATALOG: [(&str, &str, &str, i64, f64); 3] = [
    ("Dell Laptop", "Office laptop", "Electronics", 5, 1200.0),
    ("Logitech Mouse", "Wireless mouse", "Accessories", 15, 25.0),
    ("Mechanical Keyboard", "Gaming keyboard", "Accessories", 8, 80.0),
];

// =============================================================================
// Inventory
// =============================================================================

/// The authoritative product list.
///
/// Owns every `Product` exclusively: callers get owned snapshots or short
/// borrows, never a mutable alias into the collection. Single-threaded and
/// synchronous; multi-threaded hosts wrap it in
/// [`InventoryState`](crate::state::InventoryState).
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Products in insertion order.
    products: Vec<Product>,

    /// Next id to assign. Starts at 1, only ever increases.
    next_id: i64,
}

impl Inventory {
    /// Creates a store seeded with the example catalog.
    ///
    /// The seeds go through the normal create path, consuming ids 1, 2, 3
    /// in catalog order.
    pub fn new() -> Self {
        let mut inventory = Inventory::empty();
        for (name, description, category, quantity, price) in SEED_CATALOG {
            inventory.create(ProductDraft::new(name, description, category, quantity, price));
        }
        inventory
    }

    /// Creates an empty store with the id counter at 1.
    pub fn empty() -> Self {
        Inventory {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a product built from the draft, assigning the next id.
    ///
    /// Always succeeds: drafts are validated at the input boundary before
    /// they reach the store, and the store does not re-check them.
    ///
    /// ## Returns
    /// The assigned id.
    pub fn create(&mut self, draft: ProductDraft) -> i64 {
        let id = self.next_id;
        self.next_id += 1;

        debug!(id = id, name = %draft.name, "create product");
        self.products.push(Product::from_draft(draft, id));
        id
    }

    /// Replaces the product with a matching id, in place.
    ///
    /// ## Behavior
    /// - Every field except the id may change; the element keeps its position
    /// - If no product has `product.id`, the collection is unchanged - this
    ///   is a silent no-op, not an error
    pub fn update(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                debug!(id = product.id, name = %product.name, "update product");
                *slot = product;
            }
            None => {
                debug!(id = product.id, "update target not found, ignoring");
            }
        }
    }

    /// Removes the product with a matching id.
    ///
    /// Relative order of the remaining products is preserved. If no product
    /// has that id, the collection is unchanged - a silent no-op.
    pub fn delete(&mut self, id: i64) {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);

        if self.products.len() == before {
            debug!(id = id, "delete target not found, ignoring");
        } else {
            debug!(id = id, remaining = self.products.len(), "delete product");
        }
    }

    /// Looks up a product by id. Absence is `None`, not an error.
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns an owned snapshot of the collection, in insertion order.
    ///
    /// The snapshot is a copy: later store mutations never change a
    /// previously returned snapshot.
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Computes totals over the current collection.
    ///
    /// Equivalent to `InventoryStats::from_products(&inventory.list())`
    /// without the copy.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_products(&self.products)
    }

    /// Number of products currently in the store.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Inventory {
    /// A default store is the seeded one, like [`Inventory::new`].
    fn default() -> Self {
        Inventory::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
