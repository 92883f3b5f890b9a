//! # Shared Inventory State
//!
//! A shared handle to one [`Inventory`] for multi-threaded hosts.
//!
//! ## Thread Safety
//! The inventory is wrapped in `Arc<Mutex<T>>` because:
//! 1. Create/update/delete/list must appear atomic relative to one another,
//!    or the id-uniqueness invariant could be violated
//! 2. Host frameworks may invoke handlers from multiple threads
//! 3. Only one handler should mutate the inventory at a time
//!
//! A single-threaded host can skip this module entirely and own an
//! [`Inventory`] directly.

use std::sync::{Arc, Mutex};

use crate::inventory::Inventory;

/// Shared, mutex-guarded inventory handle.
///
/// ## Ownership
/// Constructed once at the host's composition root and cloned into whatever
/// handlers need it; cloning shares the same underlying store. There is no
/// process-wide singleton - whoever builds the state owns it.
///
/// ## Why Not RwLock?
/// Store operations are short, and most of them mutate. A `RwLock` would add
/// complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct InventoryState {
    inventory: Arc<Mutex<Inventory>>,
}

impl InventoryState {
    /// Creates shared state around a seeded store.
    pub fn new() -> Self {
        InventoryState::from_inventory(Inventory::new())
    }

    /// Creates shared state around an existing store (e.g. an empty one).
    pub fn from_inventory(inventory: Inventory) -> Self {
        InventoryState {
            inventory: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Executes a function with read access to the inventory.
    ///
    /// ## Usage
    /// ```rust
    /// use stocktake_store::InventoryState;
    ///
    /// let state = InventoryState::new();
    /// let snapshot = state.with_inventory(|inv| inv.list());
    /// assert_eq!(snapshot.len(), 3);
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Inventory) -> R,
    {
        let inventory = self.inventory.lock().expect("Inventory mutex poisoned");
        f(&inventory)
    }

    /// Executes a function with write access to the inventory.
    ///
    /// The closure runs under the lock, so a read-modify-write sequence
    /// (e.g. get, edit, update) is atomic as a whole.
    ///
    /// ## Usage
    /// ```rust
    /// use stocktake_core::ProductDraft;
    /// use stocktake_store::InventoryState;
    ///
    /// let state = InventoryState::new();
    /// let id = state.with_inventory_mut(|inv| {
    ///     inv.create(ProductDraft::new("Widget", "", "Hardware", 10, 2.50))
    /// });
    /// assert_eq!(id, 4);
    /// ```
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Inventory) -> R,
    {
        let mut inventory = self.inventory.lock().expect("Inventory mutex poisoned");
        f(&mut inventory)
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    use stocktake_core::ProductDraft;

    #[test]
    fn test_clones_share_the_same_store() {
        let state = InventoryState::new();
        let other = state.clone();

        state.with_inventory_mut(|inv| inv.delete(1));

        assert_eq!(other.with_inventory(|inv| inv.len()), 2);
    }

    #[test]
    fn test_mutations_from_threads_keep_ids_unique() {
        let state = InventoryState::from_inventory(Inventory::empty());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let state = state.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        state.with_inventory_mut(|inv| {
                            inv.create(ProductDraft::new(
                                format!("Product {}-{}", n, i),
                                "",
                                "",
                                1,
                                1.0,
                            ))
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<i64> = state.with_inventory(|inv| inv.list()).iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 400);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 400, "duplicate ids assigned under contention");
    }

    #[test]
    fn test_read_modify_write_is_atomic_under_the_lock() {
        let state = InventoryState::new();

        state.with_inventory_mut(|inv| {
            let mut edited = inv.get(2).expect("seeded product").clone();
            edited.quantity = 1;
            inv.update(edited);
        });

        assert_eq!(
            state.with_inventory(|inv| inv.get(2).unwrap().quantity),
            1
        );
    }
}
