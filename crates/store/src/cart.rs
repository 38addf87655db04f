//! Shopping cart state container.
//!
//! The cart keeps one entry per product id with a positive quantity.
//! Transitions are pure functions over the entry list; [`CartStore`] wires
//! them to a storage slot with write-through persistence. The store never
//! returns errors from its public operations (see [`crate::storage`] for
//! the failure policy).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use aurum_core::{Product, ProductId};

use crate::storage::{StorageAdapter, load_collection, store_collection};

/// Storage slot the cart persists to.
pub const CART_SLOT: &str = "aurum-cart";

/// One cart line: a product snapshot and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product as it looked when added. Never re-fetched.
    pub product: Product,
    /// Units of this product, at least 1 while the entry exists.
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        self.product.price.amount * Decimal::from(self.quantity)
    }
}

// =============================================================================
// Transitions
// =============================================================================
//
// Pure functions from the current entry list (plus operation arguments) to
// the next entry list. No storage involved, so they unit-test in isolation.

/// Add `quantity` units of `product`: accumulate into an existing entry or
/// append a new one. Insertion order of distinct products is preserved.
fn add_entry(mut items: Vec<CartEntry>, product: Product, quantity: u32) -> Vec<CartEntry> {
    if let Some(entry) = items.iter_mut().find(|e| e.product.id == product.id) {
        // No upper bound; stock limits are the caller's concern.
        entry.quantity = entry.quantity.saturating_add(quantity);
    } else {
        items.push(CartEntry { product, quantity });
    }
    items
}

/// Remove the entry for `product_id`, if any.
fn remove_entry(mut items: Vec<CartEntry>, product_id: &ProductId) -> Vec<CartEntry> {
    items.retain(|e| e.product.id != *product_id);
    items
}

/// Set the quantity for `product_id`. Zero removes the entry; an unknown
/// id is ignored and never creates an entry.
fn set_quantity(mut items: Vec<CartEntry>, product_id: &ProductId, quantity: u32) -> Vec<CartEntry> {
    if quantity == 0 {
        return remove_entry(items, product_id);
    }
    if let Some(entry) = items.iter_mut().find(|e| e.product.id == *product_id) {
        entry.quantity = quantity;
    }
    items
}

// =============================================================================
// Store
// =============================================================================

/// Cart store with write-through persistence.
///
/// Construct once per session; the collection hydrates from the storage
/// slot at that point and is persisted after every mutation. Mutations go
/// through `&mut self`, so there is exactly one mutator per instance.
#[derive(Debug)]
pub struct CartStore<S: StorageAdapter> {
    storage: S,
    items: Vec<CartEntry>,
}

impl<S: StorageAdapter> CartStore<S> {
    /// Create a cart store over the given storage backend, hydrating from
    /// [`CART_SLOT`]. Missing or corrupt persisted data yields an empty
    /// cart rather than an error.
    #[must_use]
    pub fn new(storage: S) -> Self {
        let items = load_collection(&storage, CART_SLOT);
        Self { storage, items }
    }

    /// Current entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartEntry] {
        &self.items
    }

    /// Add `quantity` units of a product. If the product is already in the
    /// cart its quantity accumulates; otherwise a new entry is appended.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        self.items = add_entry(std::mem::take(&mut self.items), product, quantity);
        self.persist();
    }

    /// Remove a product from the cart. No-op if it is not present.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items = remove_entry(std::mem::take(&mut self.items), product_id);
        self.persist();
    }

    /// Set a product's quantity. Zero (or less, unrepresentable with
    /// `u32`) removes the entry; an id not in the cart is silently
    /// ignored.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        self.items = set_quantity(std::mem::take(&mut self.items), product_id, quantity);
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Total units across all entries (not the number of distinct
    /// products).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, e| total.saturating_add(e.quantity))
    }

    /// Total price across all entries, from the captured unit prices.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartEntry::line_price).sum()
    }

    fn persist(&self) {
        store_collection(&self.storage, CART_SLOT, &self.items);
    }
}
