//! Wishlist state container.
//!
//! A set of saved products keyed by product id: no quantities, no
//! duplicates, re-adding is a no-op. Persistence works exactly like the
//! cart's, under its own slot.

use aurum_core::{Product, ProductId};

use crate::storage::{StorageAdapter, load_collection, store_collection};

/// Storage slot the wishlist persists to.
pub const WISHLIST_SLOT: &str = "aurum-wishlist";

/// Add `product` unless an entry with the same id already exists.
fn add_entry(mut items: Vec<Product>, product: Product) -> Vec<Product> {
    if !items.iter().any(|p| p.id == product.id) {
        items.push(product);
    }
    items
}

/// Remove the entry for `product_id`, if any.
fn remove_entry(mut items: Vec<Product>, product_id: &ProductId) -> Vec<Product> {
    items.retain(|p| p.id != *product_id);
    items
}

/// Wishlist store with write-through persistence.
///
/// Same construction and failure discipline as
/// [`CartStore`](crate::CartStore): hydrate once, persist after every
/// mutation, absorb storage failures.
#[derive(Debug)]
pub struct WishlistStore<S: StorageAdapter> {
    storage: S,
    items: Vec<Product>,
}

impl<S: StorageAdapter> WishlistStore<S> {
    /// Create a wishlist store over the given storage backend, hydrating
    /// from [`WISHLIST_SLOT`].
    #[must_use]
    pub fn new(storage: S) -> Self {
        let items = load_collection(&storage, WISHLIST_SLOT);
        Self { storage, items }
    }

    /// Saved products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Save a product. No-op if it is already saved.
    pub fn add_item(&mut self, product: Product) {
        self.items = add_entry(std::mem::take(&mut self.items), product);
        self.persist();
    }

    /// Remove a saved product. No-op if it is not present.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items = remove_entry(std::mem::take(&mut self.items), product_id);
        self.persist();
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Whether a product is saved. Drives the heart-toggle affordance in
    /// product cards.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| p.id == *product_id)
    }

    /// Number of saved products.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    fn persist(&self) {
        store_collection(&self.storage, WISHLIST_SLOT, &self.items);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aurum_core::{Category, Price, Specifications};

    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    /// Adapter whose writes always fail, simulating a full or unavailable
    /// backend.
    struct BrokenStorage;

    impl StorageAdapter for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            price: Price::from_units(3200),
            category: Category::Earrings,
            images: vec![],
            specifications: Specifications::default(),
            stock: 5,
            featured: false,
        }
    }

    #[test]
    fn test_add_item_twice_keeps_one_entry() {
        let mut wishlist = WishlistStore::new(MemoryStorage::new());
        wishlist.add_item(product("E1"));
        wishlist.add_item(product("E1"));

        assert_eq!(wishlist.total_items(), 1);
    }

    #[test]
    fn test_contains_tracks_membership() {
        let mut wishlist = WishlistStore::new(MemoryStorage::new());
        wishlist.add_item(product("E1"));
        assert!(wishlist.contains(&ProductId::new("E1")));

        wishlist.remove_item(&ProductId::new("E1"));
        assert!(!wishlist.contains(&ProductId::new("E1")));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut wishlist = WishlistStore::new(MemoryStorage::new());
        wishlist.add_item(product("E1"));

        wishlist.remove_item(&ProductId::new("missing"));
        assert_eq!(wishlist.total_items(), 1);
    }

    #[test]
    fn test_clear_empties_wishlist() {
        let mut wishlist = WishlistStore::new(MemoryStorage::new());
        wishlist.add_item(product("E1"));
        wishlist.add_item(product("E2"));

        wishlist.clear();
        assert_eq!(wishlist.total_items(), 0);
    }

    #[test]
    fn test_reload_from_same_slot() {
        let storage = MemoryStorage::new();
        {
            let mut wishlist = WishlistStore::new(&storage);
            wishlist.add_item(product("E1"));
            wishlist.add_item(product("E2"));
        }

        let reloaded = WishlistStore::new(&storage);
        assert_eq!(reloaded.total_items(), 2);
        assert!(reloaded.contains(&ProductId::new("E1")));
        assert!(reloaded.contains(&ProductId::new("E2")));
    }

    #[test]
    fn test_corrupt_slot_hydrates_empty() {
        let storage = MemoryStorage::new();
        storage.set(WISHLIST_SLOT, "[1, 2, 3]").unwrap();

        let wishlist = WishlistStore::new(&storage);
        assert_eq!(wishlist.total_items(), 0);
    }

    #[test]
    fn test_failed_persist_keeps_in_memory_state_authoritative() {
        let mut wishlist = WishlistStore::new(BrokenStorage);
        wishlist.add_item(product("E1"));
        wishlist.add_item(product("E2"));

        assert_eq!(wishlist.total_items(), 2);
        assert!(wishlist.contains(&ProductId::new("E1")));
    }

    #[test]
    fn test_cart_and_wishlist_slots_do_not_interact() {
        let storage = MemoryStorage::new();

        let mut cart = crate::CartStore::new(&storage);
        cart.add_item(product("E1"), 2);

        let mut wishlist = WishlistStore::new(&storage);
        wishlist.add_item(product("E2"));

        let cart_reloaded = crate::CartStore::new(&storage);
        let wishlist_reloaded = WishlistStore::new(&storage);
        assert_eq!(cart_reloaded.total_items(), 2);
        assert_eq!(wishlist_reloaded.total_items(), 1);
        assert!(!wishlist_reloaded.contains(&ProductId::new("E1")));
    }
}
