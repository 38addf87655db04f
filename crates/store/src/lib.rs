//! Aurum Store - Cart and wishlist state containers.
//!
//! Both containers follow the same discipline: state lives in memory and
//! changes only through the public operations; after every mutation the
//! full collection is serialized to a named slot in a key-value storage
//! backend. Hydration happens once at construction and is best-effort:
//! missing or corrupt data degrades to an empty collection.
//!
//! Persistence failures never surface to callers. A shopper's cart
//! interaction must not fail because a storage write did; the in-memory
//! state stays authoritative for the session and the failure is logged.
//!
//! # Example
//!
//! ```rust
//! use aurum_core::{Category, Price, Product, ProductId, Specifications};
//! use aurum_store::{CartStore, MemoryStorage};
//!
//! let product = Product {
//!     id: ProductId::new("R1"),
//!     name: "Classic Gold Ring".to_string(),
//!     slug: "classic-gold-ring".to_string(),
//!     price: Price::from_units(8500),
//!     category: Category::Rings,
//!     images: vec![],
//!     specifications: Specifications::default(),
//!     stock: 3,
//!     featured: false,
//! };
//!
//! let mut cart = CartStore::new(MemoryStorage::new());
//! cart.add_item(product, 1);
//! assert_eq!(cart.total_items(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod storage;
pub mod wishlist;

pub use cart::{CART_SLOT, CartEntry, CartStore};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter, StorageError};
pub use wishlist::{WISHLIST_SLOT, WishlistStore};
