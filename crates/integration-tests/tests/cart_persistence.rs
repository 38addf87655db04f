//! Cart persistence scenarios over file-backed storage.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use aurum_core::{Category, ProductId};
use aurum_integration_tests::sample_product;
use aurum_store::{CART_SLOT, CartStore, FileStorage, StorageAdapter};

#[test]
fn cart_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    {
        let mut cart = CartStore::new(storage.clone());
        cart.add_item(sample_product("R1", "Classic Gold Ring", 8500, Category::Rings), 1);
        cart.add_item(
            sample_product("N1", "Pearl Necklace", 12000, Category::Necklaces),
            2,
        );
    }

    // A fresh instance over the same slot sees the same entries in order.
    let cart = CartStore::new(storage);
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), Decimal::from(32500));

    let ids: Vec<&str> = cart.items().iter().map(|e| e.product.id.as_str()).collect();
    assert_eq!(ids, ["R1", "N1"]);
}

#[test]
fn accumulation_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut cart = CartStore::new(storage.clone());
    cart.add_item(sample_product("R1", "Classic Gold Ring", 8500, Category::Rings), 1);
    drop(cart);

    let mut cart = CartStore::new(storage.clone());
    cart.add_item(sample_product("R1", "Classic Gold Ring", 8500, Category::Rings), 1);
    drop(cart);

    let cart = CartStore::new(storage);
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), Decimal::from(17000));
}

#[test]
fn corrupt_slot_degrades_to_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set(CART_SLOT, "][ definitely not json").unwrap();

    let mut cart = CartStore::new(storage.clone());
    assert!(cart.items().is_empty());

    // The first mutation overwrites the corrupt slot.
    cart.add_item(sample_product("R1", "Classic Gold Ring", 8500, Category::Rings), 1);
    drop(cart);

    let cart = CartStore::new(storage);
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn clear_persists_an_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut cart = CartStore::new(storage.clone());
    cart.add_item(sample_product("R1", "Classic Gold Ring", 8500, Category::Rings), 3);
    cart.clear();
    drop(cart);

    // The slot exists and holds an empty array, not the old contents.
    let raw = storage.get(CART_SLOT).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!([]));

    let cart = CartStore::new(storage);
    assert!(cart.items().is_empty());
}

#[test]
fn update_quantity_zero_removes_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut cart = CartStore::new(storage.clone());
    cart.add_item(sample_product("R1", "Classic Gold Ring", 8500, Category::Rings), 2);
    cart.update_quantity(&ProductId::new("R1"), 0);
    drop(cart);

    let cart = CartStore::new(storage);
    assert!(cart.items().is_empty());
    assert_eq!(cart.total_items(), 0);
}

#[test]
fn snapshot_price_is_authoritative_for_totals() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut cart = CartStore::new(storage.clone());
    cart.add_item(sample_product("R1", "Classic Gold Ring", 8500, Category::Rings), 1);
    drop(cart);

    // The catalog price changing later must not affect the captured line.
    let mut cart = CartStore::new(storage);
    cart.add_item(sample_product("R2", "Classic Gold Ring v2", 9000, Category::Rings), 1);
    assert_eq!(cart.total_price(), Decimal::from(17500));
    let first = cart.items().first().unwrap();
    assert_eq!(first.product.price.amount, Decimal::from(8500));
}
