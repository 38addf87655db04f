//! Cart management commands.
//!
//! Each command constructs a [`CartStore`] over the file-backed storage,
//! applies one operation, and lets write-through persistence do the rest.

use rust_decimal::Decimal;

use aurum_core::{CurrencyCode, Product, ProductId};
use aurum_store::{CartStore, FileStorage};

/// Add `quantity` units of a product to the cart.
pub fn add(storage: FileStorage, product: Product, quantity: u32) {
    let name = product.name.clone();
    let mut cart = CartStore::new(storage);
    cart.add_item(product, quantity);
    tracing::info!(
        "added {quantity} x {name}; cart now has {} item(s)",
        cart.total_items()
    );
}

/// Remove a product from the cart.
pub fn remove(storage: FileStorage, id: &str) {
    let mut cart = CartStore::new(storage);
    cart.remove_item(&ProductId::new(id));
    tracing::info!("removed {id}; cart now has {} item(s)", cart.total_items());
}

/// Set the quantity of a cart line. Zero removes it.
pub fn set_quantity(storage: FileStorage, id: &str, quantity: u32) {
    let mut cart = CartStore::new(storage);
    cart.update_quantity(&ProductId::new(id), quantity);
    tracing::info!(
        "set {id} to {quantity}; cart now has {} item(s)",
        cart.total_items()
    );
}

/// Empty the cart.
pub fn clear(storage: FileStorage) {
    let mut cart = CartStore::new(storage);
    cart.clear();
    tracing::info!("cart cleared");
}

/// Print the cart contents and totals.
#[allow(clippy::print_stdout)]
pub fn show(storage: &FileStorage) {
    let cart = CartStore::new(storage);

    if cart.items().is_empty() {
        println!("Cart is empty.");
        return;
    }

    for entry in cart.items() {
        println!(
            "{:<12} {:<30} x{:<4} {}",
            entry.product.id,
            entry.product.name,
            entry.quantity,
            entry.product.price.display(),
        );
    }
    println!("---");
    println!("Items: {}", cart.total_items());
    println!("Total: {}", format_total(cart.total_price()));
}

/// Format the cart total the same way line prices display: currency
/// symbol plus two decimal places.
fn format_total(total: Decimal) -> String {
    format!("{}{total:.2}", CurrencyCode::default().symbol())
}
