//! Wishlist management commands.

use aurum_core::{Product, ProductId};
use aurum_store::{FileStorage, WishlistStore};

/// Save a product for later. No-op if it is already saved.
pub fn add(storage: FileStorage, product: Product) {
    let name = product.name.clone();
    let mut wishlist = WishlistStore::new(storage);
    wishlist.add_item(product);
    tracing::info!(
        "saved {name}; wishlist now has {} product(s)",
        wishlist.total_items()
    );
}

/// Remove a saved product.
pub fn remove(storage: FileStorage, id: &str) {
    let mut wishlist = WishlistStore::new(storage);
    wishlist.remove_item(&ProductId::new(id));
    tracing::info!(
        "removed {id}; wishlist now has {} product(s)",
        wishlist.total_items()
    );
}

/// Empty the wishlist.
pub fn clear(storage: FileStorage) {
    let mut wishlist = WishlistStore::new(storage);
    wishlist.clear();
    tracing::info!("wishlist cleared");
}

/// Print the saved products.
#[allow(clippy::print_stdout)]
pub fn show(storage: &FileStorage) {
    let wishlist = WishlistStore::new(storage);

    if wishlist.items().is_empty() {
        println!("Wishlist is empty.");
        return;
    }

    for product in wishlist.items() {
        println!(
            "{:<12} {:<30} [{}] {}",
            product.id,
            product.name,
            product.category,
            product.price.display(),
        );
    }
    println!("---");
    println!("Saved: {}", wishlist.total_items());
}
