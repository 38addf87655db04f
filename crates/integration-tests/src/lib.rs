//! Integration tests for Aurum.
//!
//! Tests here exercise the stores end to end against file-backed storage:
//! reload across store instances, corruption recovery, and slot isolation.
//! Unit tests for transitions and adapters live with their crates.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aurum-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use aurum_core::{Category, Price, Product, ProductId, Specifications};

/// Build a product snapshot for test scenarios.
#[must_use]
pub fn sample_product(id: &str, name: &str, price_units: i64, category: Category) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        price: Price::from_units(price_units),
        category,
        images: vec![format!("https://cdn.example.com/{id}.jpg")],
        specifications: Specifications {
            metal: "Gold".to_string(),
            purity: "22K".to_string(),
            weight: "4.2g".to_string(),
            stones: vec![],
            hallmarked: true,
        },
        stock: 10,
        featured: false,
    }
}
