//! Catalog product snapshot types.
//!
//! A [`Product`] is the value captured into a cart or wishlist entry at the
//! moment it is added. The stores treat it as opaque: they key entries by
//! [`ProductId`](super::ProductId) and read the unit price for totals, but
//! never validate or mutate the remaining fields. Prices in particular are
//! the add-time snapshot, not a live catalog lookup.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Snapshot of a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-assigned unique identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Unit price at the time of capture.
    pub price: Price,
    /// Catalog category.
    pub category: Category,
    /// Image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Jewelry specification attributes.
    pub specifications: Specifications,
    /// Stock on hand at the time of capture. Informational only; the
    /// stores enforce no stock limit.
    #[serde(default)]
    pub stock: u32,
    /// Whether the product was featured on the home page.
    #[serde(default)]
    pub featured: bool,
}

/// Catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rings,
    Earrings,
    Necklaces,
    Bangles,
}

impl Category {
    /// URL/storage form of the category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rings => "rings",
            Self::Earrings => "earrings",
            Self::Necklaces => "necklaces",
            Self::Bangles => "bangles",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Category`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0} (expected rings, earrings, necklaces, or bangles)")]
pub struct ParseCategoryError(String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rings" => Ok(Self::Rings),
            "earrings" => Ok(Self::Earrings),
            "necklaces" => Ok(Self::Necklaces),
            "bangles" => Ok(Self::Bangles),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Jewelry specification attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Specifications {
    /// Base metal (e.g., "Gold", "Silver").
    #[serde(default)]
    pub metal: String,
    /// Metal purity (e.g., "22K", "925").
    #[serde(default)]
    pub purity: String,
    /// Weight as displayed (e.g., "4.2g").
    #[serde(default)]
    pub weight: String,
    /// Stones set into the piece.
    #[serde(default)]
    pub stones: Vec<String>,
    /// Whether the piece carries a hallmark certification.
    #[serde(default)]
    pub hallmarked: bool,
}
