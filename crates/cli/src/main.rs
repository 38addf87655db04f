//! Aurum CLI - Local cart and wishlist management tools.
//!
//! Operates on the same file-backed storage slots the storefront uses, so
//! state added here shows up on the next hydration and vice versa.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product to the cart
//! aurum cart add --id R1 --name "Classic Gold Ring" --price 8500 --category rings --quantity 2
//!
//! # Inspect the cart
//! aurum cart show
//!
//! # Change a quantity (0 removes the line)
//! aurum cart set-quantity --id R1 --quantity 3
//!
//! # Save a product for later
//! aurum wishlist add --id E1 --name "Pearl Drop Earrings" --price 3200 --category earrings
//! ```
//!
//! # Commands
//!
//! - `cart` - add, remove, set-quantity, clear, show
//! - `wishlist` - add, remove, clear, show

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aurum_core::Category;
use aurum_store::FileStorage;

mod commands;
mod config;

use config::CliConfig;

/// Default log filter: command confirmations (info level) are visible
/// without `RUST_LOG` being set.
const DEFAULT_LOG_FILTER: &str = "aurum_cli=info,aurum_store=info";

#[derive(Parser)]
#[command(name = "aurum")]
#[command(author, version, about = "Aurum local state tools")]
struct Cli {
    /// Data directory holding the storage slots (overrides AURUM_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

/// Product fields shared by the `add` subcommands.
///
/// The CLI builds a product snapshot from flags; there is no catalog
/// lookup, the stores treat whatever is given as the captured snapshot.
#[derive(Args)]
struct ProductArgs {
    /// Product identifier
    #[arg(long)]
    id: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Unit price in the default currency
    #[arg(long)]
    price: Decimal,

    /// Category (rings, earrings, necklaces, bangles)
    #[arg(long)]
    category: Category,

    /// URL slug (derived from the name if omitted)
    #[arg(long)]
    slug: Option<String>,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        #[command(flatten)]
        product: ProductArgs,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product identifier
        #[arg(long)]
        id: String,
    },
    /// Set the quantity of a cart line (0 removes it)
    SetQuantity {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Print the cart contents and totals
    Show,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a product for later
    Add {
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Remove a saved product
    Remove {
        /// Product identifier
        #[arg(long)]
        id: String,
    },
    /// Empty the wishlist
    Clear,
    /// Print the saved products
    Show,
}

/// Initialize tracing with `EnvFilter`, defaulting to info level for our
/// crates if `RUST_LOG` is not set.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let config = CliConfig::from_env();
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");
    let storage = FileStorage::new(data_dir);

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { product, quantity } => {
                commands::cart::add(storage, product.into_product(), quantity);
            }
            CartAction::Remove { id } => commands::cart::remove(storage, &id),
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(storage, &id, quantity);
            }
            CartAction::Clear => commands::cart::clear(storage),
            CartAction::Show => commands::cart::show(&storage),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { product } => {
                commands::wishlist::add(storage, product.into_product());
            }
            WishlistAction::Remove { id } => commands::wishlist::remove(storage, &id),
            WishlistAction::Clear => commands::wishlist::clear(storage),
            WishlistAction::Show => commands::wishlist::show(&storage),
        },
    }
}

impl ProductArgs {
    /// Build the product snapshot the stores will capture.
    fn into_product(self) -> aurum_core::Product {
        let slug = self.slug.unwrap_or_else(|| slugify(&self.name));
        aurum_core::Product {
            id: aurum_core::ProductId::new(self.id),
            name: self.name,
            slug,
            price: aurum_core::Price::new(self.price, aurum_core::CurrencyCode::default()),
            category: self.category,
            images: vec![],
            specifications: aurum_core::Specifications::default(),
            stock: 0,
            featured: false,
        }
    }
}

/// Derive a URL slug from a display name.
fn slugify(name: &str) -> String {
    name.chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
