//! Aurum Core - Shared types library.
//!
//! This crate provides common types used across all Aurum components:
//! - `store` - Cart and wishlist state containers
//! - `cli` - Command-line tools for inspecting and mutating local state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, and catalog snapshots

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
