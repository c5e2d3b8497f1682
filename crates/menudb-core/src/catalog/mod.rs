//! Menu catalog.
//!
//! The catalog owns the `menu` table: one row per product, unique by
//! normalized name.

mod item;
mod seed;
mod store;

pub use item::MenuItem;
pub use seed::{RejectedEntry, SeedDocument, SeedReport};
pub use store::CatalogStore;
