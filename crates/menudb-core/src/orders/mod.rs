//! Customer orders.
//!
//! Each order references one menu item and carries the total computed when
//! it was placed.

mod order;
mod store;

pub use order::{Order, OrderLine};
pub use store::OrderStore;
