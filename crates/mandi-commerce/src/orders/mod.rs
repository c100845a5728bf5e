//! Orders module.
//!
//! Orders are read-only on the supplier side: they are fetched, localized
//! and totalled for display.

mod order;

pub use order::{Order, OrderLineItem};
