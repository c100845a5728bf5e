//! Supplier inventory domain types and logic for Mandi.
//!
//! This crate holds the pieces of the storefront that carry actual business
//! rules:
//!
//! - **Catalog**: items and their tiered price slabs (raw form rows, the
//!   validated schedule, price resolution)
//! - **Orders**: order line items with snapshotted unit prices and totals
//! - **Ledger**: amount owed and payment history
//!
//! Numbers typed by a supplier enter as text and cross a single parsing
//! boundary ([`Quantity::parse`], [`Money::parse`]) before any arithmetic.
//!
//! # Example
//!
//! ```rust
//! use mandi_commerce::prelude::*;
//!
//! let mut sheet = SlabSheet::new();
//! sheet.update_slab_field(0, SlabField::MinQuantity, "10");
//! sheet.update_slab_field(0, SlabField::Price, "25");
//! sheet.add_slab();
//! sheet.update_slab_field(1, SlabField::MinQuantity, "100");
//! sheet.update_slab_field(1, SlabField::Price, "22.50");
//! assert!(sheet.validate_slabs());
//!
//! let schedule = sheet.parse().unwrap();
//! let price = schedule.resolve_price(Quantity::from_whole(150)).unwrap();
//! assert_eq!(price.display(), "\u{20b9}22.50");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod numeric;
pub mod quantity;
mod wire;

pub mod catalog;
pub mod ledger;
pub mod orders;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use numeric::ParseNumberError;
pub use quantity::Quantity;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::numeric::ParseNumberError;
    pub use crate::quantity::Quantity;

    // Catalog
    pub use crate::catalog::{
        add_slab, remove_slab, update_slab_field, validate_slabs, Item, ItemDraft, PriceSchedule,
        PriceSlab, SlabDraft, SlabField, SlabSheet, ThresholdWarning,
    };

    // Orders
    pub use crate::orders::{Order, OrderLineItem};

    // Ledger
    pub use crate::ledger::{Balance, ChartPoint, PaymentDirection, PaymentHistory, PaymentRecord};
}
