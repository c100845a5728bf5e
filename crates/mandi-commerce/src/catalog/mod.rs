//! Item catalog module.
//!
//! Contains items, editable slab rows and validated price schedules.

mod item;
mod schedule;
mod slab;

pub use item::{Item, ItemDraft};
pub use schedule::{PriceSchedule, PriceSlab, ThresholdWarning};
pub use slab::{
    add_slab, remove_slab, update_slab_field, validate_slabs, SlabDraft, SlabField, SlabSheet,
};
