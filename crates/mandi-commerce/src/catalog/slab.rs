//! Editable price-slab rows.
//!
//! A [`SlabDraft`] is exactly what the supplier typed: two strings. The
//! sheet operations never interpret them; [`SlabSheet::parse`] is the single
//! place where they become numbers.

use crate::catalog::PriceSchedule;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One editable row of a price schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabDraft {
    /// Minimum quantity, as entered.
    #[serde(default, deserialize_with = "crate::wire::decimal_text")]
    pub min_quantity: String,
    /// Unit price, as entered.
    #[serde(default, deserialize_with = "crate::wire::decimal_text")]
    pub price: String,
}

impl SlabDraft {
    /// An empty row, as added by the "add slab" button.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(min_quantity: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            min_quantity: min_quantity.into(),
            price: price.into(),
        }
    }

    /// Get a field's raw text.
    pub fn field(&self, field: SlabField) -> &str {
        match field {
            SlabField::MinQuantity => &self.min_quantity,
            SlabField::Price => &self.price,
        }
    }

    /// Both fields hold something.
    pub fn is_complete(&self) -> bool {
        !self.min_quantity.trim().is_empty() && !self.price.trim().is_empty()
    }
}

/// The two editable fields of a slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlabField {
    MinQuantity,
    Price,
}

impl SlabField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlabField::MinQuantity => "minQuantity",
            SlabField::Price => "price",
        }
    }
}

impl fmt::Display for SlabField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append one empty slab.
pub fn add_slab(mut slabs: Vec<SlabDraft>) -> Vec<SlabDraft> {
    slabs.push(SlabDraft::empty());
    slabs
}

/// Replace one field of the slab at `index`.
///
/// # Panics
/// Panics if `index` is out of range.
pub fn update_slab_field(
    mut slabs: Vec<SlabDraft>,
    index: usize,
    field: SlabField,
    value: impl Into<String>,
) -> Vec<SlabDraft> {
    let len = slabs.len();
    let slab = slabs
        .get_mut(index)
        .unwrap_or_else(|| panic!("slab index {index} out of range (len {len})"));
    match field {
        SlabField::MinQuantity => slab.min_quantity = value.into(),
        SlabField::Price => slab.price = value.into(),
    }
    slabs
}

/// Remove the slab at `index`, keeping the others in order.
///
/// # Panics
/// Panics if `index` is out of range.
pub fn remove_slab(mut slabs: Vec<SlabDraft>, index: usize) -> Vec<SlabDraft> {
    let len = slabs.len();
    assert!(index < len, "slab index {index} out of range (len {len})");
    slabs.remove(index);
    slabs
}

/// True when no slab has an empty field. An empty list is valid.
pub fn validate_slabs(slabs: &[SlabDraft]) -> bool {
    slabs.iter().all(SlabDraft::is_complete)
}

/// The slab rows of an add-item or update form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlabSheet {
    slabs: Vec<SlabDraft>,
}

impl SlabSheet {
    /// A sheet with one empty row, ready for input.
    pub fn new() -> Self {
        Self {
            slabs: vec![SlabDraft::empty()],
        }
    }

    /// A sheet pre-filled with an item's existing slabs.
    pub fn from_slabs(slabs: Vec<SlabDraft>) -> Self {
        Self { slabs }
    }

    pub fn slabs(&self) -> &[SlabDraft] {
        &self.slabs
    }

    pub fn len(&self) -> usize {
        self.slabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }

    /// Append an empty row.
    pub fn add_slab(&mut self) {
        self.slabs.push(SlabDraft::empty());
    }

    /// Replace one field of the row at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn update_slab_field(&mut self, index: usize, field: SlabField, value: impl Into<String>) {
        let slabs = std::mem::take(&mut self.slabs);
        self.slabs = update_slab_field(slabs, index, field, value);
    }

    /// Remove the row at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_slab(&mut self, index: usize) {
        let slabs = std::mem::take(&mut self.slabs);
        self.slabs = remove_slab(slabs, index);
    }

    /// True when every row has both fields filled in.
    pub fn validate_slabs(&self) -> bool {
        validate_slabs(&self.slabs)
    }

    /// Parse every row into a typed schedule.
    pub fn parse(&self) -> Result<PriceSchedule, CommerceError> {
        PriceSchedule::from_drafts(&self.slabs)
    }

    pub fn into_inner(self) -> Vec<SlabDraft> {
        self.slabs
    }
}

impl From<Vec<SlabDraft>> for SlabSheet {
    fn from(slabs: Vec<SlabDraft>) -> Self {
        Self::from_slabs(slabs)
    }
}
