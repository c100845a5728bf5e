//! Validated tiered pricing.

use crate::catalog::{SlabDraft, SlabField};
use crate::error::CommerceError;
use crate::money::{Money, RUPEE_SYMBOL};
use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};

/// One validated tier: at or above `min_quantity`, each unit costs `price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSlab {
    pub min_quantity: Quantity,
    pub price: Money,
}

impl PriceSlab {
    pub fn new(min_quantity: Quantity, price: Money) -> Self {
        Self {
            min_quantity,
            price,
        }
    }

    /// Parse a raw row. `index` is only used for error reporting.
    pub fn parse(index: usize, draft: &SlabDraft) -> Result<Self, CommerceError> {
        let min_quantity = parse_field(index, SlabField::MinQuantity, draft, Quantity::parse)?;
        let price = parse_field(index, SlabField::Price, draft, Money::parse)?;
        if !price.is_positive() {
            return Err(CommerceError::NonPositivePrice { index });
        }
        Ok(Self::new(min_quantity, price))
    }

    /// Back to canonical form text.
    pub fn to_draft(&self) -> SlabDraft {
        SlabDraft::new(self.min_quantity.to_text(), self.price.display_amount())
    }

    /// Item-card rendering, e.g. `10+ kg: ₹5.00/kg`.
    pub fn label(&self) -> String {
        format!(
            "{}+ kg: {}{}/kg",
            self.min_quantity,
            RUPEE_SYMBOL,
            self.price.display_amount()
        )
    }
}

fn parse_field<T>(
    index: usize,
    field: SlabField,
    draft: &SlabDraft,
    parse: impl Fn(&str) -> Result<T, crate::numeric::ParseNumberError>,
) -> Result<T, CommerceError> {
    let raw = draft.field(field);
    if raw.trim().is_empty() {
        return Err(CommerceError::EmptySlabField { index, field });
    }
    parse(raw).map_err(|source| CommerceError::InvalidSlabField {
        index,
        field,
        source,
    })
}

/// Something odd about a schedule's thresholds. Reported, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdWarning {
    /// Two slabs share the same minimum quantity.
    Duplicate {
        first: usize,
        second: usize,
        min_quantity: Quantity,
    },
    /// A slab's threshold is lower than the one submitted before it.
    OutOfOrder { index: usize },
}

/// An item's full price schedule, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSchedule {
    slabs: Vec<PriceSlab>,
}

impl PriceSchedule {
    pub fn new(slabs: Vec<PriceSlab>) -> Self {
        Self { slabs }
    }

    /// Parse raw rows, reporting the first bad slab.
    pub fn from_drafts(drafts: &[SlabDraft]) -> Result<Self, CommerceError> {
        drafts
            .iter()
            .enumerate()
            .map(|(i, d)| PriceSlab::parse(i, d))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn slabs(&self) -> &[PriceSlab] {
        &self.slabs
    }

    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }

    /// Canonical text rows, e.g. for re-opening the update form.
    pub fn to_drafts(&self) -> Vec<SlabDraft> {
        self.slabs.iter().map(PriceSlab::to_draft).collect()
    }

    /// The slab that applies to `quantity`: the greatest threshold not
    /// exceeding it. Among equal thresholds the earliest slab wins.
    pub fn applicable_slab(&self, quantity: Quantity) -> Option<&PriceSlab> {
        self.slabs
            .iter()
            .filter(|s| s.min_quantity <= quantity)
            .fold(None, |best: Option<&PriceSlab>, s| match best {
                Some(b) if b.min_quantity >= s.min_quantity => Some(b),
                _ => Some(s),
            })
    }

    /// Unit price for `quantity`.
    pub fn resolve_price(&self, quantity: Quantity) -> Result<Money, CommerceError> {
        if let Some(slab) = self.applicable_slab(quantity) {
            return Ok(slab.price);
        }
        match self.lowest_threshold() {
            Some(lowest) => Err(CommerceError::BelowMinimumQuantity {
                quantity: quantity.to_text(),
                lowest: lowest.to_text(),
            }),
            None => Err(CommerceError::EmptySchedule),
        }
    }

    /// Price of `quantity` units at the resolved slab.
    pub fn line_total(&self, quantity: Quantity) -> Result<Money, CommerceError> {
        self.resolve_price(quantity)?
            .times(quantity)
            .ok_or(CommerceError::Overflow)
    }

    /// Smallest orderable quantity.
    pub fn lowest_threshold(&self) -> Option<Quantity> {
        self.slabs.iter().map(|s| s.min_quantity).min()
    }

    /// Duplicate and decreasing thresholds.
    pub fn threshold_warnings(&self) -> Vec<ThresholdWarning> {
        let mut warnings = Vec::new();
        for (i, slab) in self.slabs.iter().enumerate() {
            if let Some(first) = self.slabs[..i]
                .iter()
                .position(|s| s.min_quantity == slab.min_quantity)
            {
                warnings.push(ThresholdWarning::Duplicate {
                    first,
                    second: i,
                    min_quantity: slab.min_quantity,
                });
            } else if i > 0 && slab.min_quantity < self.slabs[i - 1].min_quantity {
                warnings.push(ThresholdWarning::OutOfOrder { index: i });
            }
        }
        warnings
    }
}
