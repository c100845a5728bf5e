//! Inventory items.

use crate::catalog::{PriceSchedule, SlabDraft, SlabSheet};
use crate::error::CommerceError;
use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// An item as listed by the remote API.
///
/// The client copy is transient; the remote API owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-issued identifier.
    #[serde(rename = "_id")]
    pub id: ItemId,
    /// Canonical (English) name, also the translation key.
    pub item_name: String,
    /// Free-text quality descriptor.
    #[serde(default)]
    pub quality: String,
    /// Slabs in submission order, kept as text until parsed.
    #[serde(default)]
    pub price_slabs: Vec<SlabDraft>,
    /// Public URL of the uploaded image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_image: Option<String>,
}

impl Item {
    /// Parse the stored slabs into a schedule.
    pub fn schedule(&self) -> Result<PriceSchedule, CommerceError> {
        PriceSchedule::from_drafts(&self.price_slabs)
    }

    /// Open the item's slabs for editing.
    pub fn slab_sheet(&self) -> SlabSheet {
        SlabSheet::from_slabs(self.price_slabs.clone())
    }

    pub fn has_image(&self) -> bool {
        self.item_image.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// The add-item form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub item_name: String,
    pub quality: String,
    pub price_slabs: SlabSheet,
    pub item_image: Option<String>,
}

impl ItemDraft {
    /// A blank form with one empty slab row.
    pub fn new() -> Self {
        Self {
            price_slabs: SlabSheet::new(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = name.into();
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.item_image = Some(url.into());
        self
    }

    pub fn with_slabs(mut self, slabs: SlabSheet) -> Self {
        self.price_slabs = slabs;
        self
    }

    /// True when the name is present and every slab row is filled in.
    pub fn is_complete(&self) -> bool {
        !self.item_name.trim().is_empty() && self.price_slabs.validate_slabs()
    }

    /// Check completeness, then parse the schedule.
    pub fn validate(&self) -> Result<PriceSchedule, CommerceError> {
        if self.item_name.trim().is_empty() {
            return Err(CommerceError::MissingItemName);
        }
        self.price_slabs.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SlabField;

    #[test]
    fn test_item_from_api_json() {
        let json = r#"{
            "_id": "66b1",
            "itemName": "Tomato",
            "quality": "A grade",
            "priceSlabs": [{"minQuantity": 10, "price": 30}, {"minQuantity": "50", "price": "28"}],
            "itemImage": "https://img.example/t.jpg"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "66b1");
        assert_eq!(item.item_name, "Tomato");
        assert!(item.has_image());
        let schedule = item.schedule().unwrap();
        assert_eq!(schedule.slabs().len(), 2);
    }

    #[test]
    fn test_item_missing_optional_fields() {
        let item: Item = serde_json::from_str(r#"{"_id": "1", "itemName": "Onion"}"#).unwrap();
        assert!(item.price_slabs.is_empty());
        assert!(!item.has_image());
        assert!(item.schedule().unwrap().is_empty());
    }

    #[test]
    fn test_draft_validation() {
        let draft = ItemDraft::new();
        assert!(!draft.is_complete());
        assert_eq!(draft.validate(), Err(CommerceError::MissingItemName));

        let mut slabs = SlabSheet::new();
        slabs.update_slab_field(0, SlabField::MinQuantity, "10");
        let draft = ItemDraft::new().with_name("Potato").with_slabs(slabs.clone());
        assert!(!draft.is_complete());
        assert!(draft.validate().is_err());

        slabs.update_slab_field(0, SlabField::Price, "18");
        let draft = draft.with_slabs(slabs);
        assert!(draft.is_complete());
        assert_eq!(draft.validate().unwrap().slabs().len(), 1);
    }
}
