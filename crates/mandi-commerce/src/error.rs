//! Commerce error types.

use crate::catalog::SlabField;
use crate::numeric::ParseNumberError;
use thiserror::Error;

/// Errors that can occur in inventory and pricing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// A slab row has an empty field.
    #[error("Price slab {index}: {field} is required")]
    EmptySlabField { index: usize, field: SlabField },

    /// A slab field is not a usable number.
    #[error("Price slab {index}: invalid {field}: {source}")]
    InvalidSlabField {
        index: usize,
        field: SlabField,
        #[source]
        source: ParseNumberError,
    },

    /// A slab price parsed to zero.
    #[error("Price slab {index}: price must be greater than zero")]
    NonPositivePrice { index: usize },

    /// Requested quantity is below every threshold of the schedule.
    #[error("Quantity {quantity} is below the minimum order quantity ({lowest})")]
    BelowMinimumQuantity { quantity: String, lowest: String },

    /// The schedule has no slabs to price against.
    #[error("Price schedule has no slabs")]
    EmptySchedule,

    /// Item name is missing from an item form.
    #[error("Item name is required")]
    MissingItemName,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Check if this error comes from incomplete or malformed form input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::EmptySlabField { .. }
                | CommerceError::InvalidSlabField { .. }
                | CommerceError::NonPositivePrice { .. }
                | CommerceError::MissingItemName
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CommerceError::EmptySlabField {
            index: 2,
            field: SlabField::Price,
        };
        assert_eq!(err.to_string(), "Price slab 2: price is required");

        let err = CommerceError::BelowMinimumQuantity {
            quantity: "5".to_string(),
            lowest: "10".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Quantity 5 is below the minimum order quantity (10)"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(CommerceError::MissingItemName.is_validation());
        assert!(CommerceError::NonPositivePrice { index: 0 }.is_validation());
        assert!(!CommerceError::Overflow.is_validation());
        assert!(!CommerceError::EmptySchedule.is_validation());
    }
}
