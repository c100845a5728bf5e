//! Order types.

use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use crate::quantity::Quantity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of an order.
///
/// `price` is the unit price captured when the order was placed, not a live
/// reference to the item's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Canonical item name.
    pub item_name: String,
    pub quantity: Quantity,
    pub price: Money,
}

impl OrderLineItem {
    pub fn new(item_name: impl Into<String>, quantity: Quantity, price: Money) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            price,
        }
    }

    /// `quantity * price`, rounded to the paisa.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price.times(self.quantity).ok_or(CommerceError::Overflow)
    }
}

/// An order as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Sum of all line totals.
    ///
    /// Each line is rounded before summing, so the result does not depend on
    /// line order.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.items.iter().try_fold(Money::zero(), |acc, line| {
            acc.checked_add(&line.line_total()?)
                .ok_or(CommerceError::Overflow)
        })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, qty: &str, price: &str) -> OrderLineItem {
        OrderLineItem::new(
            name,
            Quantity::parse(qty).unwrap(),
            Money::parse(price).unwrap(),
        )
    }

    fn order(items: Vec<OrderLineItem>) -> Order {
        Order {
            id: OrderId::new("ord-1"),
            items,
            created_at: None,
            completed_at: None,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line("Tomato", "12", "30").line_total().unwrap().paise(), 36_000);
        assert_eq!(line("Onion", "2.5", "18.40").line_total().unwrap().paise(), 4_600);
    }

    #[test]
    fn test_order_total() {
        let o = order(vec![line("Tomato", "12", "30"), line("Onion", "2.5", "18.40")]);
        assert_eq!(o.total().unwrap().paise(), 40_600);
        assert_eq!(order(vec![]).total().unwrap(), Money::zero());
    }

    #[test]
    fn test_order_total_idempotent_and_order_independent() {
        let lines = vec![
            line("A", "0.333", "10"),
            line("B", "1.005", "3.33"),
            line("C", "7", "0.99"),
        ];
        let forward = order(lines.clone());
        let mut reversed_lines = lines;
        reversed_lines.reverse();
        let reversed = order(reversed_lines);

        assert_eq!(forward.total().unwrap(), forward.total().unwrap());
        assert_eq!(forward.total().unwrap(), reversed.total().unwrap());
    }

    #[test]
    fn test_order_from_api_json() {
        let json = r#"{
            "_id": "ord-9",
            "items": [{"itemName": "Tomato", "quantity": 5, "price": 20}],
            "createdAt": "2024-08-01T10:00:00.000Z",
            "completedAt": "2024-08-02T10:00:00.000Z"
        }"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert!(o.is_completed());
        assert_eq!(o.item_count(), 1);
        assert_eq!(o.total().unwrap(), Money::from_rupees(100));
    }

    #[test]
    fn test_line_price_float_noise_is_rounded() {
        let json = r#"{
            "_id": "ord-10",
            "items": [{"itemName": "Onion", "quantity": 3, "price": 33.333333333333336}]
        }"#;
        let o: Order = serde_json::from_str(json).unwrap();
        assert_eq!(o.items[0].price.paise(), 3333);
        assert_eq!(o.total().unwrap().paise(), 9999);
    }
}
