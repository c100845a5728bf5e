//! Amount owed to a supplier and the payments that moved it.

use crate::error::CommerceError;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current amount the platform owes the supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub amount_owed: Money,
}

/// Whether a payment added to or subtracted from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentDirection {
    #[default]
    #[serde(rename = "+")]
    Credit,
    #[serde(rename = "-")]
    Debit,
}

impl PaymentDirection {
    pub fn sign(&self) -> &'static str {
        match self {
            PaymentDirection::Credit => "+",
            PaymentDirection::Debit => "-",
        }
    }
}

/// One entry of the payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: Money,
    #[serde(rename = "type", default)]
    pub direction: PaymentDirection,
}

impl PaymentRecord {
    /// e.g. `+₹1500.00`
    pub fn display_amount(&self) -> String {
        format!("{}{}", self.direction.sign(), self.amount.display())
    }
}

/// A point on the payment history chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    /// Short date label, e.g. `Aug 3`.
    pub label: String,
    pub amount: Money,
}

/// Payment history in the order returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentHistory {
    entries: Vec<PaymentRecord>,
}

impl PaymentHistory {
    /// Fewest points worth charting.
    pub const MIN_CHART_POINTS: usize = 2;

    pub fn new(entries: Vec<PaymentRecord>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PaymentRecord] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Net effect of every entry: credits added, debits subtracted.
    pub fn signed_total(&self) -> Result<Money, CommerceError> {
        self.entries.iter().try_fold(Money::zero(), |acc, record| {
            match record.direction {
                PaymentDirection::Credit => acc.checked_add(&record.amount),
                PaymentDirection::Debit => acc.checked_sub(&record.amount),
            }
            .ok_or(CommerceError::Overflow)
        })
    }

    /// Chronological amounts for the trend chart. Empty when there are too
    /// few entries to draw a line.
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        if self.entries.len() < Self::MIN_CHART_POINTS {
            return Vec::new();
        }
        let mut sorted: Vec<&PaymentRecord> = self.entries.iter().collect();
        sorted.sort_by_key(|r| r.date);
        sorted
            .into_iter()
            .map(|r| ChartPoint {
                label: r.date.format("%b %-d").to_string(),
                amount: r.amount,
            })
            .collect()
    }
}
