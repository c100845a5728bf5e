//! Money type for rupee amounts.
//!
//! Uses a paise-based integer representation to avoid floating-point
//! precision issues in totals.

use crate::numeric::{format_fixed, parse_fixed, ParseNumberError};
use crate::quantity::Quantity;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The rupee sign used when displaying amounts.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// A rupee amount, stored in paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    paise: i64,
}

impl Money {
    /// Number of fractional digits kept.
    pub const SCALE: u32 = 2;

    /// Create a Money value from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Create a Money value from whole rupees.
    pub fn from_rupees(rupees: i64) -> Self {
        Self {
            paise: rupees * 100,
        }
    }

    /// Parse user-entered text such as `"22.50"`.
    ///
    /// ```
    /// use mandi_commerce::Money;
    /// assert_eq!(Money::parse("49.99").unwrap().paise(), 4999);
    /// assert!(Money::parse("").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseNumberError> {
        parse_fixed(text, Self::SCALE).map(Self::from_paise)
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self { paise: 0 }
    }

    /// Amount in paise.
    pub fn paise(&self) -> i64 {
        self.paise
    }

    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    pub fn is_positive(&self) -> bool {
        self.paise > 0
    }

    pub fn is_negative(&self) -> bool {
        self.paise < 0
    }

    /// Format as a display string (e.g., "₹49.99").
    pub fn display(&self) -> String {
        if self.paise < 0 {
            format!("-{}{}", RUPEE_SYMBOL, format_fixed(-self.paise, Self::SCALE))
        } else {
            format!("{}{}", RUPEE_SYMBOL, self.display_amount())
        }
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format_fixed(self.paise, Self::SCALE)
    }

    /// Try to add another amount, returning None on overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        self.paise.checked_add(other.paise).map(Money::from_paise)
    }

    pub fn checked_sub(&self, other: &Money) -> Option<Money> {
        self.paise.checked_sub(other.paise).map(Money::from_paise)
    }

    /// Multiply a per-unit price by a quantity, rounding half up to the
    /// nearest paisa.
    pub fn times(&self, quantity: Quantity) -> Option<Money> {
        let exact = i128::from(self.paise) * i128::from(quantity.milli());
        let rounded = if exact >= 0 {
            (exact + 500) / 1000
        } else {
            (exact - 500) / 1000
        };
        i64::try_from(rounded).ok().map(Money::from_paise)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        crate::wire::serialize_fixed(self.paise, Self::SCALE, s)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        crate::wire::fixed(d, Self::SCALE).map(Self::from_paise)
    }
}
