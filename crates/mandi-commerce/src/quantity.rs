//! Order quantities in kilograms.

use crate::numeric::{format_fixed_trimmed, parse_fixed, ParseNumberError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A non-negative quantity, stored in thousandths of a kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity {
    milli: i64,
}

impl Quantity {
    /// Number of fractional digits kept.
    pub const SCALE: u32 = 3;

    /// Create a quantity from thousandths of a unit.
    pub fn from_milli(milli: i64) -> Self {
        Self { milli }
    }

    /// Create a quantity from a whole number of units.
    pub fn from_whole(units: i64) -> Self {
        Self {
            milli: units * 1000,
        }
    }

    /// Parse user-entered text, e.g. `"12.5"`.
    pub fn parse(text: &str) -> Result<Self, ParseNumberError> {
        parse_fixed(text, Self::SCALE).map(Self::from_milli)
    }

    /// Thousandths of a unit.
    pub fn milli(&self) -> i64 {
        self.milli
    }

    pub fn is_zero(&self) -> bool {
        self.milli == 0
    }

    /// Canonical decimal text without trailing zeros (`"2.5"`, `"10"`).
    pub fn to_text(&self) -> String {
        format_fixed_trimmed(self.milli, Self::SCALE)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        crate::wire::serialize_fixed(self.milli, Self::SCALE, s)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        crate::wire::fixed(d, Self::SCALE).map(Self::from_milli)
    }
}
