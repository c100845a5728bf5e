//! Serde helpers for numeric fields the remote API sends either as JSON
//! numbers or as numeric strings.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Decimal text read off the wire, and whether it arrived as a JSON float.
struct WireDecimal {
    text: String,
    float: bool,
}

impl WireDecimal {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            float: false,
        }
    }
}

/// Visitor that turns a JSON number or string into its decimal text.
struct DecimalTextVisitor;

impl<'de> Visitor<'de> for DecimalTextVisitor {
    type Value = WireDecimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<WireDecimal, E> {
        Ok(WireDecimal::text(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<WireDecimal, E> {
        Ok(WireDecimal::text(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<WireDecimal, E> {
        Ok(WireDecimal::text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<WireDecimal, E> {
        Ok(WireDecimal::text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<WireDecimal, E> {
        if !v.is_finite() {
            return Err(E::custom("number is not finite"));
        }
        // `Display` gives the shortest text that reads back as `v`, never
        // exponent notation.
        Ok(WireDecimal {
            text: v.to_string(),
            float: true,
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<WireDecimal, E> {
        Ok(WireDecimal::text(""))
    }

    fn visit_none<E: de::Error>(self) -> Result<WireDecimal, E> {
        Ok(WireDecimal::text(""))
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<WireDecimal, D::Error> {
        d.deserialize_any(DecimalTextVisitor)
    }
}

/// Deserialize a number-or-string field into text. `null` becomes `""`.
pub(crate) fn decimal_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(d.deserialize_any(DecimalTextVisitor)?.text)
}

/// Deserialize a number-or-string field and parse it at a fixed scale.
///
/// JSON floats carry binary noise (`0.30000000000000004`), so they are
/// rounded half-up to `scale`. Strings must fit the scale exactly.
pub(crate) fn fixed<'de, D: Deserializer<'de>>(d: D, scale: u32) -> Result<i64, D::Error> {
    let wire = d.deserialize_any(DecimalTextVisitor)?;
    let parsed = if wire.float {
        crate::numeric::round_fixed(&wire.text, scale)
    } else {
        crate::numeric::parse_fixed(&wire.text, scale)
    };
    parsed.map_err(de::Error::custom)
}

/// Serialize a scaled integer as a JSON number.
pub(crate) fn serialize_fixed<S: serde::Serializer>(
    value: i64,
    scale: u32,
    s: S,
) -> Result<S::Ok, S::Error> {
    if value % 10_i64.pow(scale) == 0 {
        s.serialize_i64(value / 10_i64.pow(scale))
    } else {
        s.serialize_f64(value as f64 / 10_i64.pow(scale) as f64)
    }
}
