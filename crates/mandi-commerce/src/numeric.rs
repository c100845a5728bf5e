//! Fixed-point parsing for numbers typed into forms.
//!
//! Quantities and prices are entered as free text. They are parsed into
//! integers of the smallest unit (thousandths of a kilogram, paise) so that
//! totals are exact and independent of summation order.

use thiserror::Error;

/// Why a piece of text could not be used as a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    /// Nothing was entered. Never treated as zero.
    #[error("value is empty")]
    Empty,

    /// Not a non-negative decimal number.
    #[error("not a non-negative number: {0:?}")]
    Invalid(String),

    /// More fractional digits than the unit can hold.
    #[error("{value:?} has more than {max} decimal places")]
    TooPrecise { value: String, max: u32 },

    /// Does not fit the fixed-point range.
    #[error("{0:?} is too large")]
    OutOfRange(String),
}

/// Parse decimal text into an integer scaled by `10^scale`.
///
/// Trailing fractional zeros beyond the scale are accepted (`"2.500"` at
/// scale 2 is `250`); any other extra digit is rejected.
pub(crate) fn parse_fixed(input: &str, scale: u32) -> Result<i64, ParseNumberError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
        return Err(ParseNumberError::Invalid(text.to_string()));
    }

    let frac = frac.trim_end_matches('0');
    if frac.len() > scale as usize {
        return Err(ParseNumberError::TooPrecise {
            value: text.to_string(),
            max: scale,
        });
    }

    let out_of_range = || ParseNumberError::OutOfRange(text.to_string());
    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| out_of_range())?
    };
    let frac_value: i64 = if frac.is_empty() {
        0
    } else {
        let raw: i64 = frac.parse().map_err(|_| out_of_range())?;
        raw * 10_i64.pow(scale - frac.len() as u32)
    };

    whole_value
        .checked_mul(10_i64.pow(scale))
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(out_of_range)
}

/// Like [`parse_fixed`], but digits beyond `scale` are rounded half-up
/// instead of rejected.
pub(crate) fn round_fixed(input: &str, scale: u32) -> Result<i64, ParseNumberError> {
    let text = input.trim();
    let Some((whole, frac)) = text.split_once('.') else {
        return parse_fixed(text, scale);
    };
    if frac.len() <= scale as usize || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return parse_fixed(text, scale);
    }

    let (kept, dropped) = frac.split_at(scale as usize);
    let whole = if whole.is_empty() { "0" } else { whole };
    let truncated = parse_fixed(&format!("{whole}.{kept}"), scale)?;
    if dropped.as_bytes()[0] >= b'5' {
        truncated
            .checked_add(1)
            .ok_or_else(|| ParseNumberError::OutOfRange(text.to_string()))
    } else {
        Ok(truncated)
    }
}

/// Format a scaled integer with exactly `scale` fractional digits.
pub(crate) fn format_fixed(value: i64, scale: u32) -> String {
    let factor = 10_i64.pow(scale);
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let whole = abs / factor as u64;
    if scale == 0 {
        return format!("{sign}{whole}");
    }
    let frac = abs % factor as u64;
    format!("{sign}{whole}.{frac:0width$}", width = scale as usize)
}

/// Format a scaled integer with insignificant fractional zeros removed.
pub(crate) fn format_fixed_trimmed(value: i64, scale: u32) -> String {
    let full = format_fixed(value, scale);
    if full.contains('.') {
        full.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        full
    }
}
