//! Phone numbers.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 10-digit Indian mobile number, stored without country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const DIGITS: usize = 10;
    const COUNTRY_CODE: &'static str = "+91";

    /// Parse user input. Spaces and dashes are ignored and a leading `+91`
    /// is stripped.
    pub fn parse(input: &str) -> Result<Self, AuthError> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        let local = compact
            .strip_prefix(Self::COUNTRY_CODE)
            .unwrap_or(&compact);
        if local.len() == Self::DIGITS && local.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(local.to_string()))
        } else {
            Err(AuthError::InvalidPhoneNumber(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// With country code, as phone auth providers expect it.
    pub fn international(&self) -> String {
        format!("{}{}", Self::COUNTRY_CODE, self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = AuthError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PhoneNumber> for String {
    fn from(p: PhoneNumber) -> Self {
        p.0
    }
}
