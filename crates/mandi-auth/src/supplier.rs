//! Supplier registration types.

use crate::{AuthError, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Account type sent with auth calls. This client only signs in suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Supplier,
    Buyer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Supplier => "supplier",
            UserType::Buyer => "buyer",
        }
    }
}

impl FromStr for UserType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "supplier" => Ok(UserType::Supplier),
            "buyer" => Ok(UserType::Buyer),
            _ => Err(()),
        }
    }
}

/// Shop address, typically filled from reverse geocoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub place: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Address {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// The supplier sign-up form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub name: String,
    pub phone_number: PhoneNumber,
    pub user_type: UserType,
    pub shop_name: String,
    pub address: Address,
    /// Public URL of the supplier's photo.
    pub user_image: String,
    /// Public URL of the identity document photo.
    pub id_image: String,
}

impl SignUpForm {
    pub fn new(phone_number: PhoneNumber) -> Self {
        Self {
            name: String::new(),
            phone_number,
            user_type: UserType::Supplier,
            shop_name: String::new(),
            address: Address::default(),
            user_image: String::new(),
            id_image: String::new(),
        }
    }

    /// Name, shop name and both images are required; the address is not.
    pub fn validate(&self) -> Result<(), AuthError> {
        let required = [
            ("name", &self.name),
            ("shopName", &self.shop_name),
            ("userImage", &self.user_image),
            ("idImage", &self.id_image),
        ];
        match required.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((field, _)) => Err(AuthError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// Platform-side verification answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VerificationStatus {
    #[serde(default)]
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SignUpForm {
        SignUpForm {
            name: "Ravi".to_string(),
            shop_name: "Ravi Traders".to_string(),
            user_image: "https://img.example/u.jpg".to_string(),
            id_image: "https://img.example/id.jpg".to_string(),
            ..SignUpForm::new(PhoneNumber::parse("9876543210").unwrap())
        }
    }

    #[test]
    fn test_validate_complete() {
        assert_eq!(complete_form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = complete_form();
        form.shop_name = " ".to_string();
        form.id_image.clear();
        assert_eq!(form.validate(), Err(AuthError::MissingField("shopName")));
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(complete_form()).unwrap();
        assert_eq!(value["phoneNumber"], "9876543210");
        assert_eq!(value["userType"], "supplier");
        assert_eq!(value["shopName"], "Ravi Traders");
        assert_eq!(value["address"]["postalCode"], "");
        assert!(value["address"]["latitude"].is_null());
    }

    #[test]
    fn test_verification_status() {
        let v: VerificationStatus = serde_json::from_str(r#"{"verified": true}"#).unwrap();
        assert!(v.verified);
        let v: VerificationStatus = serde_json::from_str("{}").unwrap();
        assert!(!v.verified);
    }
}
