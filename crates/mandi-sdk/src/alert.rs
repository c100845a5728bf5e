//! User-facing failure messages.

use crate::SdkError;
use mandi_auth::AuthError;
use mandi_commerce::CommerceError;
use mandi_i18n::Translator;

/// The workflow that failed, which picks the fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    SignUp,
    Verify,
    FetchItems,
    AddItem,
    UpdatePriceSlabs,
    RemoveItem,
    FetchOrders,
    FetchBalance,
}

impl Operation {
    /// Message key shown when the server gave no message of its own.
    pub fn fallback_key(&self) -> &'static str {
        match self {
            Operation::Login | Operation::Verify => "authError",
            Operation::SignUp => "signupFailed",
            Operation::FetchItems => "fetchItemsFailed",
            Operation::AddItem => "failedToAddItem",
            Operation::UpdatePriceSlabs => "failedToUpdatePriceSlabs",
            Operation::RemoveItem => "removeItemFailed",
            Operation::FetchOrders => "errorFetchingOrders",
            Operation::FetchBalance => "errorOccurred",
        }
    }
}

/// A title and message ready for an alert dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAlert {
    pub title: String,
    pub message: String,
}

impl SdkError {
    /// Translate this error for display.
    ///
    /// Session and input errors map to their own messages. Remote failures
    /// show the server's message when it sent one, otherwise the fallback for
    /// `operation`.
    pub fn to_alert(&self, operation: Operation, t: &Translator) -> UserAlert {
        let key = match self {
            SdkError::PhoneNotFound => Some("phoneNotFound"),
            SdkError::NotRegistered(_) => Some("userNotRegistered"),
            SdkError::NotVerified => Some("notVerified"),
            SdkError::Commerce(CommerceError::InvalidSlabField { .. })
            | SdkError::Auth(AuthError::InvalidPhoneNumber(_)) => Some("invalidNumber"),
            SdkError::Commerce(
                CommerceError::BelowMinimumQuantity { .. } | CommerceError::EmptySchedule,
            ) => Some("belowMinimumQuantity"),
            e if e.is_validation() => Some("allFieldsRequired"),
            _ => None,
        };
        let message = match (key, self.server_message()) {
            (Some(key), _) => t.t(key).to_string(),
            (None, Some(server)) => server.to_string(),
            (None, None) => t.t(operation.fallback_key()).to_string(),
        };
        UserAlert {
            title: t.t("error").to_string(),
            message,
        }
    }
}
