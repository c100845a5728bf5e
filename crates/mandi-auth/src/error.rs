//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Phone number is not a 10-digit Indian mobile number.
    #[error("invalid phone number: {0:?}")]
    InvalidPhoneNumber(String),

    /// A required sign-up field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// No supplier account exists for the phone number.
    #[error("user not registered")]
    NotRegistered,

    /// The supplier has not been verified by the platform.
    #[error("supplier not verified")]
    NotVerified,
}

impl AuthError {
    /// Check if this error comes from form input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidPhoneNumber(_) | AuthError::MissingField(_)
        )
    }
}
