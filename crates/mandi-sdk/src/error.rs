//! SDK error types.

use mandi_auth::AuthError;
use mandi_cache::CacheError;
use mandi_commerce::CommerceError;
use mandi_data::FetchError;
use mandi_i18n::I18nError;
use thiserror::Error;

/// Errors raised by storefront workflows.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Form input or pricing failure.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Identity input failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Session storage failure.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Translation or message file failure.
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Remote API failure, including non-2xx responses.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The operation needs the supplier's phone number and none is stored.
    #[error("Phone number not found in session")]
    PhoneNotFound,

    /// The phone number has no supplier account.
    #[error("Phone number {0} is not registered")]
    NotRegistered(String),

    /// The platform has not verified the supplier yet.
    #[error("Supplier account is not verified")]
    NotVerified,
}

impl SdkError {
    /// HTTP status of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Fetch(e) => e.status(),
            _ => None,
        }
    }

    /// The message the server sent with a failed response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SdkError::Fetch(FetchError::HttpError { message, .. }) if !message.is_empty() => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Check if this error comes from incomplete or malformed input.
    pub fn is_validation(&self) -> bool {
        match self {
            SdkError::Commerce(e) => e.is_validation(),
            SdkError::Auth(e) => e.is_validation(),
            _ => false,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
