//! Supplier identity for Mandi.
//!
//! Suppliers are identified by phone number. Registration goes through a
//! sign-up form; a separate platform-side verification gates listing items.

mod error;
mod phone;
mod supplier;

pub use error::AuthError;
pub use phone::PhoneNumber;
pub use supplier::{Address, SignUpForm, UserType, VerificationStatus};
