//! The supplier remote API.

mod http;
mod memory;

pub use http::HttpSupplierApi;
pub use memory::InMemorySupplierApi;

use crate::SdkResult;
use async_trait::async_trait;
use mandi_auth::{PhoneNumber, SignUpForm, UserType};
use mandi_commerce::catalog::{Item, PriceSchedule};
use mandi_commerce::ledger::{Balance, PaymentHistory};
use mandi_commerce::orders::Order;
use mandi_commerce::ItemId;
use serde::{Deserialize, Serialize};

/// Endpoint paths, relative to the configured base URL.
pub mod paths {
    pub const IS_USER: &str = "/api/auth/isUser";
    pub const SIGN_UP: &str = "/api/auth/signup";
    pub const VERIFIED: &str = "/api/supplier/verified";
    pub const GET_ITEMS: &str = "/api/supplier/get-items";
    pub const ADD_ITEM: &str = "/api/supplier/add-item";
    pub const UPDATE: &str = "/api/supplier/update";
    pub const REMOVE_ITEM: &str = "/api/supplier/remove-item";
    pub const PAST_ORDERS: &str = "/api/supplier/past-orders";
    pub const BALANCE: &str = "/api/supplier/supplier-balance";
    pub const HISTORY: &str = "/api/supplier/supplier-history";
}

/// Body of an add-item call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub phone_number: PhoneNumber,
    pub item_name: String,
    pub quality: String,
    pub price_slabs: PriceSchedule,
    #[serde(default)]
    pub item_image: Option<String>,
}

/// Remote operations the storefront depends on.
///
/// Every call is made once; retrying is left to the caller.
#[async_trait]
pub trait SupplierApi: Send + Sync {
    /// Whether `phone` has an account of `user_type`.
    async fn is_user(&self, phone: &PhoneNumber, user_type: UserType) -> SdkResult<bool>;

    async fn sign_up(&self, form: &SignUpForm) -> SdkResult<()>;

    /// Whether the platform has verified the supplier.
    async fn is_verified(&self, phone: &PhoneNumber) -> SdkResult<bool>;

    async fn list_items(&self, phone: &PhoneNumber) -> SdkResult<Vec<Item>>;

    async fn add_item(&self, item: &NewItem) -> SdkResult<()>;

    /// Replace an item's whole schedule.
    async fn update_price_slabs(&self, item_id: &ItemId, slabs: &PriceSchedule) -> SdkResult<()>;

    async fn remove_item(&self, phone: &PhoneNumber, item_id: &ItemId) -> SdkResult<()>;

    async fn past_orders(&self, phone: &PhoneNumber) -> SdkResult<Vec<Order>>;

    async fn balance(&self, phone: &PhoneNumber) -> SdkResult<Balance>;

    async fn payment_history(&self, phone: &PhoneNumber) -> SdkResult<PaymentHistory>;
}
