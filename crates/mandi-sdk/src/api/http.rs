//! [`SupplierApi`] over HTTPS.

use super::{paths, NewItem, SupplierApi};
use crate::config::ApiConfig;
use crate::{SdkError, SdkResult};
use async_trait::async_trait;
use mandi_auth::{PhoneNumber, SignUpForm, UserType, VerificationStatus};
use mandi_commerce::catalog::{Item, PriceSchedule};
use mandi_commerce::ledger::{Balance, PaymentHistory};
use mandi_commerce::orders::Order;
use mandi_commerce::ItemId;
use mandi_data::{FetchClient, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneBody<'a> {
    phone_number: &'a PhoneNumber,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IsUserBody<'a> {
    phone_number: &'a PhoneNumber,
    user_type: UserType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    item_id: &'a ItemId,
    price_slabs: &'a PriceSchedule,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveBody<'a> {
    phone_number: &'a PhoneNumber,
    item_id: &'a ItemId,
}

#[derive(Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrdersEnvelope {
    #[serde(default)]
    past_orders: Vec<Order>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryEnvelope {
    #[serde(default)]
    payment_history: PaymentHistory,
}

/// The production remote API.
#[derive(Debug, Clone)]
pub struct HttpSupplierApi {
    client: FetchClient,
}

impl HttpSupplierApi {
    pub fn new(config: &ApiConfig) -> SdkResult<Self> {
        let client = FetchClient::with_timeout(Duration::from_secs(config.timeout_secs))?
            .with_base_url(config.base_url.clone())
            .with_default_header("Accept", "application/json");
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: FetchClient) -> Self {
        Self { client }
    }

    async fn post<B: Serialize + Sync + ?Sized>(&self, path: &str, body: &B) -> SdkResult<Response> {
        let response = self.client.post(path).json(body)?.send().await?;
        log_failure(path, &response);
        Ok(response.error_for_status()?)
    }

    async fn put<B: Serialize + Sync + ?Sized>(&self, path: &str, body: &B) -> SdkResult<Response> {
        let response = self.client.put(path).json(body)?.send().await?;
        log_failure(path, &response);
        Ok(response.error_for_status()?)
    }
}

fn log_failure(path: &str, response: &Response) {
    if !response.is_success() {
        tracing::warn!(path, status = response.status, "Remote call failed");
    }
}

/// `Ok(None)` for a 404, the API's way of saying "no such account".
fn found(result: SdkResult<Response>) -> SdkResult<Option<Response>> {
    match result {
        Ok(response) => Ok(Some(response)),
        Err(SdkError::Fetch(e)) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl SupplierApi for HttpSupplierApi {
    async fn is_user(&self, phone: &PhoneNumber, user_type: UserType) -> SdkResult<bool> {
        let body = IsUserBody {
            phone_number: phone,
            user_type,
        };
        Ok(found(self.post(paths::IS_USER, &body).await)?.is_some())
    }

    async fn sign_up(&self, form: &SignUpForm) -> SdkResult<()> {
        let response = self.post(paths::SIGN_UP, form).await?;
        if response.status != 201 {
            tracing::warn!(status = response.status, "Unexpected sign-up status");
        }
        Ok(())
    }

    async fn is_verified(&self, phone: &PhoneNumber) -> SdkResult<bool> {
        let body = PhoneBody {
            phone_number: phone,
        };
        match found(self.post(paths::VERIFIED, &body).await)? {
            Some(response) => Ok(response.json::<VerificationStatus>()?.verified),
            None => Ok(false),
        }
    }

    async fn list_items(&self, phone: &PhoneNumber) -> SdkResult<Vec<Item>> {
        let body = PhoneBody {
            phone_number: phone,
        };
        let envelope: ItemsEnvelope = self.post(paths::GET_ITEMS, &body).await?.json()?;
        Ok(envelope.items)
    }

    async fn add_item(&self, item: &NewItem) -> SdkResult<()> {
        self.post(paths::ADD_ITEM, item).await?;
        Ok(())
    }

    async fn update_price_slabs(&self, item_id: &ItemId, slabs: &PriceSchedule) -> SdkResult<()> {
        let body = UpdateBody {
            item_id,
            price_slabs: slabs,
        };
        self.put(paths::UPDATE, &body).await?;
        Ok(())
    }

    async fn remove_item(&self, phone: &PhoneNumber, item_id: &ItemId) -> SdkResult<()> {
        let body = RemoveBody {
            phone_number: phone,
            item_id,
        };
        self.post(paths::REMOVE_ITEM, &body).await?;
        Ok(())
    }

    async fn past_orders(&self, phone: &PhoneNumber) -> SdkResult<Vec<Order>> {
        let body = PhoneBody {
            phone_number: phone,
        };
        let envelope: OrdersEnvelope = self.post(paths::PAST_ORDERS, &body).await?.json()?;
        Ok(envelope.past_orders)
    }

    async fn balance(&self, phone: &PhoneNumber) -> SdkResult<Balance> {
        let body = PhoneBody {
            phone_number: phone,
        };
        Ok(self.post(paths::BALANCE, &body).await?.json()?)
    }

    async fn payment_history(&self, phone: &PhoneNumber) -> SdkResult<PaymentHistory> {
        let body = PhoneBody {
            phone_number: phone,
        };
        let envelope: HistoryEnvelope = self.post(paths::HISTORY, &body).await?.json()?;
        Ok(envelope.payment_history)
    }
}

