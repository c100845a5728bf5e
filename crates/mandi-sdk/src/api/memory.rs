//! In-process [`SupplierApi`] for tests and offline demos.

use super::{NewItem, SupplierApi};
use crate::SdkResult;
use async_trait::async_trait;
use mandi_auth::{PhoneNumber, SignUpForm, UserType};
use mandi_commerce::catalog::{Item, PriceSchedule};
use mandi_commerce::ledger::{Balance, PaymentHistory};
use mandi_commerce::orders::Order;
use mandi_commerce::{ItemId, Money};
use mandi_data::FetchError;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct State {
    registered: HashSet<String>,
    verified: HashSet<String>,
    sign_ups: Vec<SignUpForm>,
    items: HashMap<String, Vec<Item>>,
    orders: HashMap<String, Vec<Order>>,
    balances: HashMap<String, Money>,
    histories: HashMap<String, PaymentHistory>,
    next_id: u64,
    fail_next: Option<(u16, String)>,
    calls: usize,
}

/// Behaves like the remote API, including its 404 answers, without a
/// network.
#[derive(Debug, Default)]
pub struct InMemorySupplierApi {
    state: Mutex<State>,
}

impl InMemorySupplierApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create an account for `phone`.
    pub fn register(&self, phone: &str) {
        self.state().registered.insert(phone.to_string());
    }

    /// Mark `phone` as verified by the platform.
    pub fn verify(&self, phone: &str) {
        self.state().verified.insert(phone.to_string());
    }

    pub fn set_orders(&self, phone: &str, orders: Vec<Order>) {
        self.state().orders.insert(phone.to_string(), orders);
    }

    pub fn set_balance(&self, phone: &str, amount_owed: Money) {
        self.state().balances.insert(phone.to_string(), amount_owed);
    }

    pub fn set_history(&self, phone: &str, history: PaymentHistory) {
        self.state().histories.insert(phone.to_string(), history);
    }

    /// Make the next call fail with `status` and a JSON `message`.
    pub fn fail_next(&self, status: u16, message: impl Into<String>) {
        self.state().fail_next = Some((status, message.into()));
    }

    /// Items currently stored for `phone`.
    pub fn items_for(&self, phone: &str) -> Vec<Item> {
        self.state().items.get(phone).cloned().unwrap_or_default()
    }

    pub fn sign_ups(&self) -> Vec<SignUpForm> {
        self.state().sign_ups.clone()
    }

    /// Number of calls received, failed ones included.
    pub fn call_count(&self) -> usize {
        self.state().calls
    }

    /// Count the call and consume an injected failure.
    fn begin(&self) -> SdkResult<MutexGuard<'_, State>> {
        let mut state = self.state();
        state.calls += 1;
        match state.fail_next.take() {
            Some((status, message)) => Err(FetchError::HttpError { status, message }.into()),
            None => Ok(state),
        }
    }
}

fn not_found(message: &str) -> crate::SdkError {
    FetchError::HttpError {
        status: 404,
        message: message.to_string(),
    }
    .into()
}

#[async_trait]
impl SupplierApi for InMemorySupplierApi {
    async fn is_user(&self, phone: &PhoneNumber, user_type: UserType) -> SdkResult<bool> {
        let state = self.begin()?;
        Ok(user_type == UserType::Supplier && state.registered.contains(phone.as_str()))
    }

    async fn sign_up(&self, form: &SignUpForm) -> SdkResult<()> {
        let mut state = self.begin()?;
        state.registered.insert(form.phone_number.to_string());
        state.sign_ups.push(form.clone());
        Ok(())
    }

    async fn is_verified(&self, phone: &PhoneNumber) -> SdkResult<bool> {
        let state = self.begin()?;
        Ok(state.verified.contains(phone.as_str()))
    }

    async fn list_items(&self, phone: &PhoneNumber) -> SdkResult<Vec<Item>> {
        let state = self.begin()?;
        Ok(state.items.get(phone.as_str()).cloned().unwrap_or_default())
    }

    async fn add_item(&self, item: &NewItem) -> SdkResult<()> {
        let mut state = self.begin()?;
        state.next_id += 1;
        let stored = Item {
            id: ItemId::new(format!("item-{}", state.next_id)),
            item_name: item.item_name.clone(),
            quality: item.quality.clone(),
            price_slabs: item.price_slabs.to_drafts(),
            item_image: item.item_image.clone(),
        };
        state
            .items
            .entry(item.phone_number.to_string())
            .or_default()
            .push(stored);
        Ok(())
    }

    async fn update_price_slabs(&self, item_id: &ItemId, slabs: &PriceSchedule) -> SdkResult<()> {
        let mut state = self.begin()?;
        let item = state
            .items
            .values_mut()
            .flatten()
            .find(|item| &item.id == item_id)
            .ok_or_else(|| not_found("Item not found"))?;
        item.price_slabs = slabs.to_drafts();
        Ok(())
    }

    async fn remove_item(&self, phone: &PhoneNumber, item_id: &ItemId) -> SdkResult<()> {
        let mut state = self.begin()?;
        let items = state
            .items
            .get_mut(phone.as_str())
            .ok_or_else(|| not_found("Item not found"))?;
        let before = items.len();
        items.retain(|item| &item.id != item_id);
        if items.len() == before {
            return Err(not_found("Item not found"));
        }
        Ok(())
    }

    async fn past_orders(&self, phone: &PhoneNumber) -> SdkResult<Vec<Order>> {
        let state = self.begin()?;
        Ok(state.orders.get(phone.as_str()).cloned().unwrap_or_default())
    }

    async fn balance(&self, phone: &PhoneNumber) -> SdkResult<Balance> {
        let state = self.begin()?;
        let amount_owed = state
            .balances
            .get(phone.as_str())
            .copied()
            .unwrap_or_else(Money::zero);
        Ok(Balance { amount_owed })
    }

    async fn payment_history(&self, phone: &PhoneNumber) -> SdkResult<PaymentHistory> {
        let state = self.begin()?;
        Ok(state.histories.get(phone.as_str()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandi_commerce::catalog::SlabDraft;

    fn phone() -> PhoneNumber {
        PhoneNumber::parse("9876543210").unwrap()
    }

    fn new_item(name: &str) -> NewItem {
        NewItem {
            phone_number: phone(),
            item_name: name.to_string(),
            quality: "A".to_string(),
            price_slabs: PriceSchedule::from_drafts(&[SlabDraft::new("10", "30")]).unwrap(),
            item_image: None,
        }
    }

    #[tokio::test]
    async fn test_registration() {
        let api = InMemorySupplierApi::new();
        assert!(!api.is_user(&phone(), UserType::Supplier).await.unwrap());
        api.register("9876543210");
        assert!(api.is_user(&phone(), UserType::Supplier).await.unwrap());
        assert!(!api.is_user(&phone(), UserType::Buyer).await.unwrap());
    }

    #[tokio::test]
    async fn test_items_lifecycle() {
        let api = InMemorySupplierApi::new();
        api.add_item(&new_item("Tomato")).await.unwrap();
        api.add_item(&new_item("Onion")).await.unwrap();

        let items = api.list_items(&phone()).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);

        api.remove_item(&phone(), &items[0].id).await.unwrap();
        let err = api.remove_item(&phone(), &items[0].id).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(api.items_for("9876543210").len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_item() {
        let api = InMemorySupplierApi::new();
        let err = api
            .update_price_slabs(&ItemId::new("missing"), &PriceSchedule::default())
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("Item not found"));
    }

    #[tokio::test]
    async fn test_injected_failure_is_consumed() {
        let api = InMemorySupplierApi::new();
        api.fail_next(500, "Database unavailable");
        let err = api.list_items(&phone()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(api.list_items(&phone()).await.is_ok());
        assert_eq!(api.call_count(), 2);
    }
}
