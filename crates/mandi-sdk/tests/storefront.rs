//! Storefront workflows against the in-memory API and session store.

use chrono::{TimeZone, Utc};
use mandi_sdk::auth::{PhoneNumber, SignUpForm};
use mandi_sdk::cache::{KeyValueStore, MemoryStore};
use mandi_sdk::commerce::ledger::{PaymentDirection, PaymentHistory, PaymentRecord};
use mandi_sdk::commerce::orders::{Order, OrderLineItem};
use mandi_sdk::commerce::OrderId;
use mandi_sdk::i18n::TranslationTable;
use mandi_sdk::prelude::*;
use std::sync::Arc;

const PHONE: &str = "9876543210";

type TestStorefront = Storefront<InMemorySupplierApi, Arc<MemoryStore>>;

fn storefront() -> (TestStorefront, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let table = TranslationTable::from_json_str(
        r#"{"hi": {"Tomato": "टमाटर", "Onion": "प्याज"}}"#,
    )
    .unwrap();
    let storefront = Storefront::new(
        ClientConfig::default(),
        InMemorySupplierApi::new(),
        Arc::clone(&store),
    )
    .unwrap()
    .with_item_translations(table);
    (storefront, store)
}

async fn logged_in() -> (TestStorefront, Arc<MemoryStore>) {
    let (storefront, store) = storefront();
    storefront.api().register(PHONE);
    storefront.login(PHONE).await.unwrap();
    (storefront, store)
}

fn sheet(rows: &[(&str, &str)]) -> SlabSheet {
    SlabSheet::from_slabs(rows.iter().map(|(q, p)| SlabDraft::new(*q, *p)).collect())
}

#[tokio::test]
async fn test_login_registered_supplier() {
    let (storefront, store) = storefront();
    storefront.api().register(PHONE);

    let phone = storefront.login("+91 98765 43210").await.unwrap();
    assert_eq!(phone.as_str(), PHONE);

    let session = storefront.session();
    assert!(session.logged_in);
    assert_eq!(session.phone.as_deref(), Some(PHONE));
    assert_eq!(store.get("login").unwrap().as_deref(), Some("true"));
}

#[tokio::test]
async fn test_login_unregistered_keeps_phone_for_sign_up() {
    let (storefront, _) = storefront();

    let err = storefront.login(PHONE).await.unwrap_err();
    assert!(matches!(err, SdkError::NotRegistered(ref p) if p == PHONE));

    let session = storefront.session();
    assert!(!session.logged_in);
    assert_eq!(session.phone.as_deref(), Some(PHONE));
}

#[tokio::test]
async fn test_login_rejects_bad_number_without_calling_api() {
    let (storefront, _) = storefront();
    let err = storefront.login("12345").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(storefront.api().call_count(), 0);
}

#[tokio::test]
async fn test_sign_up() {
    let (storefront, _) = storefront();
    let mut form = SignUpForm::new(PhoneNumber::parse(PHONE).unwrap());
    form.name = "Ravi".to_string();
    form.shop_name = "Ravi Traders".to_string();
    form.user_image = "https://img.example/u.jpg".to_string();

    let err = storefront.sign_up(&form).await.unwrap_err();
    assert!(err.is_validation());
    assert!(storefront.api().sign_ups().is_empty());

    form.id_image = "https://img.example/id.jpg".to_string();
    storefront.sign_up(&form).await.unwrap();
    assert_eq!(storefront.api().sign_ups().len(), 1);
    assert!(storefront.session().logged_in);

    // The new account can now log in.
    storefront.logout().unwrap();
    storefront.login(PHONE).await.unwrap();
}

#[tokio::test]
async fn test_ensure_verified_caches_positive_answer() {
    let (storefront, store) = logged_in().await;

    let err = storefront.ensure_verified().await.unwrap_err();
    assert!(matches!(err, SdkError::NotVerified));
    assert_eq!(store.get("verify").unwrap(), None);

    storefront.api().verify(PHONE);
    storefront.ensure_verified().await.unwrap();
    assert_eq!(store.get("verify").unwrap().as_deref(), Some("true"));

    let calls = storefront.api().call_count();
    storefront.ensure_verified().await.unwrap();
    assert_eq!(storefront.api().call_count(), calls);
}

#[tokio::test]
async fn test_login_with_another_number_drops_previous_flags() {
    let (storefront, store) = logged_in().await;
    storefront.api().verify(PHONE);
    storefront.ensure_verified().await.unwrap();

    let err = storefront.login("9000000000").await.unwrap_err();
    assert!(matches!(err, SdkError::NotRegistered(_)));

    let session = storefront.session();
    assert!(!session.logged_in);
    assert!(!session.verified);
    assert_eq!(session.phone.as_deref(), Some("9000000000"));
    assert_eq!(store.get("verify").unwrap(), None);

    // Verification is asked again for the new number.
    let calls = storefront.api().call_count();
    let err = storefront.ensure_verified().await.unwrap_err();
    assert!(matches!(err, SdkError::NotVerified));
    assert_eq!(storefront.api().call_count(), calls + 1);
}

#[tokio::test]
async fn test_operations_need_a_phone_number() {
    let (storefront, _) = storefront();
    assert!(matches!(
        storefront.items().await.unwrap_err(),
        SdkError::PhoneNotFound
    ));
    assert!(matches!(
        storefront.past_orders().await.unwrap_err(),
        SdkError::PhoneNotFound
    ));
    assert!(matches!(
        storefront.balance_overview().await.unwrap_err(),
        SdkError::PhoneNotFound
    ));
    assert!(matches!(
        storefront.ensure_verified().await.unwrap_err(),
        SdkError::PhoneNotFound
    ));
    assert_eq!(storefront.api().call_count(), 0);
}

#[tokio::test]
async fn test_add_item_and_list_localized() {
    let (storefront, _) = logged_in().await;
    storefront.change_language("hi").unwrap();

    let draft = ItemDraft::new()
        .with_name(" Tomato ")
        .with_quality("A grade")
        .with_slabs(sheet(&[("10", "30"), ("50", "27.5")]));
    storefront.add_item(&draft).await.unwrap();

    let items = storefront.items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item.item_name, "Tomato");
    assert_eq!(items[0].display_name, "टमाटर");
    assert_eq!(
        items[0].slab_labels,
        ["10+ kg: \u{20b9}30.00/kg", "50+ kg: \u{20b9}27.50/kg"]
    );

    let (unit, total) = items[0].quote(Quantity::parse("60").unwrap()).unwrap();
    assert_eq!(unit, Money::from_paise(2750));
    assert_eq!(total, Money::from_rupees(1650));
}

#[tokio::test]
async fn test_add_item_rejects_incomplete_form() {
    let (storefront, _) = logged_in().await;
    let calls = storefront.api().call_count();

    let unnamed = ItemDraft::new().with_slabs(sheet(&[("10", "30")]));
    let err = storefront.add_item(&unnamed).await.unwrap_err();
    assert!(matches!(err, SdkError::Commerce(CommerceError::MissingItemName)));

    // A fresh form has one empty slab row.
    let blank_slab = ItemDraft::new().with_name("Tomato");
    let err = storefront.add_item(&blank_slab).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Commerce(CommerceError::EmptySlabField { index: 0, .. })
    ));

    assert_eq!(storefront.api().call_count(), calls);
}

#[tokio::test]
async fn test_slab_update_round_trip() {
    let (storefront, _) = logged_in().await;
    storefront
        .add_item(&ItemDraft::new().with_name("Onion").with_slabs(sheet(&[("10", "20")])))
        .await
        .unwrap();
    let item = storefront.items().await.unwrap().remove(0).item;

    let mut edit = item.slab_sheet();
    edit.add_slab();
    edit.update_slab_field(1, SlabField::MinQuantity, "100");
    edit.update_slab_field(1, SlabField::Price, "18.25");
    edit.add_slab();
    edit.remove_slab(2);
    assert!(edit.validate_slabs());
    let submitted = edit.parse().unwrap();

    storefront.update_price_slabs(&item.id, &edit).await.unwrap();

    let refetched = storefront.items().await.unwrap().remove(0);
    assert_eq!(refetched.item.id, item.id);
    assert_eq!(refetched.schedule, Some(submitted));
    assert_eq!(
        refetched.slab_labels,
        ["10+ kg: \u{20b9}20.00/kg", "100+ kg: \u{20b9}18.25/kg"]
    );
}

#[tokio::test]
async fn test_remove_item() {
    let (storefront, _) = logged_in().await;
    storefront
        .add_item(&ItemDraft::new().with_name("Onion").with_slabs(sheet(&[("1", "20")])))
        .await
        .unwrap();
    let id = storefront.items().await.unwrap()[0].item.id.clone();

    storefront.remove_item(&id).await.unwrap();
    assert!(storefront.items().await.unwrap().is_empty());

    let err = storefront.remove_item(&id).await.unwrap_err();
    let alert = err.to_alert(Operation::RemoveItem, &storefront.translator());
    assert_eq!(alert.message, "Item not found");
}

#[tokio::test]
async fn test_remote_failure_alert_falls_back_to_translation() {
    let (storefront, _) = logged_in().await;
    storefront.change_language("hi").unwrap();
    storefront.api().fail_next(500, "");

    let err = storefront.items().await.unwrap_err();
    let alert = err.to_alert(Operation::FetchItems, &storefront.translator());
    assert_eq!(alert.title, "त्रुटि");
    assert_eq!(alert.message, "आइटम लाने में विफल");
}

#[tokio::test]
async fn test_past_orders_localized_with_totals() {
    let (storefront, _) = logged_in().await;
    storefront.api().set_orders(
        PHONE,
        vec![Order {
            id: OrderId::new("o1"),
            items: vec![
                OrderLineItem::new("Tomato", Quantity::from_whole(2), Money::from_paise(2550)),
                OrderLineItem::new("Garlic", Quantity::from_milli(500), Money::from_rupees(120)),
            ],
            created_at: Some(Utc.with_ymd_and_hms(2024, 8, 3, 10, 0, 0).unwrap()),
            completed_at: None,
        }],
    );

    storefront.change_language("en").unwrap();
    let english = storefront.past_orders().await.unwrap();
    assert_eq!(english[0].lines[0].display_name, "Tomato");

    storefront.change_language("hi-IN").unwrap();
    let orders = storefront.past_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].lines[0].display_name, "टमाटर");
    assert_eq!(orders[0].lines[1].display_name, "Garlic");
    assert_eq!(orders[0].total, Money::from_paise(5100 + 6000));
}

#[tokio::test]
async fn test_balance_overview() {
    let (storefront, _) = logged_in().await;
    storefront.api().set_balance(PHONE, Money::from_rupees(1500));
    storefront.api().set_history(
        PHONE,
        PaymentHistory::new(vec![
            PaymentRecord {
                date: Utc.with_ymd_and_hms(2024, 8, 10, 0, 0, 0).unwrap(),
                description: None,
                amount: Money::from_rupees(500),
                direction: PaymentDirection::Debit,
            },
            PaymentRecord {
                date: Utc.with_ymd_and_hms(2024, 8, 3, 0, 0, 0).unwrap(),
                description: Some("Order o1".to_string()),
                amount: Money::from_rupees(2000),
                direction: PaymentDirection::Credit,
            },
        ]),
    );

    let overview = storefront.balance_overview().await.unwrap();
    assert_eq!(overview.balance.amount_owed, Money::from_rupees(1500));
    assert_eq!(overview.history.signed_total().unwrap(), Money::from_rupees(1500));
    assert!(overview.has_chart());
    assert_eq!(overview.chart[0].label, "Aug 3");
}

#[tokio::test]
async fn test_locale_selection() {
    let (storefront, _) = storefront();
    // Nothing stored, no device language: configured default.
    assert_eq!(storefront.active_locale().as_str(), "hi");

    let storefront = storefront.with_device_locale("en-US");
    assert_eq!(storefront.active_locale().as_str(), "en");
    assert_eq!(storefront.name_resolver().resolve("Tomato"), "Tomato");

    storefront.change_language("hi").unwrap();
    assert_eq!(storefront.active_locale().as_str(), "hi");
    assert_eq!(storefront.translator().t("error"), "त्रुटि");

    // A resolver keeps the locale it was built with.
    let resolver = storefront.name_resolver();
    storefront.change_language("en").unwrap();
    assert_eq!(resolver.resolve("Tomato"), "टमाटर");
    assert_eq!(storefront.name_resolver().resolve("Tomato"), "Tomato");

    // Sign-out forgets the language too.
    storefront.logout().unwrap();
    assert_eq!(storefront.session().lang, None);
}

#[tokio::test]
async fn test_session_written_elsewhere_needs_reload() {
    let (storefront, store) = storefront();
    store.set("phone", PHONE).unwrap();
    assert!(matches!(
        storefront.items().await.unwrap_err(),
        SdkError::PhoneNotFound
    ));

    storefront.reload_session().unwrap();
    assert!(storefront.items().await.unwrap().is_empty());
}
