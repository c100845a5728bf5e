//! `HttpSupplierApi` against a local mock of the remote API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::{Json, Router};
use mandi_sdk::api::{paths, NewItem};
use mandi_sdk::auth::{PhoneNumber, UserType};
use mandi_sdk::cache::MemoryStore;
use mandi_sdk::commerce::ItemId;
use mandi_sdk::prelude::*;
use mandi_sdk::{ApiConfig, HttpSupplierApi};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

const PHONE: &str = "9876543210";

/// Requests received, as (path, body).
type Log = Arc<Mutex<Vec<(&'static str, Value)>>>;

fn record(log: &Log, path: &'static str, body: &Value) {
    log.lock().unwrap().push((path, body.clone()));
}

fn known(body: &Value) -> bool {
    body["phoneNumber"] == PHONE
}

async fn is_user(State(log): State<Log>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&log, paths::IS_USER, &body);
    if known(&body) {
        (StatusCode::OK, Json(json!({ "message": "User exists" })))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "User not found" })))
    }
}

async fn verified(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if known(&body) {
        (StatusCode::OK, Json(json!({ "verified": true })))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "Supplier not found" })))
    }
}

async fn get_items(Json(_): Json<Value>) -> Json<Value> {
    Json(json!({
        "items": [{
            "_id": "66b1",
            "itemName": "Tomato",
            "quality": "A",
            "priceSlabs": [
                { "minQuantity": 10, "price": 30 },
                { "minQuantity": "50", "price": "27.5" }
            ],
            "itemImage": "https://img.example/t.jpg"
        }]
    }))
}

async fn add_item(State(log): State<Log>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["itemName"] == "Tomato" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Item already exists" })),
        );
    }
    record(&log, paths::ADD_ITEM, &body);
    (StatusCode::OK, Json(json!({ "message": "Item added" })))
}

async fn update(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, paths::UPDATE, &body);
    Json(json!({ "message": "Updated" }))
}

async fn remove_item(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    record(&log, paths::REMOVE_ITEM, &body);
    Json(json!({ "message": "Removed" }))
}

async fn past_orders(Json(_): Json<Value>) -> Json<Value> {
    Json(json!({
        "pastOrders": [{
            "_id": "o1",
            "items": [
                { "itemName": "Tomato", "quantity": 2, "price": 25.5 },
                { "itemName": "Onion", "quantity": "1.5", "price": "20" }
            ],
            "createdAt": "2024-08-03T10:00:00Z"
        }]
    }))
}

async fn balance(Json(_): Json<Value>) -> Json<Value> {
    Json(json!({ "amountOwed": 1500.5 }))
}

async fn history(Json(_): Json<Value>) -> Json<Value> {
    Json(json!({
        "paymentHistory": [
            { "date": "2024-08-10T00:00:00Z", "amount": 500, "type": "-" },
            { "date": "2024-08-03T00:00:00Z", "amount": 2000, "type": "+" }
        ]
    }))
}

async fn spawn_mock() -> (HttpSupplierApi, Log) {
    let log: Log = Arc::default();
    let router = Router::new()
        .route(paths::IS_USER, post(is_user))
        .route(paths::VERIFIED, post(verified))
        .route(paths::GET_ITEMS, post(get_items))
        .route(paths::ADD_ITEM, post(add_item))
        .route(paths::UPDATE, put(update))
        .route(paths::REMOVE_ITEM, post(remove_item))
        .route(paths::PAST_ORDERS, post(past_orders))
        .route(paths::BALANCE, post(balance))
        .route(paths::HISTORY, post(history))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
        ..ApiConfig::default()
    };
    (HttpSupplierApi::new(&config).unwrap(), log)
}

fn phone() -> PhoneNumber {
    PhoneNumber::parse(PHONE).unwrap()
}

#[tokio::test]
async fn test_is_user_maps_404_to_false() {
    let (api, log) = spawn_mock().await;
    assert!(api.is_user(&phone(), UserType::Supplier).await.unwrap());

    let stranger = PhoneNumber::parse("9000000000").unwrap();
    assert!(!api.is_user(&stranger, UserType::Supplier).await.unwrap());

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests[0].1, json!({ "phoneNumber": PHONE, "userType": "supplier" }));
}

#[tokio::test]
async fn test_is_verified() {
    let (api, _) = spawn_mock().await;
    assert!(api.is_verified(&phone()).await.unwrap());
    let stranger = PhoneNumber::parse("9000000000").unwrap();
    assert!(!api.is_verified(&stranger).await.unwrap());
}

#[tokio::test]
async fn test_list_items_accepts_numbers_and_strings() {
    let (api, _) = spawn_mock().await;
    let items = api.list_items(&phone()).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ItemId::new("66b1"));

    let schedule = items[0].schedule().unwrap();
    assert_eq!(
        schedule.resolve_price(Quantity::from_whole(50)).unwrap(),
        Money::from_paise(2750)
    );
}

#[tokio::test]
async fn test_add_item_sends_numeric_slabs() {
    let (api, log) = spawn_mock().await;
    let item = NewItem {
        phone_number: phone(),
        item_name: "Onion".to_string(),
        quality: "B".to_string(),
        price_slabs: SlabSheet::from_slabs(vec![
            SlabDraft::new("10", "22.50"),
            SlabDraft::new("100", "20"),
        ])
        .parse()
        .unwrap(),
        item_image: None,
    };
    api.add_item(&item).await.unwrap();

    let requests = log.lock().unwrap().clone();
    assert_eq!(
        requests[0].1,
        json!({
            "phoneNumber": PHONE,
            "itemName": "Onion",
            "quality": "B",
            "priceSlabs": [
                { "minQuantity": 10, "price": 22.5 },
                { "minQuantity": 100, "price": 20 }
            ],
            "itemImage": null
        })
    );
}

#[tokio::test]
async fn test_server_message_surfaces_in_alert() {
    let (api, _) = spawn_mock().await;
    let item = NewItem {
        phone_number: phone(),
        item_name: "Tomato".to_string(),
        quality: String::new(),
        price_slabs: PriceSchedule::default(),
        item_image: None,
    };
    let err = api.add_item(&item).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.server_message(), Some("Item already exists"));
}

#[tokio::test]
async fn test_update_and_remove_bodies() {
    let (api, log) = spawn_mock().await;
    let schedule = PriceSchedule::from_drafts(&[SlabDraft::new("5", "12")]).unwrap();
    api.update_price_slabs(&ItemId::new("66b1"), &schedule)
        .await
        .unwrap();
    api.remove_item(&phone(), &ItemId::new("66b1")).await.unwrap();

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests[0].0, paths::UPDATE);
    assert_eq!(
        requests[0].1,
        json!({ "itemId": "66b1", "priceSlabs": [{ "minQuantity": 5, "price": 12 }] })
    );
    assert_eq!(requests[1].0, paths::REMOVE_ITEM);
    assert_eq!(requests[1].1, json!({ "phoneNumber": PHONE, "itemId": "66b1" }));
}

#[tokio::test]
async fn test_orders_and_ledger() {
    let (api, _) = spawn_mock().await;
    let orders = api.past_orders(&phone()).await.unwrap();
    assert_eq!(orders[0].total().unwrap(), Money::from_rupees(81));

    let balance = api.balance(&phone()).await.unwrap();
    assert_eq!(balance.amount_owed, Money::from_paise(150050));

    let history = api.payment_history(&phone()).await.unwrap();
    assert_eq!(history.entries().len(), 2);
    assert_eq!(history.signed_total().unwrap(), Money::from_rupees(1500));
}

#[tokio::test]
async fn test_storefront_over_http() {
    let (api, _) = spawn_mock().await;
    let storefront = Storefront::new(ClientConfig::default(), api, MemoryStore::new()).unwrap();

    let err = storefront.login("9000000000").await.unwrap_err();
    assert!(matches!(err, SdkError::NotRegistered(_)));

    storefront.login(PHONE).await.unwrap();
    storefront.ensure_verified().await.unwrap();
    assert!(storefront.session().verified);

    let items = storefront.items().await.unwrap();
    assert_eq!(items[0].slab_labels.len(), 2);
}
