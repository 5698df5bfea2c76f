//! Integration tests for the order handlers
//!
//! Drives the handlers directly with constructed extractors and checks
//! both the HTTP responses and the events they publish to the hub.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures_util::StreamExt;
use serde_json::json;
use tokio::time::{timeout, Duration};

use orderline::orders::handlers::{
    cancel_order, create_order, get_order, update_order_status, UpdateStatusRequest,
};
use orderline::orders::model::CreateOrderRequest;
use orderline::server::state::AppState;

fn create_request(restaurant_id: serde_json::Value) -> CreateOrderRequest {
    serde_json::from_value(json!({
        "restaurant_id": restaurant_id,
        "table_id": "A1",
        "note": "no onions",
        "items": [
            {"dish_id": 1, "name": "noodles", "price": 120.0, "quantity": 2},
            {"dish_id": 3, "name": "tea", "price": 40.0},
        ],
    }))
    .expect("valid request")
}

async fn response_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let value = serde_json::from_slice(&bytes).expect("JSON body");
    (status, value)
}

#[tokio::test]
async fn test_create_order_returns_201_with_message() {
    let state = AppState::new();

    let response = create_order(State(state), Json(create_request(json!(2))))
        .await
        .expect("create succeeds")
        .into_response();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order_id"], 1);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_amount"], 280.0);
    assert_eq!(body["payment"]["method"], "credit_card");
    assert_eq!(body["payment"]["status"], "unpaid");
    assert_eq!(body["message"], "order received");
}

#[tokio::test]
async fn test_create_order_publishes_to_restaurant_channel() {
    let state = AppState::new();
    let mut stream = Box::pin(state.hub.subscribe("2"));
    let _ = stream.next().await; // connected ack

    // Numeric restaurant id in the request addresses the "2" channel
    create_order(State(state.clone()), Json(create_request(json!(2))))
        .await
        .expect("create succeeds");

    let frame = timeout(Duration::from_secs(1), stream.next())
        .await
        .expect("event arrives")
        .expect("stream open");
    assert!(frame.starts_with("event: order_created\n"));

    let data_line = frame
        .lines()
        .find_map(|line| line.strip_prefix("data: "))
        .expect("data line");
    let payload: serde_json::Value = serde_json::from_str(data_line).unwrap();
    assert_eq!(payload["type"], "order_created");
    assert_eq!(payload["order"]["order_id"], 1);
}

#[tokio::test]
async fn test_get_order_round_trip_and_missing() {
    let state = AppState::new();
    create_order(State(state.clone()), Json(create_request(json!("5"))))
        .await
        .expect("create succeeds");

    let Json(order) = get_order(State(state.clone()), Path(1))
        .await
        .expect("order exists");
    assert_eq!(order.order_id, 1);
    assert_eq!(order.items.len(), 2);

    let error = get_order(State(state), Path(42)).await.unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_status_validates_and_publishes() {
    let state = AppState::new();
    create_order(State(state.clone()), Json(create_request(json!(7))))
        .await
        .expect("create succeeds");

    let mut stream = Box::pin(state.hub.subscribe(7));
    let _ = stream.next().await;

    // Missing status is a 400
    let error = update_order_status(
        State(state.clone()),
        Path(1),
        Json(UpdateStatusRequest { status: None }),
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

    let Json(order) = update_order_status(
        State(state.clone()),
        Path(1),
        Json(UpdateStatusRequest {
            status: Some("preparing".to_string()),
        }),
    )
    .await
    .expect("update succeeds");
    assert_eq!(order.status, "preparing");

    let frame = timeout(Duration::from_secs(1), stream.next())
        .await
        .expect("event arrives")
        .expect("stream open");
    assert!(frame.starts_with("event: order_status_updated\n"));

    // Unknown order is a 404
    let error = update_order_status(
        State(state),
        Path(99),
        Json(UpdateStatusRequest {
            status: Some("ready".to_string()),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_order_sets_cancelled_status() {
    let state = AppState::new();
    create_order(State(state.clone()), Json(create_request(json!(3))))
        .await
        .expect("create succeeds");

    let Json(order) = cancel_order(State(state.clone()), Path(1))
        .await
        .expect("cancel succeeds");
    assert_eq!(order.status, "cancelled");

    let error = cancel_order(State(state), Path(42)).await.unwrap_err();
    assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
}
