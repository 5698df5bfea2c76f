/**
 * Order Route Handlers
 *
 * HTTP handlers for the order CRUD surface:
 *
 * - `POST /api/order` - Create an order
 * - `GET /api/order/{order_id}` - Fetch an order
 * - `PUT /api/order/{order_id}/status` - Update an order's status
 * - `DELETE /api/order/{order_id}` - Cancel an order
 *
 * Every mutation publishes to the restaurant's notification channel.
 * Publishing is fire-and-forget by contract, so handler results never
 * depend on subscriber state.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::orders::model::{CreateOrderRequest, Order};
use crate::orders::notify;
use crate::realtime::Envelope;
use crate::server::state::AppState;

/// Order representation returned from mutating endpoints, with a
/// client-displayable confirmation message alongside the order fields
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: Order,
    pub message: String,
}

/// Request body for `PUT /api/order/{order_id}/status`
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Handle order creation (POST /api/order)
///
/// Stores the order, pings the downstream notification stubs and
/// publishes `order_created` to the restaurant's channel.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = state.orders.insert(request).await;
    tracing::info!(
        "[Orders] Created order {} for restaurant {}",
        order.order_id,
        order.restaurant_id
    );

    notify::notify_payment_system(&order);
    notify::notify_restaurant(&order);

    state.hub.publish(
        &order.restaurant_id,
        Envelope::named(
            "order_created",
            serde_json::json!({ "type": "order_created", "order": order }),
        ),
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            order,
            message: "order received".to_string(),
        }),
    ))
}

/// Handle order lookup (GET /api/order/{order_id})
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<Json<Order>, AppError> {
    match state.orders.get(order_id).await {
        Some(order) => Ok(Json(order)),
        None => Err(AppError::not_found(format!(
            "order {} does not exist",
            order_id
        ))),
    }
}

/// Handle status update (PUT /api/order/{order_id}/status)
///
/// Publishes `order_status_updated` to the restaurant's channel on
/// success.
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, AppError> {
    let status = request
        .status
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("missing status"))?;

    set_status(&state, order_id, status).await.map(Json)
}

/// Handle order cancellation (DELETE /api/order/{order_id})
///
/// Cancellation is a status update to `cancelled`; subscribers see it
/// as a regular `order_status_updated` event.
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<Json<Order>, AppError> {
    set_status(&state, order_id, "cancelled".to_string())
        .await
        .map(Json)
}

/// Apply a status change, notify downstream systems and publish the
/// update to the restaurant's channel
async fn set_status(state: &AppState, order_id: u64, status: String) -> Result<Order, AppError> {
    let order = state
        .orders
        .update_status(order_id, status)
        .await
        .ok_or_else(|| AppError::not_found(format!("order {} does not exist", order_id)))?;

    tracing::info!(
        "[Orders] Order {} status changed to {}",
        order.order_id,
        order.status
    );

    notify::notify_restaurant(&order);

    state.hub.publish(
        &order.restaurant_id,
        Envelope::named(
            "order_status_updated",
            serde_json::json!({ "type": "order_status_updated", "order": order }),
        ),
    );

    Ok(order)
}
