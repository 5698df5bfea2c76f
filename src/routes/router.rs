/**
 * Router Configuration
 *
 * Combines the order CRUD routes and the notification stream route into
 * a single Axum router.
 *
 * # Routes
 *
 * ## Orders
 * - `POST /api/order` - Create an order
 * - `GET /api/order/{order_id}` - Fetch an order
 * - `PUT /api/order/{order_id}/status` - Update an order's status
 * - `DELETE /api/order/{order_id}` - Cancel an order
 *
 * ## Notifications
 * - `GET /api/notifications/stream/{restaurant_id}` - SSE stream of
 *   order events for one restaurant
 *
 * Unknown routes fall through to a 404 handler.
 */

use axum::{routing, Router};

use crate::orders::handlers::{cancel_order, create_order, get_order, update_order_status};
use crate::realtime::subscription::handle_notification_subscription;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/api/order", routing::post(create_order))
        .route(
            "/api/order/{order_id}",
            routing::get(get_order).delete(cancel_order),
        )
        .route(
            "/api/order/{order_id}/status",
            routing::put(update_order_status),
        )
        .route(
            "/api/notifications/stream/{restaurant_id}",
            routing::get(handle_notification_subscription),
        )
        .fallback(|| async { "404 Not Found" })
        .with_state(app_state)
}
