/**
 * Downstream Notification Stubs
 *
 * Placeholder integrations with the payment system and the restaurant's
 * back office. Today these only emit structured log lines; the real
 * integrations hang off the same call sites.
 */

use crate::orders::model::Order;

/// Notify the payment system about a new order
pub fn notify_payment_system(order: &Order) {
    tracing::info!(
        "[Notify] Payment system: order {} for amount {:.2}",
        order.order_id,
        order.total_amount
    );
}

/// Notify the restaurant that an order needs attention
pub fn notify_restaurant(order: &Order) {
    tracing::info!(
        "[Notify] Restaurant {}: order {} is {}",
        order.restaurant_id,
        order.order_id,
        order.status
    );
}
