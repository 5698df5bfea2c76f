/**
 * In-Memory Order Store
 *
 * Keeps orders in a HashMap behind a `tokio::sync::RwLock` with a
 * sequential id counter. Reads take the shared lock; mutations take the
 * exclusive lock and refresh `updated_at`.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::orders::model::{CreateOrderRequest, Order, Payment};

struct StoreInner {
    orders: HashMap<u64, Order>,
    next_id: u64,
}

/// Shared order store
///
/// Cloning is cheap; all clones address the same underlying map.
#[derive(Clone)]
pub struct OrderStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                orders: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Store a new order with status `pending` and return it
    pub async fn insert(&self, request: CreateOrderRequest) -> Order {
        let mut inner = self.inner.write().await;
        let order_id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let order = Order {
            order_id,
            restaurant_id: request.restaurant_id.clone(),
            table_id: request.table_id.clone(),
            note: request.note.clone(),
            status: "pending".to_string(),
            created_at: now,
            updated_at: now,
            total_amount: request.total_amount(),
            payment: Payment {
                method: request.payment_method.clone(),
                status: "unpaid".to_string(),
            },
            items: request.items,
        };

        inner.orders.insert(order_id, order.clone());
        order
    }

    /// Look up an order by id
    pub async fn get(&self, order_id: u64) -> Option<Order> {
        let inner = self.inner.read().await;
        inner.orders.get(&order_id).cloned()
    }

    /// Update an order's status, refreshing `updated_at`
    ///
    /// Returns the updated order, or `None` if it does not exist.
    pub async fn update_status(&self, order_id: u64, status: impl Into<String>) -> Option<Order> {
        let mut inner = self.inner.write().await;
        let order = inner.orders.get_mut(&order_id)?;
        order.status = status.into();
        order.updated_at = Utc::now();
        Some(order.clone())
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
