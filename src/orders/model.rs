/**
 * Order Data Model
 *
 * Serde models for orders and their line items. Timestamps are RFC 3339
 * via chrono on every code path; amounts are computed server-side from
 * the submitted items.
 */

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Restaurant identifier as submitted by clients
///
/// Clients send either a numeric or a string id; both address the same
/// notification channel once normalized through `Display`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RestaurantId {
    /// Numeric form, e.g. `2`
    Number(u64),
    /// String form, e.g. `"2"`
    Text(String),
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One line item on an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub dish_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

fn default_quantity() -> u32 {
    1
}

/// Payment details attached to an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub method: String,
    pub status: String,
}

/// A stored order, as returned to clients and carried in event payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: u64,
    pub restaurant_id: RestaurantId,
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub note: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_amount: f64,
    pub payment: Payment,
    pub items: Vec<OrderItem>,
}

/// Request body for `POST /api/order`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub restaurant_id: RestaurantId,
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub note: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

fn default_payment_method() -> String {
    "credit_card".to_string()
}

impl CreateOrderRequest {
    /// Order total: Σ price × quantity over items
    pub fn total_amount(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}
