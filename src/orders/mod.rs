//! Order Management Module
//!
//! Thin CRUD layer over an in-memory order store. Every mutation
//! (create, status update, cancel) publishes an event to the
//! [`realtime`](crate::realtime) hub so the restaurant's connected
//! clients see the change without polling.
//!
//! # Module Structure
//!
//! ```text
//! orders/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - Order, items, payment, restaurant id
//! ├── store.rs    - In-memory order store
//! ├── notify.rs   - Payment/restaurant notification stubs
//! └── handlers.rs - HTTP route handlers
//! ```

pub mod handlers;
pub mod model;
pub mod notify;
pub mod store;

pub use model::{CreateOrderRequest, Order, OrderItem, Payment, RestaurantId};
pub use store::OrderStore;
