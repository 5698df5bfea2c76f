//! Orderline — order-management backend with real-time restaurant
//! notifications.
//!
//! The interesting piece lives in [`realtime`]: a process-wide
//! publish/subscribe hub that fans order-lifecycle events out to
//! per-restaurant Server-Sent Events connections. The [`orders`] module
//! is the thin CRUD layer that drives it.

pub mod error;
pub mod orders;
pub mod realtime;
pub mod routes;
pub mod server;
