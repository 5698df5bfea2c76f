//! Real-time Notification Module
//!
//! This module implements the publish/subscribe core that pushes
//! order-lifecycle events to restaurant-facing clients over Server-Sent
//! Events (SSE).
//!
//! # Architecture
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── envelope.rs     - Event envelope (name + payload)
//! ├── registry.rs     - Channel-to-endpoint registry
//! ├── hub.rs          - Publish/subscribe hub
//! ├── sse.rs          - Event-stream wire framing
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Design
//!
//! Each restaurant id is a channel. Subscribing registers a bounded
//! per-connection endpoint under that channel and returns a lazy stream
//! of wire frames; publishing snapshots the channel's endpoints under a
//! short-lived lock and enqueues without blocking, dropping the event
//! for any subscriber whose buffer is full. Delivery is best-effort
//! at-most-once; there is no replay and no cross-endpoint ordering.
//!
//! Idle connections receive a comment keep-alive frame every
//! [`hub::KEEP_ALIVE_INTERVAL`] so intermediary proxies do not close
//! them.

pub mod envelope;
pub mod hub;
pub mod registry;
pub mod sse;
pub mod subscription;

pub use envelope::Envelope;
pub use hub::NotificationHub;
pub use registry::ChannelRegistry;
pub use subscription::handle_notification_subscription;
