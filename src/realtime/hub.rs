/**
 * Publish/Subscribe Hub
 *
 * Orchestrates registry lookups, fan-out writes and subscriber
 * lifecycle. One hub is constructed per process and carried in the
 * application state; clones share the same registry.
 *
 * # Delivery contract
 *
 * `publish` is fire-and-forget. It snapshots the channel's endpoints
 * under the registry lock, releases the lock, then enqueues the
 * envelope to each endpoint without blocking. A full or closed buffer
 * drops the envelope for that one subscriber; publish never fails,
 * never retries and never waits on a consumer. Subscribers that
 * connect after a publish returns do not see that event.
 *
 * # Subscriber lifecycle
 *
 * `subscribe` registers a bounded endpoint and returns a lazy stream of
 * wire frames: first a synthetic "connected" acknowledgment, then one
 * frame per delivered envelope in FIFO order, with a comment keep-alive
 * whenever the endpoint stays idle for [`KEEP_ALIVE_INTERVAL`]. The
 * stream owns a guard that removes the endpoint from the registry when
 * the stream is dropped, so cleanup runs on every termination path:
 * client disconnect, transport error or task teardown.
 */

use std::fmt::Display;
use std::time::Duration;

use futures_util::stream::{self, Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_stream::wrappers::ReceiverStream;

use crate::realtime::envelope::Envelope;
use crate::realtime::registry::ChannelRegistry;
use crate::realtime::sse;

/// Idle interval after which a subscriber receives a keep-alive frame
///
/// Keeps intermediary proxies from timing out a quiet connection.
pub const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Capacity of each subscriber's endpoint buffer
///
/// Publishing to a subscriber whose buffer is full drops the event for
/// that subscriber only.
pub const ENDPOINT_BUFFER: usize = 64;

/// Process-wide notification hub
///
/// Cheap to clone; all clones fan out through the same registry.
#[derive(Clone)]
pub struct NotificationHub {
    registry: ChannelRegistry,
}

/// Removes the endpoint from the registry when the subscriber's stream
/// is dropped. Held inside the stream state so cleanup runs exactly
/// once, on any termination path.
struct EndpointGuard {
    registry: ChannelRegistry,
    channel: String,
    id: u64,
}

impl Drop for EndpointGuard {
    fn drop(&mut self) {
        self.registry.remove(&self.channel, self.id);
        tracing::info!(
            "[Realtime] Subscriber disconnected from channel {} ({} remaining)",
            self.channel,
            self.registry.subscriber_count(&self.channel)
        );
    }
}

impl NotificationHub {
    pub fn new() -> Self {
        Self {
            registry: ChannelRegistry::new(),
        }
    }

    /// Publish an envelope to every endpoint currently registered under
    /// a channel
    ///
    /// The channel key may be any displayable value (numeric or string
    /// restaurant ids address the same channel once normalized). Never
    /// blocks and never fails; success means "attempted delivery to the
    /// endpoints registered at the time of the call."
    pub fn publish(&self, restaurant_id: impl Display, envelope: Envelope) {
        let channel = restaurant_id.to_string();
        let senders = self.registry.snapshot(&channel);
        tracing::debug!(
            "[Realtime] Publishing {} to channel {} ({} subscribers)",
            envelope.event.as_deref().unwrap_or("<unnamed>"),
            channel,
            senders.len()
        );
        deliver(&senders, envelope);
    }

    /// Publish an envelope to every endpoint across every channel
    ///
    /// Used for system-wide notices; same fire-and-forget semantics as
    /// [`publish`](Self::publish).
    pub fn broadcast(&self, envelope: Envelope) {
        let senders = self.registry.snapshot_all();
        tracing::debug!(
            "[Realtime] Broadcasting {} to {} subscribers",
            envelope.event.as_deref().unwrap_or("<unnamed>"),
            senders.len()
        );
        deliver(&senders, envelope);
    }

    /// Open a subscription to a channel
    ///
    /// Returns an unbounded, non-restartable stream of wire frames. The
    /// first frame is always the "connected" acknowledgment carrying the
    /// normalized channel key. Dropping the stream unregisters the
    /// endpoint.
    pub fn subscribe(&self, restaurant_id: impl Display) -> impl Stream<Item = String> + Send {
        let channel = restaurant_id.to_string();
        let (sender, receiver) = mpsc::channel(ENDPOINT_BUFFER);
        let id = self.registry.add(&channel, sender);
        tracing::info!(
            "[Realtime] Subscriber connected to channel {} ({} active)",
            channel,
            self.registry.subscriber_count(&channel)
        );

        let guard = EndpointGuard {
            registry: self.registry.clone(),
            channel: channel.clone(),
            id,
        };

        let connected = sse::connected_frame(&channel);
        // The timeout resets whenever a frame goes out, so an idle
        // endpoint produces a keep-alive every interval. The guard is
        // owned by the closure; dropping the stream unregisters the
        // endpoint.
        let events =
            tokio_stream::StreamExt::timeout(ReceiverStream::new(receiver), KEEP_ALIVE_INTERVAL)
                .map(move |received| {
                    let _held = &guard;
                    match received {
                        Ok(envelope) => sse::event_frame(&envelope),
                        Err(_elapsed) => sse::KEEP_ALIVE_FRAME.to_string(),
                    }
                });

        stream::once(async move { connected }).chain(events)
    }

    /// Number of live subscribers on a channel (for logging and tests)
    pub fn subscriber_count(&self, restaurant_id: impl Display) -> usize {
        self.registry.subscriber_count(&restaurant_id.to_string())
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blocking fan-out of one envelope to a snapshot of endpoints
///
/// Runs outside the registry lock. A full buffer is a per-subscriber
/// drop, not an error; a closed buffer means the subscriber is mid
/// disconnect and is likewise skipped.
fn deliver(senders: &[mpsc::Sender<Envelope>], envelope: Envelope) {
    for sender in senders {
        match sender.try_send(envelope.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("[Realtime] Subscriber buffer full, dropping event");
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!("[Realtime] Subscriber already disconnected, skipping");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt as _;
    use serde_json::json;

    #[tokio::test]
    async fn test_first_frame_is_connected_ack() {
        let hub = NotificationHub::new();
        let mut stream = Box::pin(hub.subscribe("2"));

        let frame = stream.next().await.expect("connected frame");
        assert!(frame.contains("\"type\":\"connected\""));
        assert!(frame.contains("\"restaurant_id\":\"2\""));
    }

    #[tokio::test]
    async fn test_numeric_and_string_keys_share_a_channel() {
        let hub = NotificationHub::new();
        let mut stream = Box::pin(hub.subscribe(2));
        let _ = stream.next().await;

        hub.publish("2", Envelope::named("order_created", json!({"order_id": 5})));

        let frame = stream.next().await.expect("event frame");
        assert!(frame.starts_with("event: order_created\n"));
        assert!(frame.contains("\"order_id\":5"));
    }

    #[tokio::test]
    async fn test_publish_with_no_subscribers_is_a_noop() {
        let hub = NotificationHub::new();
        // Must not block, panic or error
        hub.publish("99", Envelope::named("order_created", json!({})));
        assert_eq!(hub.subscriber_count("99"), 0);
    }

    #[tokio::test]
    async fn test_dropping_stream_unregisters_endpoint() {
        let hub = NotificationHub::new();
        let stream = hub.subscribe("7");
        assert_eq!(hub.subscriber_count("7"), 1);

        drop(stream);
        assert_eq!(hub.subscriber_count("7"), 0);
    }

    #[tokio::test]
    async fn test_full_buffer_drops_without_blocking() {
        let hub = NotificationHub::new();
        // Subscribe but never read past registration
        let _stream = hub.subscribe("3");

        // Overfill the endpoint buffer; every call must return promptly
        for i in 0..(ENDPOINT_BUFFER + 50) {
            hub.publish("3", Envelope::named("x", json!({"i": i})));
        }
        assert_eq!(hub.subscriber_count("3"), 1);
    }
}
