/**
 * Channel Registry
 *
 * Process-wide mapping from a channel key (normalized restaurant id) to
 * the set of currently-connected subscriber endpoints. This is the only
 * shared mutable state in the real-time core.
 *
 * # Locking
 *
 * All operations are short critical sections under a single
 * `std::sync::Mutex`: insert, remove-by-id and snapshot. Fan-out
 * delivery happens outside the lock, against a snapshot, so slow
 * consumers never hold up publishers or other subscribers.
 *
 * # Ownership
 *
 * The registry holds each endpoint's sender for lookup and fan-out only.
 * The connection handler owns the receiving side and is responsible for
 * removal on disconnect; empty channel entries are garbage-collected on
 * removal.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::realtime::envelope::Envelope;

/// Registered delivery target for one subscriber connection
struct Endpoint {
    /// Registry-assigned id, used for exact removal
    id: u64,
    /// Producer half of the subscriber's bounded buffer
    sender: mpsc::Sender<Envelope>,
}

struct RegistryInner {
    channels: HashMap<String, Vec<Endpoint>>,
    next_endpoint_id: u64,
}

/// Shared channel-to-endpoint registry
///
/// Cloning is cheap; all clones address the same underlying map.
#[derive(Clone)]
pub struct ChannelRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                channels: HashMap::new(),
                next_endpoint_id: 0,
            })),
        }
    }

    /// Register an endpoint under a channel, creating the channel entry
    /// if absent. Returns the id to pass back to [`remove`](Self::remove).
    pub fn add(&self, channel: &str, sender: mpsc::Sender<Envelope>) -> u64 {
        let mut inner = self.inner.lock().expect("registry lock poisoned");
        let id = inner.next_endpoint_id;
        inner.next_endpoint_id += 1;
        inner
            .channels
            .entry(channel.to_string())
            .or_default()
            .push(Endpoint { id, sender });
        id
    }

    /// Remove one endpoint from a channel by id
    ///
    /// Idempotent: removing an already-removed id is a no-op and never
    /// touches another endpoint. An emptied channel entry is dropped.
    pub fn remove(&self, channel: &str, id: u64) {
        let mut inner = self.inner.lock().expect("registry lock poisoned");
        let now_empty = match inner.channels.get_mut(channel) {
            Some(endpoints) => {
                endpoints.retain(|endpoint| endpoint.id != id);
                endpoints.is_empty()
            }
            None => false,
        };
        if now_empty {
            inner.channels.remove(channel);
        }
    }

    /// Snapshot the senders registered under a channel
    ///
    /// The returned clones are delivered to outside the lock.
    pub fn snapshot(&self, channel: &str) -> Vec<mpsc::Sender<Envelope>> {
        let inner = self.inner.lock().expect("registry lock poisoned");
        inner
            .channels
            .get(channel)
            .map(|endpoints| endpoints.iter().map(|e| e.sender.clone()).collect())
            .unwrap_or_default()
    }

    /// Snapshot every sender across all channels
    pub fn snapshot_all(&self) -> Vec<mpsc::Sender<Envelope>> {
        let inner = self.inner.lock().expect("registry lock poisoned");
        inner
            .channels
            .values()
            .flat_map(|endpoints| endpoints.iter().map(|e| e.sender.clone()))
            .collect()
    }

    /// Number of endpoints currently registered under a channel
    pub fn subscriber_count(&self, channel: &str) -> usize {
        let inner = self.inner.lock().expect("registry lock poisoned");
        inner.channels.get(channel).map_or(0, Vec::len)
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> mpsc::Sender<Envelope> {
        mpsc::channel(4).0
    }

    #[test]
    fn test_add_creates_channel() {
        let registry = ChannelRegistry::new();
        assert_eq!(registry.subscriber_count("2"), 0);

        registry.add("2", sender());
        assert_eq!(registry.subscriber_count("2"), 1);
    }

    #[test]
    fn test_remove_is_exact_and_idempotent() {
        let registry = ChannelRegistry::new();
        let first = registry.add("7", sender());
        let second = registry.add("7", sender());
        assert_eq!(registry.subscriber_count("7"), 2);

        registry.remove("7", first);
        assert_eq!(registry.subscriber_count("7"), 1);

        // Double cleanup removes nothing further
        registry.remove("7", first);
        assert_eq!(registry.subscriber_count("7"), 1);

        registry.remove("7", second);
        assert_eq!(registry.subscriber_count("7"), 0);
    }

    #[test]
    fn test_empty_channel_entry_is_garbage_collected() {
        let registry = ChannelRegistry::new();
        let id = registry.add("9", sender());
        registry.remove("9", id);

        // Snapshot of a missing channel is empty, not an error
        assert!(registry.snapshot("9").is_empty());
    }

    #[test]
    fn test_snapshot_is_scoped_to_channel() {
        let registry = ChannelRegistry::new();
        registry.add("1", sender());
        registry.add("1", sender());
        registry.add("2", sender());

        assert_eq!(registry.snapshot("1").len(), 2);
        assert_eq!(registry.snapshot("2").len(), 1);
        assert_eq!(registry.snapshot_all().len(), 3);
    }
}
