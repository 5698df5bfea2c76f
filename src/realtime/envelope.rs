/**
 * Event Envelope
 *
 * One notification unit passed through the hub: an optional event name
 * plus an arbitrary JSON payload. Envelopes are transient values; they
 * exist only between `publish` and delivery and carry no identity,
 * ordering field or timestamp.
 */

use serde_json::Value;

/// A single notification travelling through the hub
///
/// The payload is opaque to the hub and is serialized as-is onto the
/// wire. An absent event name produces an unnamed SSE frame (`data:`
/// lines only).
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Optional short event name (e.g. `order_created`)
    pub event: Option<String>,
    /// Arbitrary structured payload, opaque to the hub
    pub payload: Value,
}

impl Envelope {
    /// Create a named envelope
    pub fn named(event: impl Into<String>, payload: Value) -> Self {
        Self {
            event: Some(event.into()),
            payload,
        }
    }

    /// Create an unnamed envelope (no `event:` line on the wire)
    pub fn unnamed(payload: Value) -> Self {
        Self {
            event: None,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_envelope() {
        let envelope = Envelope::named("order_created", json!({"order_id": 1}));
        assert_eq!(envelope.event.as_deref(), Some("order_created"));
        assert_eq!(envelope.payload["order_id"], 1);
    }

    #[test]
    fn test_unnamed_envelope() {
        let envelope = Envelope::unnamed(json!({"type": "connected"}));
        assert!(envelope.event.is_none());
    }
}
