/**
 * Event-Stream Wire Framing
 *
 * Formats envelopes into the `text/event-stream` representation consumed
 * by browsers' `EventSource`:
 *
 * ```text
 * event: order_status_updated
 * data: {"type":"order_status_updated","order":{...}}
 *
 * ```
 *
 * The payload is serialized to single-line JSON; if the serialized form
 * legitimately contains newlines, each physical line gets its own
 * `data:` prefix. A frame always ends with a blank line.
 *
 * Keep-alive frames are SSE comments (`: keep-alive`), not events, so
 * client-side parsers that branch on frame shape never mistake them for
 * data.
 */

use crate::realtime::envelope::Envelope;

/// Keep-alive frame sent on idle connections
///
/// A comment line per the SSE grammar; `EventSource` ignores it but
/// intermediary proxies see traffic and keep the connection open.
pub const KEEP_ALIVE_FRAME: &str = ": keep-alive\n\n";

/// Format an envelope as one event-stream frame
///
/// A malformed payload never aborts the connection: values that cannot
/// be serialized are coerced to `null` and the stream keeps flowing.
pub fn event_frame(envelope: &Envelope) -> String {
    let payload = serde_json::to_string(&envelope.payload)
        .unwrap_or_else(|_| "null".to_string());

    let mut frame = String::with_capacity(payload.len() + 16);
    if let Some(event) = &envelope.event {
        frame.push_str("event: ");
        frame.push_str(event);
        frame.push('\n');
    }
    for line in payload.lines() {
        frame.push_str("data: ");
        frame.push_str(line);
        frame.push('\n');
    }
    frame.push('\n');
    frame
}

/// Format the synthetic acknowledgment sent first on every subscription
///
/// Clients use it to confirm the subscription took effect before any
/// real event arrives.
pub fn connected_frame(restaurant_id: &str) -> String {
    event_frame(&Envelope::unnamed(serde_json::json!({
        "type": "connected",
        "restaurant_id": restaurant_id,
    })))
}
