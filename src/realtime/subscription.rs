/**
 * SSE Subscription Handler
 *
 * HTTP surface of the hub: `GET /api/notifications/stream/{restaurant_id}`
 * returns a streaming `text/event-stream` response that stays open until
 * the client disconnects.
 *
 * # Headers
 *
 * Caching and intermediary buffering are disabled (`Cache-Control:
 * no-cache`, `X-Accel-Buffering: no`) so frames reach the client as soon
 * as they are written; buffered SSE is indistinguishable from a dead
 * connection.
 *
 * # Connection management
 *
 * The response body is the hub's frame stream. When hyper drops the body
 * after a client disconnect, the stream's endpoint guard unregisters the
 * subscriber; there is no explicit unsubscribe call.
 */

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use futures_util::StreamExt;

use crate::realtime::hub::NotificationHub;

/// Handle notification subscription
/// (GET /api/notifications/stream/{restaurant_id})
///
/// The path parameter is taken as an opaque string; numeric and string
/// restaurant ids normalize to the same channel inside the hub.
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
/// Cache-Control: no-cache
///
/// data: {"restaurant_id":"2","type":"connected"}
///
/// event: order_created
/// data: {"order":{...},"type":"order_created"}
/// ```
pub async fn handle_notification_subscription(
    State(hub): State<NotificationHub>,
    Path(restaurant_id): Path<String>,
) -> Response {
    tracing::info!(
        "[Realtime] Subscription request for restaurant {}",
        restaurant_id
    );

    let frames = hub.subscribe(restaurant_id).map(Ok::<_, Infallible>);

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
            (header::HeaderName::from_static("x-accel-buffering"), "no"),
        ],
        Body::from_stream(frames),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stream_response_headers() {
        let hub = NotificationHub::new();
        let response =
            handle_notification_subscription(State(hub), Path("2".to_string())).await;

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "text/event-stream");
        assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
        assert_eq!(headers[header::CONNECTION], "keep-alive");
        assert_eq!(headers["x-accel-buffering"], "no");
    }
}
