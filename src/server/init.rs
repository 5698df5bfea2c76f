/**
 * Server Initialization
 *
 * Builds the application state (order store + notification hub) and the
 * router. State is constructed once here and injected everywhere; no
 * component reaches for ambient globals.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Create the shared application state (empty order store, hub with
///    no subscribers)
/// 2. Wire all routes against that state
pub fn create_app() -> Router<()> {
    tracing::info!("[Startup] Initializing application state");
    let app_state = AppState::new();

    create_router(app_state)
}
