/**
 * Application State Management
 *
 * `AppState` is the central state container, constructed once per
 * process in `server::init` and cloned into every handler. The `FromRef`
 * implementations let handlers extract just the piece they use (e.g.
 * the subscription handler takes only the hub).
 *
 * # Thread Safety
 *
 * Both fields are cheap clones over shared interiors: the order store
 * is an `Arc<RwLock<..>>` map and the hub shares one channel registry
 * across clones.
 */

use axum::extract::FromRef;

use crate::orders::store::OrderStore;
use crate::realtime::hub::NotificationHub;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// In-memory order store
    pub orders: OrderStore,
    /// Real-time notification hub
    pub hub: NotificationHub,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            orders: OrderStore::new(),
            hub: NotificationHub::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Allows handlers to extract `State<OrderStore>` directly
impl FromRef<AppState> for OrderStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.orders.clone()
    }
}

/// Allows handlers to extract `State<NotificationHub>` directly
impl FromRef<AppState> for NotificationHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hub.clone()
    }
}
