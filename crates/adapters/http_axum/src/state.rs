//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use catpoint_app::event_bus::InProcessEventBus;
use catpoint_app::ports::{ImageService, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and verdict provider to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`: only the `Arc` wrapper and the bus handle are cloned.
pub struct AppState<R, I> {
    /// The alarm state machine, serialised behind a mutex.
    pub security: Arc<Mutex<SecurityService<R, I>>>,
    /// Event bus the SSE stream subscribes to.
    pub event_bus: InProcessEventBus,
}

impl<R, I> Clone for AppState<R, I> {
    fn clone(&self) -> Self {
        Self {
            security: Arc::clone(&self.security),
            event_bus: self.event_bus.clone(),
        }
    }
}

impl<R, I> AppState<R, I>
where
    R: SecurityRepository + Send + 'static,
    I: ImageService + Send + 'static,
{
    /// Create the state, registering `event_bus` as a listener on the service.
    pub fn new(mut security: SecurityService<R, I>, event_bus: InProcessEventBus) -> Self {
        security.add_status_listener(event_bus.clone());
        Self {
            security: Arc::new(Mutex::new(security)),
            event_bus,
        }
    }
}
