//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use catpoint_domain::event::{Event, EventKind};
use catpoint_domain::status::AlarmStatus;

use crate::ports::StatusListener;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Registered with the security service as a [`StatusListener`], it turns
/// each notification into an [`Event`] for out-of-process subscribers.
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
#[derive(Clone)]
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, kind: EventKind) {
        // broadcast::send fails only when there are zero receivers.
        let _ = self.sender.send(Event::new(kind));
    }
}

impl StatusListener for InProcessEventBus {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        self.publish(EventKind::AlarmStatusChanged { status });
    }

    fn on_cat_detected(&self, detected: bool) {
        self.publish(EventKind::CatDetected { detected });
    }

    fn on_sensor_status_changed(&self) {
        self.publish(EventKind::SensorStatusChanged);
    }
}
