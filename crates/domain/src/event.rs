//! Event: an immutable record of a notification sent to listeners.
//!
//! Events mirror the three listener callbacks so that out-of-process
//! subscribers (e.g. the SSE stream) see the same fan-out as in-process ones.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::status::AlarmStatus;
use crate::time::{Timestamp, now};

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A new alarm status was written.
    AlarmStatusChanged { status: AlarmStatus },
    /// An image was classified.
    CatDetected { detected: bool },
    /// One or more sensors were added, removed, or changed activation.
    SensorStatusChanged,
}

/// A timestamped [`EventKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(flatten)]
    pub kind: EventKind,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: now(),
        }
    }
}
