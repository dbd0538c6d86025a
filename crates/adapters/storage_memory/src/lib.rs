//! # catpoint-adapter-storage-memory
//!
//! In-memory implementation of the [`SecurityRepository`] port.
//!
//! ## Responsibilities
//! - Hold the alarm status, arming status, and sensor set for the life of the process
//! - Return sensors in a stable order (by name, then id) for presentation
//!
//! ## Dependency rule
//! Depends on `catpoint-app` (for port traits) and `catpoint-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

use std::collections::HashMap;

use catpoint_app::ports::SecurityRepository;
use catpoint_domain::id::SensorId;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Process-local repository. Starts at `NoAlarm`, `Disarmed`, with no sensors.
#[derive(Debug, Default)]
pub struct InMemorySecurityRepository {
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: HashMap<SensorId, Sensor>,
}

impl InMemorySecurityRepository {
    /// Create an empty repository with default statuses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given arming status instead of `Disarmed`.
    #[must_use]
    pub fn with_arming_status(mut self, status: ArmingStatus) -> Self {
        self.arming_status = status;
        self
    }

    /// Seed the repository with sensors.
    #[must_use]
    pub fn with_sensors(mut self, sensors: impl IntoIterator<Item = Sensor>) -> Self {
        self.sensors
            .extend(sensors.into_iter().map(|sensor| (sensor.id, sensor)));
        self
    }
}

impl SecurityRepository for InMemorySecurityRepository {
    fn alarm_status(&self) -> AlarmStatus {
        self.alarm_status
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        tracing::debug!(%status, "storing alarm status");
        self.alarm_status = status;
    }

    fn arming_status(&self) -> ArmingStatus {
        self.arming_status
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        tracing::debug!(%status, "storing arming status");
        self.arming_status = status;
    }

    fn sensors(&self) -> Vec<Sensor> {
        let mut sensors: Vec<Sensor> = self.sensors.values().cloned().collect();
        sensors.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.id.as_uuid().cmp(&b.id.as_uuid()))
        });
        sensors
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors.insert(sensor.id, sensor);
    }

    fn remove_sensor(&mut self, id: SensorId) -> bool {
        self.sensors.remove(&id).is_some()
    }

    fn update_sensor(&mut self, sensor: Sensor) {
        tracing::debug!(sensor_id = %sensor.id, active = sensor.active, "storing sensor");
        self.sensors.insert(sensor.id, sensor);
    }

    fn sensor(&self, id: SensorId) -> Option<Sensor> {
        self.sensors.get(&id).cloned()
    }

    fn any_sensor_active(&self) -> bool {
        self.sensors.values().any(|sensor| sensor.active)
    }
}
