//! Security repository port: the state container for statuses and sensors.

use catpoint_domain::id::SensorId;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Holds the current alarm status, arming status, and sensor set.
///
/// Calls are total: implementations absorb their own persistence failures.
/// Sensors are keyed by [`Sensor::id`].
pub trait SecurityRepository {
    /// Current alarm status.
    fn alarm_status(&self) -> AlarmStatus;

    /// Replace the alarm status.
    fn set_alarm_status(&mut self, status: AlarmStatus);

    /// Current arming status.
    fn arming_status(&self) -> ArmingStatus;

    /// Replace the arming status.
    fn set_arming_status(&mut self, status: ArmingStatus);

    /// Snapshot of every known sensor. Order carries no meaning.
    fn sensors(&self) -> Vec<Sensor>;

    /// Insert a sensor, replacing any sensor with the same id.
    fn add_sensor(&mut self, sensor: Sensor);

    /// Remove a sensor. Returns `false` when no sensor had that id.
    fn remove_sensor(&mut self, id: SensorId) -> bool;

    /// Persist a mutated sensor (upsert by id).
    fn update_sensor(&mut self, sensor: Sensor);

    /// Look up a single sensor.
    fn sensor(&self, id: SensorId) -> Option<Sensor> {
        self.sensors().into_iter().find(|sensor| sensor.id == id)
    }

    /// Whether at least one sensor is active.
    fn any_sensor_active(&self) -> bool {
        self.sensors().iter().any(|sensor| sensor.active)
    }
}
