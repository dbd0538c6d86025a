//! Status listener port: push notifications from the security service.

use std::sync::Arc;

use catpoint_domain::status::AlarmStatus;

/// Receives notifications synchronously, after the repository write and
/// within the call that caused it.
pub trait StatusListener: Send + Sync {
    /// A new alarm status was written.
    fn on_alarm_status_changed(&self, status: AlarmStatus);

    /// An image was classified; `detected` is the verdict.
    fn on_cat_detected(&self, detected: bool);

    /// Sensors were added, removed, or changed activation.
    fn on_sensor_status_changed(&self);
}

impl<T: StatusListener + ?Sized> StatusListener for Arc<T> {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        (**self).on_alarm_status_changed(status);
    }

    fn on_cat_detected(&self, detected: bool) {
        (**self).on_cat_detected(detected);
    }

    fn on_sensor_status_changed(&self) {
        (**self).on_sensor_status_changed();
    }
}
