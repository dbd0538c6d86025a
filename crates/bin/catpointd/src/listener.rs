//! Listener that writes status notifications to the log.

use catpoint_app::ports::StatusListener;
use catpoint_domain::status::AlarmStatus;

/// Logs every notification from the security service at `INFO`.
#[derive(Debug, Default)]
pub struct TracingListener;

impl StatusListener for TracingListener {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        tracing::info!(%status, description = status.description(), "alarm status");
    }

    fn on_cat_detected(&self, detected: bool) {
        tracing::info!(detected, "image classified");
    }

    fn on_sensor_status_changed(&self) {
        tracing::info!("sensor status changed");
    }
}
