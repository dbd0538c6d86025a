//! Security service: drives the alarm rules against the repository.
//!
//! Every public operation reads the current state, asks
//! [`decide`](catpoint_domain::alarm::decide) for the outcome, writes it back
//! through the [`SecurityRepository`], and notifies listeners before returning.

use catpoint_domain::alarm::{Decision, Rule, Snapshot, Trigger, decide};
use catpoint_domain::error::{CatpointError, NotFoundError};
use catpoint_domain::id::{ListenerId, SensorId};
use catpoint_domain::image::Image;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::ports::{ImageService, SecurityRepository, StatusListener};

/// Minimum confidence, in percent, for an image to count as showing a cat.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Application service owning the alarm state machine.
///
/// Operations take `&mut self`, so one caller drives the machine at a time.
/// Share it across tasks behind a mutex held for the whole call.
pub struct SecurityService<R, I> {
    repo: R,
    image_service: I,
    listeners: Vec<(ListenerId, Box<dyn StatusListener>)>,
    cat_in_view: bool,
}

impl<R, I> SecurityService<R, I>
where
    R: SecurityRepository,
    I: ImageService,
{
    /// Create a new service backed by the given repository and verdict provider.
    pub fn new(repo: R, image_service: I) -> Self {
        Self {
            repo,
            image_service,
            listeners: Vec::new(),
            cat_in_view: false,
        }
    }

    /// Register a listener. Listeners are notified in registration order.
    pub fn add_status_listener(&mut self, listener: impl StatusListener + 'static) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` when `id` was not registered.
    pub fn remove_status_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn alarm_status(&self) -> AlarmStatus {
        self.repo.alarm_status()
    }

    pub fn arming_status(&self) -> ArmingStatus {
        self.repo.arming_status()
    }

    /// Verdict of the most recently processed image.
    pub fn cat_detected(&self) -> bool {
        self.cat_in_view
    }

    pub fn sensors(&self) -> Vec<Sensor> {
        self.repo.sensors()
    }

    /// Look up a sensor by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::NotFound`] when no sensor has that id.
    pub fn sensor(&self, id: SensorId) -> Result<Sensor, CatpointError> {
        self.repo.sensor(id).ok_or_else(|| {
            NotFoundError {
                entity: "Sensor",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Add a sensor to the repository. No alarm side effects.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the sensor fails domain invariants.
    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<(), CatpointError> {
        sensor.validate()?;
        tracing::debug!(sensor_id = %sensor.id, name = %sensor.name, "adding sensor");
        self.repo.add_sensor(sensor);
        self.notify_sensor_status_changed();
        Ok(())
    }

    /// Remove a sensor. Removing an unknown sensor is a no-op returning `false`.
    pub fn remove_sensor(&mut self, id: SensorId) -> bool {
        let removed = self.repo.remove_sensor(id);
        if removed {
            tracing::debug!(sensor_id = %id, "removed sensor");
            self.notify_sensor_status_changed();
        }
        removed
    }

    /// Record a sensor's activation value and evaluate the alarm rules.
    ///
    /// The sensor is written back even when `active` equals its current value.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::NotFound`] when no sensor has that id. Nothing
    /// is written in that case.
    pub fn change_sensor_activation_status(
        &mut self,
        id: SensorId,
        active: bool,
    ) -> Result<Sensor, CatpointError> {
        let sensor = self.sensor(id)?;
        let sensor = self.apply_activation(sensor, active);
        self.notify_sensor_status_changed();
        Ok(sensor)
    }

    /// Classify `image` and evaluate the alarm rules against the verdict.
    ///
    /// Returns the verdict. Cat-detection listeners are notified whatever the
    /// arming status.
    pub fn process_image(&mut self, image: &Image) -> bool {
        let contains_cat = self
            .image_service
            .image_contains_cat(image, DEFAULT_CONFIDENCE_THRESHOLD);
        tracing::debug!(bytes = image.len(), contains_cat, "image classified");
        self.cat_in_view = contains_cat;

        let decision = decide(
            self.snapshot(),
            Trigger::ImageVerdict {
                contains_cat,
                any_sensor_active: self.repo.any_sensor_active(),
            },
        );
        self.apply_decision(decision);

        for (_, listener) in &self.listeners {
            listener.on_cat_detected(contains_cat);
        }
        contains_cat
    }

    /// Replace the arming status.
    ///
    /// Disarming resets the alarm. Arming deactivates every sensor through the
    /// same path as [`change_sensor_activation_status`](Self::change_sensor_activation_status),
    /// so clearing the last active sensor while pending also clears the alarm.
    pub fn set_arming_status(&mut self, status: ArmingStatus) {
        let previous = self.repo.arming_status();
        self.repo.set_arming_status(status);
        tracing::info!(from = %previous, to = %status, "arming status changed");

        let decision = decide(self.snapshot(), Trigger::ArmingChanged { to: status });
        if decision.reset_sensors {
            for sensor in self.repo.sensors() {
                self.apply_activation(sensor, false);
            }
            self.notify_sensor_status_changed();
        }
        self.apply_decision(decision);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            alarm: self.repo.alarm_status(),
            arming: self.repo.arming_status(),
            cat_in_view: self.cat_in_view,
        }
    }

    fn apply_activation(&mut self, mut sensor: Sensor, active: bool) -> Sensor {
        let was_active = sensor.active;
        sensor.active = active;
        self.repo.update_sensor(sensor.clone());

        let decision = decide(
            self.snapshot(),
            Trigger::SensorActivation {
                was_active,
                now_active: active,
                any_active_after: self.repo.any_sensor_active(),
            },
        );
        tracing::debug!(
            sensor_id = %sensor.id,
            was_active,
            active,
            rule = ?decision.rule,
            "sensor activation recorded"
        );
        self.apply_decision(decision);
        sensor
    }

    fn apply_decision(&mut self, decision: Decision) {
        if let Some(status) = decision.alarm {
            self.set_alarm_status(status, decision.rule);
        }
    }

    fn set_alarm_status(&mut self, status: AlarmStatus, rule: Rule) {
        let previous = self.repo.alarm_status();
        self.repo.set_alarm_status(status);
        if previous != status {
            tracing::info!(from = %previous, to = %status, ?rule, "alarm status changed");
        }
        for (_, listener) in &self.listeners {
            listener.on_alarm_status_changed(status);
        }
    }

    fn notify_sensor_status_changed(&self) {
        for (_, listener) in &self.listeners {
            listener.on_sensor_status_changed();
        }
    }
}
