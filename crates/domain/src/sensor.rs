//! Sensor: a boolean-state device feeding the alarm.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatpointError, ValidationError};
use crate::id::SensorId;

/// Kind of physical sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => f.write_str("door"),
            Self::Window => f.write_str("window"),
            Self::Motion => f.write_str("motion"),
        }
    }
}

/// A door, window, or motion sensor and its current activation.
///
/// Repositories key sensors by [`id`](Self::id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    pub name: String,
    pub sensor_type: SensorType,
    pub active: bool,
}

impl Sensor {
    /// Create a builder for constructing a [`Sensor`].
    #[must_use]
    pub fn builder() -> SensorBuilder {
        SensorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CatpointError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Sensor`].
#[derive(Debug, Default)]
pub struct SensorBuilder {
    id: Option<SensorId>,
    name: Option<String>,
    sensor_type: Option<SensorType>,
    active: bool,
}

impl SensorBuilder {
    #[must_use]
    pub fn id(mut self, id: SensorId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn sensor_type(mut self, sensor_type: SensorType) -> Self {
        self.sensor_type = Some(sensor_type);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Consume the builder, validate, and return a [`Sensor`].
    ///
    /// Sensors start inactive and default to [`SensorType::Door`].
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Sensor, CatpointError> {
        let sensor = Sensor {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            sensor_type: self.sensor_type.unwrap_or(SensorType::Door),
            active: self.active,
        };
        sensor.validate()?;
        Ok(sensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_inactive_sensor_when_name_provided() {
        let sensor = Sensor::builder()
            .name("Front door")
            .sensor_type(SensorType::Door)
            .build()
            .unwrap();
        assert_eq!(sensor.name, "Front door");
        assert_eq!(sensor.sensor_type, SensorType::Door);
        assert!(!sensor.active);
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = Sensor::builder().sensor_type(SensorType::Motion).build();
        assert!(matches!(
            result,
            Err(CatpointError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_whitespace_only_name() {
        let result = Sensor::builder().name("   ").build();
        assert!(matches!(
            result,
            Err(CatpointError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_caller_assigned_id() {
        let id = SensorId::new();
        let sensor = Sensor::builder().id(id).name("Hall").build().unwrap();
        assert_eq!(sensor.id, id);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let sensor = Sensor::builder()
            .name("Kitchen window")
            .sensor_type(SensorType::Window)
            .active(true)
            .build()
            .unwrap();
        let json = serde_json::to_value(&sensor).unwrap();
        assert_eq!(json["sensor_type"], "window");
        let parsed: Sensor = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sensor);
    }
}
