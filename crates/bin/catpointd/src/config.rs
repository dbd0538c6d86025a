//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `catpoint.toml` in the working directory (or the path in
//! `CATPOINT_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

use catpoint_adapter_vision_fake::FakeVisionConfig;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::{Sensor, SensorType};
use catpoint_domain::status::ArmingStatus;

const DEFAULT_CONFIG_PATH: &str = "catpoint.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Initial security state.
    pub security: SecurityConfig,
    /// Fake verdict provider settings.
    pub vision: FakeVisionConfig,
    /// Sensors installed at startup.
    pub sensors: Vec<SensorConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Initial security state.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Arming status at startup.
    pub arming_status: ArmingStatus,
}

/// A sensor declared in the config file.
#[derive(Debug, Deserialize)]
pub struct SensorConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("CATPOINT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CATPOINT_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CATPOINT_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("CATPOINT_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("CATPOINT_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.initial_sensors()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the sensors declared under `[[sensors]]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Sensor`] if a declared sensor is invalid.
    pub fn initial_sensors(&self) -> Result<Vec<Sensor>, ConfigError> {
        self.sensors
            .iter()
            .map(|declared| {
                Sensor::builder()
                    .name(declared.name.as_str())
                    .sensor_type(declared.sensor_type)
                    .build()
                    .map_err(ConfigError::Sensor)
            })
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catpointd=info,catpoint=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A `[[sensors]]` entry is invalid.
    #[error("invalid sensor in config")]
    Sensor(#[source] CatpointError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.security.arming_status, ArmingStatus::Disarmed);
        assert!(config.vision.seed.is_none());
        assert!(config.sensors.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [security]
            arming_status = 'armed_home'

            [vision]
            seed = 7

            [[sensors]]
            name = 'Front door'
            type = 'door'

            [[sensors]]
            name = 'Hallway'
            type = 'motion'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.security.arming_status, ArmingStatus::ArmedHome);
        assert_eq!(config.vision.seed, Some(7));
        assert_eq!(config.sensors.len(), 2);
        assert_eq!(config.sensors[1].sensor_type, SensorType::Motion);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_sensor_with_empty_name() {
        let config: Config = toml::from_str(
            "
            [[sensors]]
            name = ''
            type = 'window'
        ",
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Sensor(_))));
    }

    #[test]
    fn should_build_inactive_initial_sensors() {
        let config: Config = toml::from_str(
            "
            [[sensors]]
            name = 'Kitchen window'
            type = 'window'
        ",
        )
        .unwrap();
        let sensors = config.initial_sensors().unwrap();
        assert_eq!(sensors.len(), 1);
        assert_eq!(sensors[0].name, "Kitchen window");
        assert!(!sensors[0].active);
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_report_parse_error_for_unknown_sensor_type() {
        let result: Result<Config, _> = toml::from_str(
            "
            [[sensors]]
            name = 'Garage'
            type = 'laser'
        ",
        );
        assert!(result.is_err());
    }
}
