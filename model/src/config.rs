use std::path::Path;

use serde::{Deserialize, Serialize};
use rapid_time::DateTime;

use crate::base_types::VehicleCount;
use crate::tariff::Tariff;
use crate::LoadError;

pub const DEFAULT_CAPACITY: VehicleCount = 20;
pub const DEFAULT_REFERENCE_TIME: &str = "2022-09-05T13:31";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub capacity: VehicleCount,
    pub tariff: Tariff,
    pub clock: ClockConfig,
}

/// How parked time is measured at check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ClockConfig {
    /// Parked time is the check-in time minus the fixed point `at`.
    Reference {
        #[serde(with = "crate::date_times::iso")]
        at: DateTime,
    },
    /// Parked time is the current system time minus the check-in time.
    System,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            capacity: DEFAULT_CAPACITY,
            tariff: Tariff::default(),
            clock: ClockConfig::default(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> ClockConfig {
        ClockConfig::Reference {
            at: DateTime::new(DEFAULT_REFERENCE_TIME),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Config, LoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Config, LoadError> {
        let config_string = std::fs::read_to_string(path)?;
        Config::from_yaml_str(&config_string)
    }
}
