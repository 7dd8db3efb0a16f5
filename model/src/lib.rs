pub mod base_types;
pub mod config;
pub mod date_times;
pub mod json_serialisation;
pub mod tariff;
pub mod vehicle_types;
pub mod vehicles;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid time stamp: {0}")]
    Time(#[from] chrono::ParseError),
}

#[cfg(test)]
#[path = "json_serialisation_tests.rs"]
mod json_serialisation_tests;
