//! Shared plumbing for the deeplink crates: environment-driven configuration,
//! request-file loading, and small text, geometry, grouping and device-token
//! helpers.

pub mod app_config;
pub mod config;
pub mod device_token;
pub mod geometry;
pub mod grouping;
pub mod text;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, DEFAULT_MAPS_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env, load_request_file};
pub use device_token::DeviceToken;
pub use geometry::{degrees_to_radians, radians_to_degrees, Size};
pub use grouping::grouped_by;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read request file {path}: {source}")]
    RequestFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse request file {path}: {reason}")]
    RequestFileParse { path: String, reason: String },
}
