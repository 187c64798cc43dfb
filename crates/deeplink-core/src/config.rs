use std::path::Path;

use serde::de::DeserializeOwned;

use crate::app_config::{AppConfig, Environment, DEFAULT_MAPS_BASE_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("DEEPLINK_ENV", "development"))?;
    let log_level = or_default("DEEPLINK_LOG_LEVEL", "info");
    let maps_base_url = parse_base_url(
        "DEEPLINK_MAPS_BASE_URL",
        &or_default("DEEPLINK_MAPS_BASE_URL", DEFAULT_MAPS_BASE_URL),
    )?;

    Ok(AppConfig {
        env,
        log_level,
        maps_base_url,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "development" | "dev" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" | "prod" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DEEPLINK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Validate a base URL: must carry an http(s) scheme and a host.
///
/// Trailing slashes are stripped so callers can append `/?query` directly.
fn parse_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("'{raw}' must start with http:// or https://"),
        })?;

    if host.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("'{raw}' has no host"),
        });
    }

    Ok(trimmed.to_string())
}

/// Load a link request from a YAML or JSON file.
///
/// Files ending in `.json` are parsed with `serde_json`; everything else is
/// treated as YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or does not deserialize
/// into `T`.
pub fn load_request_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RequestFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| ConfigError::RequestFileParse {
        path: path.display().to_string(),
        reason,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
