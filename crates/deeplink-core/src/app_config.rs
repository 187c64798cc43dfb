/// Base authority of the native maps deep-link scheme.
pub const DEFAULT_MAPS_BASE_URL: &str = "http://maps.apple.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Scheme and host that composed map links are rooted at.
    pub maps_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
        }
    }
}
