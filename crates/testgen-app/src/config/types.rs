//! Configuration types for testgen
//!
//! Defines:
//! - `Settings` - Global application settings (`.testgen/config.toml`)
//! - `ServerSettings`, `FormSettings`, `UiSettings` - its sections

use std::time::Duration;

use serde::{Deserialize, Serialize};
use testgen_client::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT_PATH,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use testgen_core::TestType;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Application settings (.testgen/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the generation service lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Whole-request deadline. 0 is treated as 1 second.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint_path: default_endpoint_path(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
            .with_endpoint_path(self.endpoint_path.clone())
            .with_timeouts(
                Duration::from_secs(self.request_timeout_secs.max(1)),
                Duration::from_secs(self.connect_timeout_secs.max(1)),
            )
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_endpoint_path() -> String {
    DEFAULT_ENDPOINT_PATH.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

/// Initial form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormSettings {
    #[serde(default)]
    pub default_test_type: TestType,
}

/// Terminal display preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Soft-wrap long lines in the result pane instead of clipping them
    #[serde(default)]
    pub wrap_result: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.server.endpoint_path, "/api/generate");
        assert_eq!(settings.server.request_timeout_secs, 120);
        assert_eq!(settings.form.default_test_type, TestType::Ui);
        assert!(!settings.ui.wrap_result);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[server]
base_url = "https://gen.example.com"

[form]
default_test_type = "API"
"#,
        )
        .unwrap();
        assert_eq!(settings.server.base_url, "https://gen.example.com");
        assert_eq!(settings.server.endpoint_path, "/api/generate");
        assert_eq!(settings.server.connect_timeout_secs, 10);
        assert_eq!(settings.form.default_test_type, TestType::Api);
    }

    #[test]
    fn test_unknown_test_type_is_rejected() {
        let res: Result<Settings, _> = toml::from_str(
            r#"
[form]
default_test_type = "E2E"
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_client_config_clamps_zero_timeouts() {
        let server = ServerSettings {
            request_timeout_secs: 0,
            connect_timeout_secs: 0,
            ..ServerSettings::default()
        };
        let cfg = server.client_config();
        assert_eq!(cfg.request_timeout, Duration::from_secs(1));
        assert_eq!(cfg.connect_timeout, Duration::from_secs(1));
        assert_eq!(
            cfg.endpoint().unwrap().as_str(),
            "http://127.0.0.1:8000/api/generate"
        );
    }
}
