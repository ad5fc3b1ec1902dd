//! Settings parser for .testgen/config.toml

use super::types::Settings;
use std::path::Path;
use testgen_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const TESTGEN_DIR: &str = ".testgen";

/// Environment variable overriding `server.base_url`
pub const BASE_URL_ENV: &str = "TESTGEN_BASE_URL";

/// Load settings from `.testgen/config.toml` under `config_dir`.
///
/// A missing or unparseable file yields defaults; the problem is logged.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(TESTGEN_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply environment overrides on top of file settings.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            info!("{} overrides base_url: {}", BASE_URL_ENV, base_url);
            settings.server.base_url = base_url.to_string();
        }
    }
}

/// Create `.testgen/config.toml` with commented defaults if it does not exist
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    let testgen_dir = config_dir.join(TESTGEN_DIR);

    if !testgen_dir.exists() {
        std::fs::create_dir_all(&testgen_dir)
            .map_err(|e| Error::config(format!("Failed to create .testgen dir: {}", e)))?;
    }

    let config_path = testgen_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# testgen configuration

[server]
base_url = "http://127.0.0.1:8000"   # Overridden by TESTGEN_BASE_URL or --base-url
endpoint_path = "/api/generate"
request_timeout_secs = 120
connect_timeout_secs = 10

[form]
default_test_type = "UI"              # "UI" or "API"

[ui]
wrap_result = false
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
