//! Configuration file parsing for testgen
//!
//! Supports:
//! - `.testgen/config.toml` - Global settings
//! - `TESTGEN_BASE_URL` - Environment override for the service URL

pub mod settings;
pub mod types;

pub use settings::{apply_env_overrides, init_config_dir, load_settings, BASE_URL_ENV};
pub use types::*;
