//! testgen - terminal front end for a remote test-case generation service
//!
//! The binary wires the CLI to either the TUI (`testgen-tui`) or the headless
//! JSON runner in this crate. Settings resolution lives here so both paths
//! apply the same precedence.

pub mod headless;

use std::path::Path;

use testgen_app::config::{self, Settings};
use testgen_core::TestType;
use tracing::info;

pub use headless::runner::{run_headless, run_submission};

/// Load settings and apply overrides: CLI flag > environment > file > default.
pub fn resolve_settings(
    config_dir: &Path,
    base_url: Option<String>,
    test_type: Option<TestType>,
) -> Settings {
    let mut settings = config::load_settings(config_dir);
    config::apply_env_overrides(&mut settings);

    if let Some(base_url) = base_url {
        info!("--base-url overrides base_url: {}", base_url);
        settings.server.base_url = base_url;
    }
    if let Some(test_type) = test_type {
        settings.form.default_test_type = test_type;
    }

    settings
}
