//! testgen - terminal front end for a remote test-case generation service
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use testgen::headless::HeadlessEvent;
use testgen_app::config;
use testgen_core::TestType;

/// Generate test cases from plain-language requirements
#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(about = "Generate UI or API test cases from requirements", long_about = None)]
struct Args {
    /// Directory containing `.testgen/config.toml` (default: current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Generation service base URL (overrides config and TESTGEN_BASE_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Initial test type
    #[arg(long = "type", value_name = "UI|API")]
    test_type: Option<TestType>,

    /// Run one submission with JSON output instead of the TUI
    #[arg(long)]
    headless: bool,

    /// Requirements text for headless mode; `-` reads stdin
    #[arg(long, value_name = "TEXT", requires = "headless")]
    requirements: Option<String>,

    /// Write a default `.testgen/config.toml` and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    testgen_core::logging::init()?;

    let args = Args::parse();

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        config::init_config_dir(&config_dir)?;
        eprintln!(
            "Config written to {}",
            config_dir.join(".testgen").join("config.toml").display()
        );
        return Ok(());
    }

    let settings = testgen::resolve_settings(&config_dir, args.base_url, args.test_type);

    if args.headless {
        let requirements = match read_requirements(args.requirements) {
            Ok(text) => text,
            Err(e) => {
                HeadlessEvent::error(e.to_string(), true).emit();
                return Err(e);
            }
        };
        let succeeded = testgen::run_headless(settings, requirements).await?;
        std::process::exit(if succeeded { 0 } else { 1 });
    }

    testgen_tui::run(settings).await?;
    Ok(())
}

/// Resolve `--requirements`: literal text, or stdin for `-`.
fn read_requirements(arg: Option<String>) -> color_eyre::Result<String> {
    match arg.as_deref() {
        None => Err(eyre!("--headless requires --requirements TEXT (or - for stdin)")),
        Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read requirements from stdin")?;
            Ok(text)
        }
        Some(text) => Ok(text.to_string()),
    }
}
