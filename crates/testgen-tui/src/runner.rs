//! Main TUI runner - entry point and event loop

use testgen_app::config::Settings;
use testgen_app::signals;
use testgen_app::Engine;
use testgen_client::GenerationClient;
use testgen_core::prelude::*;

use super::{event, render, terminal};

/// Run the form in the terminal until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    // Build the client first so a bad URL is reported before the screen switches
    let mut engine = Engine::from_settings(settings)?;
    let endpoint = engine.endpoint();

    terminal::install_panic_hook();
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = terminal::init()?;
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine, Some(&endpoint));

    engine.shutdown().await;
    terminal::restore();
    info!("TUI stopped");

    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<C>,
    endpoint: Option<&str>,
) -> Result<()>
where
    C: GenerationClient + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from generation tasks and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state, endpoint))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
