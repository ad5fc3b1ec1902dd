//! Headless mode runner - one submission, no TUI
//!
//! Submits the given requirements once, streams engine events to the writer
//! as NDJSON and reports whether the request produced code.

use std::io::Write;

use tokio::sync::broadcast::error::TryRecvError;
use tracing::{info, warn};

use testgen_app::config::Settings;
use testgen_app::{message::Message, signals, Engine, EngineEvent};
use testgen_client::GenerationClient;
use testgen_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode, writing JSON events to stdout.
///
/// Returns `Ok(true)` when the service answered with code, `Ok(false)` on a
/// failed or cancelled request.
pub async fn run_headless(settings: Settings, requirements: String) -> Result<bool> {
    info!("testgen starting in HEADLESS mode");

    let mut engine = match Engine::from_settings(settings) {
        Ok(engine) => engine,
        Err(e) => {
            HeadlessEvent::from_error(&e).emit();
            return Err(e);
        }
    };

    signals::spawn_signal_handler(engine.msg_sender());

    let mut stdout = std::io::stdout();
    let result = run_submission(&mut engine, requirements, &mut stdout).await;

    engine.shutdown().await;
    info!("testgen headless mode exiting");
    result
}

/// Submit once and pump the engine until the request settles.
///
/// A `Quit` (SIGINT/SIGTERM) while waiting cancels the pending request.
pub async fn run_submission<C, W>(
    engine: &mut Engine<C>,
    requirements: String,
    out: &mut W,
) -> Result<bool>
where
    C: GenerationClient + Send + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();

    engine.process_message(Message::SetRequirements(requirements));
    engine.process_message(Message::Submit);

    loop {
        if let Some(succeeded) = emit_events(&mut events, out) {
            return Ok(succeeded);
        }

        if engine.should_quit() {
            if engine.is_generating() {
                engine.process_message(Message::CancelGeneration);
                continue;
            }
            info!("Quit requested");
            return Ok(false);
        }

        match engine.next_message().await {
            Some(msg) => engine.process_message(msg),
            None => {
                info!("Message channel closed");
                return Ok(false);
            }
        }
    }
}

/// Write all queued events. Returns the final verdict once a request settles.
fn emit_events<W: Write>(
    events: &mut tokio::sync::broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Option<bool> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine(&event) {
                    headless.write_to(out);
                }
                if event.is_terminal() {
                    return Some(matches!(event, EngineEvent::GenerationCompleted { .. }));
                }
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} events", skipped);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
        }
    }
}
