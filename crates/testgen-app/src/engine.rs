//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel, in-flight generation tasks, the
//! shutdown signal and the generation client. Dropping the Engine aborts
//! every in-flight request so no late response can reach a torn-down form.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, warn};

use crate::actions::GenerationTaskMap;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::request_tracker::RequestId;
use crate::state::{AppState, GenerationOutcome};
use testgen_client::{GenerationClient, HttpGenerationClient};
use testgen_core::Result;

/// How long shutdown waits for each background task to wind down
const TASK_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Lightweight snapshot of state for change detection.
#[derive(Debug, Clone)]
struct StateSnapshot {
    pending: Option<RequestId>,
    outcome: Option<GenerationOutcome>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            pending: state.requests.pending(),
            outcome: state.last_outcome.clone(),
        }
    }
}

/// Orchestration engine for the generation form.
pub struct Engine<C = HttpGenerationClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// In-flight generation requests, keyed by request id
    pub generation_tasks: GenerationTaskMap,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    client: Arc<C>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<HttpGenerationClient> {
    /// Create an Engine talking to the service configured in `settings`.
    ///
    /// Fails if the endpoint URL is invalid or the HTTP client cannot be built.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let client = HttpGenerationClient::new(&settings.server.client_config())?;
        Ok(Self::with_client(settings, Arc::new(client)))
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> String {
        self.client.endpoint().to_string()
    }
}

impl<C> Engine<C>
where
    C: GenerationClient + Send + Sync + 'static,
{
    /// Create an Engine with an explicit client (tests, alternative transports).
    pub fn with_client(settings: Settings, client: Arc<C>) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let generation_tasks: GenerationTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));
        let (event_tx, _) = broadcast::channel(64);

        Self {
            state,
            msg_tx,
            msg_rx,
            generation_tasks,
            shutdown_tx,
            shutdown_rx,
            client,
            event_tx,
        }
    }

    /// Subscribe to engine events emitted after each processed message.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.client,
            &self.generation_tasks,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every frame.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message. `None` only if every sender is gone,
    /// which cannot happen while the Engine holds `msg_tx`.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_generating(&self) -> bool {
        self.state.is_generating()
    }

    /// Number of background requests that have not finished yet
    pub fn in_flight_count(&self) -> usize {
        match self.generation_tasks.lock() {
            Ok(tasks) => tasks.values().filter(|h| !h.is_finished()).count(),
            Err(_) => 0,
        }
    }

    /// Signal background tasks to stop and wait briefly for them.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let _ = self.shutdown_tx.send(true);

        let tasks: Vec<_> = match self.generation_tasks.lock() {
            Ok(mut map) => map.drain().collect(),
            Err(e) => {
                warn!("Generation task map poisoned: {}", e);
                Vec::new()
            }
        };

        for (request_id, handle) in tasks {
            match tokio::time::timeout(TASK_SHUTDOWN_TIMEOUT, handle).await {
                Ok(Ok(())) => debug!("Request {} task finished", request_id),
                Ok(Err(e)) if e.is_cancelled() => debug!("Request {} task aborted", request_id),
                Ok(Err(e)) => warn!("Request {} task panicked: {}", request_id, e),
                Err(_) => warn!("Request {} task shutdown timed out", request_id),
            }
        }
    }

    /// Compare pre/post snapshots and broadcast what changed.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if let Some(request_id) = post.pending {
            if pre.pending != post.pending {
                self.emit(EngineEvent::GenerationStarted {
                    request_id,
                    test_type: self.state.form.test_type(),
                });
            }
        }

        if pre.outcome == post.outcome {
            return;
        }

        let event = match &post.outcome {
            Some(GenerationOutcome::Succeeded {
                request_id,
                elapsed_ms,
                ..
            }) => EngineEvent::GenerationCompleted {
                request_id: *request_id,
                code: self.state.form.generated_code().to_string(),
                elapsed_ms: *elapsed_ms,
            },
            Some(GenerationOutcome::Failed {
                request_id,
                message,
                ..
            }) => EngineEvent::GenerationFailed {
                request_id: *request_id,
                message: message.clone(),
            },
            Some(GenerationOutcome::Cancelled { request_id }) => EngineEvent::GenerationCancelled {
                request_id: *request_id,
            },
            None => return,
        };
        self.emit(event);
    }

    /// send() fails only when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl<C> Drop for Engine<C> {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Ok(mut tasks) = self.generation_tasks.lock() {
            for (_, handle) in tasks.drain() {
                handle.abort();
            }
        }
    }
}
