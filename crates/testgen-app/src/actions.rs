//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::message::Message;
use crate::request_tracker::RequestId;
use crate::UpdateAction;
use testgen_client::{GenerateRequest, GenerationClient};

/// Convenience type alias for in-flight generation tasks
pub type GenerationTaskMap = Arc<std::sync::Mutex<HashMap<RequestId, JoinHandle<()>>>>;

/// Execute an action by spawning or aborting a background task
pub fn handle_action<C>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<C>,
    generation_tasks: GenerationTaskMap,
    shutdown_rx: watch::Receiver<bool>,
) where
    C: GenerationClient + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnGeneration {
            request_id,
            request,
        } => {
            spawn_generation(
                request_id,
                request,
                msg_tx,
                client,
                &generation_tasks,
                shutdown_rx,
            );
        }

        UpdateAction::AbortGeneration { request_id } => {
            abort_generation(&generation_tasks, request_id);
        }
    }
}

/// Send one request in the background and report the result as a message.
///
/// The task stops early on shutdown. If the receiver is gone (the form was
/// torn down) the result is dropped.
fn spawn_generation<C>(
    request_id: RequestId,
    request: GenerateRequest,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<C>,
    generation_tasks: &GenerationTaskMap,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    C: GenerationClient + Send + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        let started = Instant::now();

        let result = tokio::select! {
            result = client.generate(&request) => result,
            _ = shutdown_rx.changed() => {
                debug!("Request {} abandoned on shutdown", request_id);
                return;
            }
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let msg = match result {
            Ok(response) => Message::GenerationCompleted {
                request_id,
                code: response.code,
                elapsed_ms,
            },
            Err(e) => {
                error!("Error generating tests: {}", e);
                Message::GenerationFailed {
                    request_id,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Message channel closed, dropping result of request {}", request_id);
        }
    });

    match generation_tasks.lock() {
        Ok(mut tasks) => {
            tasks.retain(|_, h| !h.is_finished());
            tasks.insert(request_id, handle);
        }
        Err(e) => warn!("Generation task map poisoned: {}", e),
    }
}

fn abort_generation(generation_tasks: &GenerationTaskMap, request_id: RequestId) {
    let handle = match generation_tasks.lock() {
        Ok(mut tasks) => tasks.remove(&request_id),
        Err(e) => {
            warn!("Generation task map poisoned: {}", e);
            None
        }
    };

    if let Some(handle) = handle {
        debug!("Aborting request {}", request_id);
        handle.abort();
    }
}
