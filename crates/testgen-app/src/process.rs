//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::actions::{handle_action, GenerationTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use testgen_client::GenerationClient;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in the same call; actions are handed to
/// [`handle_action`] as they appear.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
    generation_tasks: &GenerationTaskMap,
    shutdown_rx: &watch::Receiver<bool>,
) where
    C: GenerationClient + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(client),
                Arc::clone(generation_tasks),
                shutdown_rx.clone(),
            );
        }

        msg = result.message;
    }
}
