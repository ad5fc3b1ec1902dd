//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `generation`: Submit, completion, failure and cancellation
//! - `keys`: Key event handlers per focused field
//! - `scroll`: Result pane scrolling

pub(crate) mod generation;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::message::Message;
use crate::request_tracker::RequestId;
use testgen_client::GenerateRequest;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send `request` to the generation service in the background
    SpawnGeneration {
        request_id: RequestId,
        request: GenerateRequest,
    },

    /// Abort the background task for `request_id` if it is still running
    AbortGeneration { request_id: RequestId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
