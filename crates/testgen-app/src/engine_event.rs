//! Domain events emitted by the Engine for external consumers
//!
//! Broadcast after each message processing cycle via `Engine::subscribe()`.
//! The headless runner turns these into newline-delimited JSON.

use crate::request_tracker::RequestId;
use testgen_core::TestType;

/// What changed during the last processed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A request was issued and is now the pending one
    GenerationStarted {
        request_id: RequestId,
        test_type: TestType,
    },

    /// The pending request settled with code, which is now displayed
    GenerationCompleted {
        request_id: RequestId,
        code: String,
        elapsed_ms: u64,
    },

    /// The pending request settled with an error
    GenerationFailed {
        request_id: RequestId,
        message: String,
    },

    GenerationCancelled { request_id: RequestId },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short label for logging and JSON output
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::GenerationStarted { .. } => "generation_started",
            EngineEvent::GenerationCompleted { .. } => "generation_completed",
            EngineEvent::GenerationFailed { .. } => "generation_failed",
            EngineEvent::GenerationCancelled { .. } => "generation_cancelled",
            EngineEvent::Shutdown => "shutdown",
        }
    }

    /// True once a request has reached a final state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EngineEvent::GenerationCompleted { .. }
                | EngineEvent::GenerationFailed { .. }
                | EngineEvent::GenerationCancelled { .. }
        )
    }
}
