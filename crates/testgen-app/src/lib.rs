//! testgen-app - Application state and orchestration for testgen
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! generation form: the owned form state, request tracking for overlapping
//! submissions, the Engine shared by the TUI and headless runners,
//! configuration loading, and signal handling.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod request_tracker;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use form::FormState;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use request_tracker::{RequestId, RequestTracker};
pub use state::{AppState, Focus, GenerationOutcome};
