//! Headless mode - JSON event output instead of the TUI
//!
//! Runs a single submission and reports it as NDJSON (newline-delimited
//! JSON), one event per line, each tagged with an `"event"` field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"generation_started","request_id":1,"type":"API","timestamp":1704700001000}
//! {"event":"generation_completed","request_id":1,"code":"def test_x(): ...","elapsed_ms":812,"timestamp":1704700001812}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use testgen_app::EngineEvent;
use testgen_core::{Error, TestType};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    GenerationStarted {
        request_id: u64,
        #[serde(rename = "type")]
        test_type: TestType,
        timestamp: i64,
    },

    GenerationCompleted {
        request_id: u64,
        code: String,
        elapsed_ms: u64,
        timestamp: i64,
    },

    GenerationFailed {
        request_id: u64,
        error: String,
        timestamp: i64,
    },

    GenerationCancelled { request_id: u64, timestamp: i64 },

    /// Error outside of a request (bad configuration, missing input)
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Map an engine event; `Shutdown` has no headless counterpart.
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        match event {
            EngineEvent::GenerationStarted {
                request_id,
                test_type,
            } => Some(Self::GenerationStarted {
                request_id: request_id.get(),
                test_type: *test_type,
                timestamp,
            }),
            EngineEvent::GenerationCompleted {
                request_id,
                code,
                elapsed_ms,
            } => Some(Self::GenerationCompleted {
                request_id: request_id.get(),
                code: code.clone(),
                elapsed_ms: *elapsed_ms,
                timestamp,
            }),
            EngineEvent::GenerationFailed {
                request_id,
                message,
            } => Some(Self::GenerationFailed {
                request_id: request_id.get(),
                error: message.clone(),
                timestamp,
            }),
            EngineEvent::GenerationCancelled { request_id } => Some(Self::GenerationCancelled {
                request_id: request_id.get(),
                timestamp,
            }),
            EngineEvent::Shutdown => None,
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Report an engine or startup error; `fatal` follows [`Error::is_fatal`].
    pub fn from_error(err: &Error) -> Self {
        Self::error(err.to_string(), err.is_fatal())
    }

    /// Write this event as one JSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json).and_then(|_| out.flush()) {
            error!("Failed to write headless event: {}", e);
        }
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        self.write_to(&mut io::stdout().lock());
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_app::RequestTracker;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let mut buf = Vec::new();
        event.write_to(&mut buf);
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with('\n'));
        serde_json::from_str(line.trim_end()).expect("invalid JSON")
    }

    #[test]
    fn test_started_serialization() {
        let mut tracker = RequestTracker::new();
        let request_id = tracker.issue();
        let event = HeadlessEvent::from_engine(&EngineEvent::GenerationStarted {
            request_id,
            test_type: TestType::Api,
        })
        .unwrap();

        let value = to_value(&event);
        assert_eq!(value["event"], "generation_started");
        assert_eq!(value["request_id"], 1);
        assert_eq!(value["type"], "API");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_completed_serialization_keeps_code_verbatim() {
        let mut tracker = RequestTracker::new();
        let request_id = tracker.issue();
        let code = "test('shows error', () => {\n  expect(x).toBe(\"y\");\n})";
        let event = HeadlessEvent::from_engine(&EngineEvent::GenerationCompleted {
            request_id,
            code: code.to_string(),
            elapsed_ms: 10,
        })
        .unwrap();

        let value = to_value(&event);
        assert_eq!(value["event"], "generation_completed");
        assert_eq!(value["code"], code);
        assert_eq!(value["elapsed_ms"], 10);
    }

    #[test]
    fn test_failed_serialization() {
        let mut tracker = RequestTracker::new();
        let request_id = tracker.issue();
        let event = HeadlessEvent::from_engine(&EngineEvent::GenerationFailed {
            request_id,
            message: "could not connect".into(),
        })
        .unwrap();

        let value = to_value(&event);
        assert_eq!(value["event"], "generation_failed");
        assert_eq!(value["error"], "could not connect");
    }

    #[test]
    fn test_shutdown_is_not_emitted() {
        assert!(HeadlessEvent::from_engine(&EngineEvent::Shutdown).is_none());
    }

    #[test]
    fn test_error_event() {
        let value = to_value(&HeadlessEvent::error("bad url", true));
        assert_eq!(value["event"], "error");
        assert_eq!(value["fatal"], true);
    }

    #[test]
    fn test_error_event_from_startup_failure_is_fatal() {
        let err = Error::invalid_endpoint("ftp://gen.example.com", "unsupported scheme 'ftp'");
        let value = to_value(&HeadlessEvent::from_error(&err));
        assert_eq!(value["event"], "error");
        assert_eq!(value["fatal"], true);
        assert!(value["message"].as_str().unwrap().contains("ftp://gen.example.com"));
    }

    #[test]
    fn test_error_event_from_config_failure_is_not_fatal() {
        let err = Error::config("Failed to write config.toml: read-only");
        let value = to_value(&HeadlessEvent::from_error(&err));
        assert_eq!(value["fatal"], false);
    }
}
