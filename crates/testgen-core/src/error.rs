//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Generation Errors
    // ─────────────────────────────────────────────────────────────
    /// Any failed attempt to obtain generated code: transport failure,
    /// timeout, non-success status or a malformed response body.
    #[error("Generation request failed: {message}")]
    GenerationRequestFailed { message: String },

    #[error("Failed to build HTTP client: {message}")]
    HttpClientBuild { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration/Argument Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid test type '{value}' (expected 'UI' or 'API')")]
    InvalidTestType { value: String },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::GenerationRequestFailed {
            message: message.into(),
        }
    }

    pub fn http_client_build(message: impl Into<String>) -> Self {
        Self::HttpClientBuild {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_test_type(value: impl Into<String>) -> Self {
        Self::InvalidTestType {
            value: value.into(),
        }
    }

    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_)
                | Error::HttpClientBuild { .. }
                | Error::InvalidEndpoint { .. }
                | Error::InvalidTestType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::generation("connection refused");
        assert_eq!(
            err.to_string(),
            "Generation request failed: connection refused"
        );

        let err = Error::invalid_test_type("E2E");
        assert!(err.to_string().contains("'E2E'"));
        assert!(err.to_string().contains("'UI' or 'API'"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_generation_failure_is_not_fatal() {
        assert!(!Error::generation("HTTP 500").is_fatal());
        assert!(!Error::config("bad toml").is_fatal());
    }

    #[test]
    fn test_startup_errors_are_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::invalid_endpoint("::", "relative URL without a base").is_fatal());
        assert!(Error::invalid_test_type("E2E").is_fatal());
        assert!(Error::http_client_build("tls backend").is_fatal());
    }
}
