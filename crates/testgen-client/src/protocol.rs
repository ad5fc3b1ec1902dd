//! Wire types for the generation endpoint
//!
//! Request:  `{ "requirements": string, "type": "UI" | "API" }`
//! Response: `{ "code": string, ... }` (unknown fields ignored)

use serde::{Deserialize, Serialize};
use testgen_core::prelude::*;
use testgen_core::TestType;

/// Body of `POST /api/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub requirements: String,
    #[serde(rename = "type")]
    pub test_type: TestType,
}

impl GenerateRequest {
    pub fn new(requirements: impl Into<String>, test_type: TestType) -> Self {
        Self {
            requirements: requirements.into(),
            test_type,
        }
    }
}

/// Successful response body. Only `code` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub code: String,
}

/// Validate a response status and body.
///
/// Non-2xx statuses, bodies that are not JSON, and JSON without a string
/// `code` field all collapse into `GenerationRequestFailed`.
pub fn parse_generate_response(status: u16, body: &str) -> Result<GenerateResponse> {
    if !(200..300).contains(&status) {
        return Err(Error::generation(format!(
            "server returned HTTP {}: {}",
            status,
            truncate_body(body)
        )));
    }

    serde_json::from_str::<GenerateResponse>(body).map_err(|e| {
        Error::generation(format!(
            "malformed response body ({}): {}",
            e,
            truncate_body(body)
        ))
    })
}

/// Keep diagnostics readable when a server returns an HTML error page.
fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(MAX_CHARS).collect();
    format!("{head}…")
}
