//! # testgen-client - Generation Service Client
//!
//! Talks to the external generation service: builds the `POST /api/generate`
//! request, validates the response and reduces every failure mode to
//! [`testgen_core::Error::GenerationRequestFailed`].
//!
//! Depends on [`testgen_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Protocol
//! - [`GenerateRequest`], [`GenerateResponse`] - JSON wire types
//! - [`parse_generate_response()`] - Validate a raw response body
//!
//! ### Client
//! - [`GenerationClient`] - Async trait implemented by every client
//! - [`HttpGenerationClient`] - reqwest-backed production client
//! - [`ClientConfig`] - Endpoint and timeouts
//!
//! ### Testing (feature `test-helpers`)
//! - [`test_utils::MockGenerationClient`] - Scripted in-memory client

pub mod client;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{
    ClientConfig, GenerationClient, HttpGenerationClient, LocalGenerationClient,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use protocol::{parse_generate_response, GenerateRequest, GenerateResponse};
