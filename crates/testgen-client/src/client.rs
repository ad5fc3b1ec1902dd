//! Generation client trait and the reqwest-backed implementation

use std::time::Duration;

use testgen_core::prelude::*;
use url::Url;

use crate::protocol::{parse_generate_response, GenerateRequest, GenerateResponse};

pub const DEFAULT_ENDPOINT_PATH: &str = "/api/generate";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Anything that can turn a [`GenerateRequest`] into generated code.
///
/// Every failure must be reported as `Error::GenerationRequestFailed`.
#[trait_variant::make(GenerationClient: Send)]
pub trait LocalGenerationClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse>;
}

/// Where and how to reach the generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme + host (+ optional prefix), e.g. `http://127.0.0.1:8000`
    pub base_url: String,
    /// Path appended to `base_url`
    pub endpoint_path: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = path.into();
        self
    }

    pub fn with_timeouts(mut self, request: Duration, connect: Duration) -> Self {
        self.request_timeout = request;
        self.connect_timeout = connect;
        self
    }

    /// Full endpoint URL. Only absolute `http`/`https` URLs are accepted.
    pub fn endpoint(&self) -> Result<Url> {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = self.endpoint_path.trim();
        let joined = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };

        let url = Url::parse(&joined)
            .map_err(|e| Error::invalid_endpoint(joined.clone(), e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::invalid_endpoint(
                joined,
                format!("unsupported scheme '{other}'"),
            )),
        }
    }
}

/// Production client: one JSON `POST` per request, no retries.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpGenerationClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| Error::http_client_build(e.to_string()))?;

        info!("Generation endpoint: {}", endpoint);
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            "POST {} (type={}, {} bytes of requirements)",
            self.endpoint,
            request.test_type,
            request.requirements.len()
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| Error::generation(describe_transport_error(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::generation(describe_transport_error(&e)))?;

        parse_generate_response(status, &body)
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("could not connect: {err}")
    } else {
        err.to_string()
    }
}
