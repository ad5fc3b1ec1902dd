//! Test utilities for generation clients
//!
//! Provides [`MockGenerationClient`], an in-memory client that answers with
//! scripted replies in call order. Each reply can carry a delay so tests can
//! make responses arrive out of submission order.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use testgen_core::prelude::*;

use crate::client::GenerationClient;
use crate::protocol::{GenerateRequest, GenerateResponse};

#[derive(Debug, Clone)]
enum MockReply {
    Code(String),
    Fail(String),
}

#[derive(Debug, Clone)]
struct ScriptedReply {
    reply: MockReply,
    delay: Duration,
}

/// Scripted client. The n-th call to `generate` receives the n-th reply.
///
/// Calls beyond the script fail with `GenerationRequestFailed`.
#[derive(Debug, Default)]
pub struct MockGenerationClient {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed immediately with `code`.
    pub fn reply_with_code(self, code: impl Into<String>) -> Self {
        self.push(MockReply::Code(code.into()), Duration::ZERO)
    }

    /// Succeed with `code` after `delay`.
    pub fn reply_with_code_after(self, code: impl Into<String>, delay: Duration) -> Self {
        self.push(MockReply::Code(code.into()), delay)
    }

    /// Fail immediately, as a network rejection would.
    pub fn fail_with(self, message: impl Into<String>) -> Self {
        self.push(MockReply::Fail(message.into()), Duration::ZERO)
    }

    /// Fail after `delay`.
    pub fn fail_after(self, message: impl Into<String>, delay: Duration) -> Self {
        self.push(MockReply::Fail(message.into()), delay)
    }

    fn push(self, reply: MockReply, delay: Duration) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply { reply, delay });
        self
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

impl GenerationClient for MockGenerationClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.replies.lock().unwrap().pop_front();

        let Some(scripted) = next else {
            return Err(Error::generation("mock client has no scripted reply"));
        };

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }

        match scripted.reply {
            MockReply::Code(code) => Ok(GenerateResponse { code }),
            MockReply::Fail(message) => Err(Error::generation(message)),
        }
    }
}
