//! Generation lifecycle handlers
//!
//! Submission issues a fresh [`RequestId`]; completion and failure apply only
//! when their id is still the pending one. Anything else is a stale response
//! from a superseded or cancelled request and leaves state untouched.

use chrono::Local;
use tracing::{debug, info, warn};

use crate::request_tracker::RequestId;
use crate::state::{AppState, GenerationOutcome};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let request = state.form.to_request();

    if let Some(previous) = state.requests.pending() {
        debug!("Request {} superseded by a new submission", previous);
    }

    let request_id = state.requests.issue();
    state.pending_since = Some(Local::now());

    info!(
        "Submitting request {} (type={}, {} chars)",
        request_id,
        request.test_type,
        request.requirements.chars().count()
    );

    UpdateResult::action(UpdateAction::SpawnGeneration {
        request_id,
        request,
    })
}

pub(crate) fn handle_completed(
    state: &mut AppState,
    request_id: RequestId,
    code: String,
    elapsed_ms: u64,
) -> UpdateResult {
    if !state.requests.settle(request_id) {
        debug!("Discarding stale response for request {}", request_id);
        return UpdateResult::none();
    }

    info!(
        "Request {} completed in {}ms ({} bytes)",
        request_id,
        elapsed_ms,
        code.len()
    );

    state.form.apply_generated_code(code);
    state.result_scroll = 0;
    state.pending_since = None;
    state.last_outcome = Some(GenerationOutcome::Succeeded {
        request_id,
        elapsed_ms,
        completed_at: Local::now(),
    });

    UpdateResult::none()
}

/// Failures keep the previously generated code on screen.
pub(crate) fn handle_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: String,
) -> UpdateResult {
    if !state.requests.settle(request_id) {
        debug!("Discarding stale failure for request {}: {}", request_id, error);
        return UpdateResult::none();
    }

    warn!("Request {} failed: {}", request_id, error);

    state.pending_since = None;
    state.last_outcome = Some(GenerationOutcome::Failed {
        request_id,
        message: error,
        completed_at: Local::now(),
    });

    UpdateResult::none()
}

pub(crate) fn handle_cancel(state: &mut AppState) -> UpdateResult {
    let Some(request_id) = state.requests.cancel() else {
        return UpdateResult::none();
    };

    info!("Cancelled request {}", request_id);

    state.pending_since = None;
    state.last_outcome = Some(GenerationOutcome::Cancelled { request_id });

    UpdateResult::action(UpdateAction::AbortGeneration { request_id })
}
