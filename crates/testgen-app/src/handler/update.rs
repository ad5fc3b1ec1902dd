//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{generation, keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Only drives redraws of the elapsed-time indicator
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Form Editing
        // ─────────────────────────────────────────────────────────
        Message::SetRequirements(text) => {
            state.form.set_requirements(text);
            UpdateResult::none()
        }
        Message::InsertChar(c) => {
            state.form.push_char(c);
            UpdateResult::none()
        }
        Message::InsertNewline => {
            state.form.push_newline();
            UpdateResult::none()
        }
        Message::PasteText(text) => {
            if state.focus == Focus::Requirements {
                state.form.push_str(&text);
            }
            UpdateResult::none()
        }
        Message::DeleteBackward => {
            state.form.pop_char();
            UpdateResult::none()
        }
        Message::ClearRequirements => {
            state.form.clear_requirements();
            UpdateResult::none()
        }
        Message::SetTestType(test_type) => {
            state.form.set_test_type(test_type);
            UpdateResult::none()
        }
        Message::ToggleTestType => {
            state.form.toggle_test_type();
            UpdateResult::none()
        }
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Generation
        // ─────────────────────────────────────────────────────────
        Message::Submit => generation::handle_submit(state),
        Message::CancelGeneration => generation::handle_cancel(state),
        Message::GenerationCompleted {
            request_id,
            code,
            elapsed_ms,
        } => generation::handle_completed(state, request_id, code, elapsed_ms),
        Message::GenerationFailed { request_id, error } => {
            generation::handle_failed(state, request_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Result Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollResultUp => scroll::scroll_up(state, 1),
        Message::ScrollResultDown => scroll::scroll_down(state, 1),
        Message::ScrollResultPageUp => scroll::scroll_up(state, scroll::PAGE_LINES),
        Message::ScrollResultPageDown => scroll::scroll_down(state, scroll::PAGE_LINES),
        Message::ScrollResultToTop => scroll::scroll_to_top(state),
    }
}
