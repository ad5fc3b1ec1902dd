//! Key event handlers for each focused field

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use testgen_core::TestType;

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(state, key) {
        return Some(msg);
    }

    match state.focus {
        Focus::Requirements => handle_key_requirements(key),
        Focus::TestType => handle_key_test_type(key),
        Focus::GenerateButton => handle_key_generate_button(key),
        Focus::Result => handle_key_result(key),
    }
}

/// Keys that behave the same regardless of focus
fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        // Submit from anywhere, including while typing requirements
        InputKey::CharCtrl('g') | InputKey::F(5) => Some(Message::Submit),
        InputKey::Esc if state.is_generating() => Some(Message::CancelGeneration),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        _ => None,
    }
}

fn handle_key_requirements(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Enter => Some(Message::InsertNewline),
        InputKey::Backspace => Some(Message::DeleteBackward),
        InputKey::CharCtrl('u') => Some(Message::ClearRequirements),
        _ => None,
    }
}

fn handle_key_test_type(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Right | InputKey::Up | InputKey::Down | InputKey::Char(' ') => {
            Some(Message::ToggleTestType)
        }
        InputKey::Char('u' | 'U') => Some(Message::SetTestType(TestType::Ui)),
        InputKey::Char('a' | 'A') => Some(Message::SetTestType(TestType::Api)),
        InputKey::Enter => Some(Message::FocusNext),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_generate_button(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Submit),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_result(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollResultUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollResultDown),
        InputKey::PageUp => Some(Message::ScrollResultPageUp),
        InputKey::PageDown => Some(Message::ScrollResultPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollResultToTop),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
