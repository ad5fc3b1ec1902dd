use super::*;
use crate::test_utils::TestTerminal;
use testgen_app::handler::update;
use testgen_app::message::Message;
use testgen_app::state::AppState;
use testgen_core::TestType;

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state, Some("http://127.0.0.1:8000/api/generate")));
    term
}

fn complete_with(state: &mut AppState, code: &str) {
    update(state, Message::Submit);
    let request_id = state.requests.pending().unwrap();
    update(
        state,
        Message::GenerationCompleted {
            request_id,
            code: code.to_string(),
            elapsed_ms: 42,
        },
    );
}

#[test]
fn test_initial_screen() {
    let state = AppState::new();
    let term = draw(&state);

    assert!(term.buffer_contains("testgen"));
    assert!(term.buffer_contains("Requirements"));
    assert!(term.buffer_contains("Test type"));
    assert!(term.buffer_contains("Generate"));
    assert!(term.buffer_contains("No generated tests yet"));
    assert!(term.buffer_contains("Ready"));
}

#[test]
fn test_login_scenario_displays_exact_code() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::SetRequirements("Login page must validate empty fields".into()),
    );
    complete_with(&mut state, "test('shows error', () => {...})");

    let term = draw(&state);
    assert!(term.buffer_contains("Login page must validate empty fields"));
    assert!(term.buffer_contains("test('shows error', () => {...})"));
    assert!(term.buffer_contains("Generated in 0.0s"));
}

#[test]
fn test_empty_code_looks_like_initial_state() {
    let mut state = AppState::new();
    update(&mut state, Message::SetTestType(TestType::Api));
    complete_with(&mut state, "");

    let term = draw(&state);
    assert!(term.buffer_contains("No generated tests yet"));
    assert!(term.buffer_contains("API"));
}

#[test]
fn test_failure_keeps_code_and_shows_message() {
    let mut state = AppState::new();
    complete_with(&mut state, "def test_previous(): pass");

    update(&mut state, Message::Submit);
    let request_id = state.requests.pending().unwrap();
    update(
        &mut state,
        Message::GenerationFailed {
            request_id,
            error: "server returned HTTP 500".into(),
        },
    );

    let term = draw(&state);
    assert!(term.buffer_contains("def test_previous(): pass"));
    assert!(term.buffer_contains("server returned HTTP 500"));
}

#[test]
fn test_generating_state() {
    let mut state = AppState::new();
    update(&mut state, Message::Submit);

    let term = draw(&state);
    assert!(term.buffer_contains("Generating"));
}

#[test]
fn test_cursor_shown_only_for_requirements() {
    let mut state = AppState::new();
    update(&mut state, Message::SetRequirements("abc".into()));

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state, None));
    let cursor = term.terminal.get_cursor_position().unwrap();
    // Requirements box starts under the 3-row header; text starts inside its border
    assert_eq!((cursor.x, cursor.y), (4, 4));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = AppState::new();
    complete_with(&mut state, "line\n".repeat(50).as_str());
    update(&mut state, Message::ScrollResultPageDown);

    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state, None));
    assert!(term.buffer_contains("testgen"));
}
