//! Result pane scrolling

use crate::state::AppState;

use super::UpdateResult;

/// Lines moved by PageUp/PageDown
pub(crate) const PAGE_LINES: u16 = 10;

pub(crate) fn scroll_up(state: &mut AppState, lines: u16) -> UpdateResult {
    state.result_scroll = state.result_scroll.saturating_sub(lines);
    UpdateResult::none()
}

/// Scroll down, stopping with the last line at the top of the pane.
pub(crate) fn scroll_down(state: &mut AppState, lines: u16) -> UpdateResult {
    let max = state.result_line_count().saturating_sub(1);
    state.result_scroll = state.result_scroll.saturating_add(lines).min(max);
    UpdateResult::none()
}

pub(crate) fn scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.result_scroll = 0;
    UpdateResult::none()
}
