//! Status bar widget
//!
//! One row describing the surfaced outcome: idle, generating (with the
//! pending request id and elapsed time), last success, last failure or
//! cancellation.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use testgen_app::state::{AppState, GenerationOutcome};

use crate::theme::{palette, styles};

/// Status bar widget showing generation state
pub struct StatusBar<'a> {
    state: &'a AppState,
    now: DateTime<Local>,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self::at(state, Local::now())
    }

    /// Render as if the current time were `now`
    pub fn at(state: &'a AppState, now: DateTime<Local>) -> Self {
        Self { state, now }
    }

    fn indicator(&self) -> Vec<Span<'static>> {
        if let Some(request_id) = self.state.requests.pending() {
            let elapsed = self
                .state
                .pending_since
                .map(|since| (self.now - since).num_seconds().max(0))
                .unwrap_or(0);
            return vec![
                Span::styled(
                    "↻ Generating",
                    Style::default()
                        .fg(palette::STATUS_YELLOW)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {} ({}s)", request_id, elapsed), styles::text_secondary()),
            ];
        }

        match &self.state.last_outcome {
            None => vec![Span::styled("○ Ready", styles::text_muted())],
            Some(GenerationOutcome::Succeeded {
                elapsed_ms,
                completed_at,
                ..
            }) => vec![
                Span::styled("● Generated", Style::default().fg(palette::STATUS_GREEN)),
                Span::styled(
                    format!(
                        " in {:.1}s at {}",
                        *elapsed_ms as f64 / 1000.0,
                        completed_at.format("%H:%M:%S")
                    ),
                    styles::text_secondary(),
                ),
            ],
            Some(GenerationOutcome::Failed { message, .. }) => vec![
                Span::styled(
                    "✗ Failed: ",
                    Style::default()
                        .fg(palette::STATUS_RED)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(single_line(message), Style::default().fg(palette::STATUS_RED)),
            ],
            Some(GenerationOutcome::Cancelled { request_id }) => vec![Span::styled(
                format!("○ Cancelled {}", request_id),
                styles::text_muted(),
            )],
        }
    }
}

/// Join a multi-line error body onto the status row.
fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        spans.extend(self.indicator());
        spans.push(Span::styled("  │  ", styles::text_muted()));
        spans.push(Span::styled(
            self.state.form.test_type().to_string(),
            styles::accent_bold(),
        ));

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::Duration;
    use testgen_app::handler::update;
    use testgen_app::message::Message;

    fn render(state: &AppState, now: DateTime<Local>) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::at(state, now), term.area());
        term
    }

    fn submit(state: &mut AppState) -> testgen_app::RequestId {
        update(state, Message::Submit);
        state.requests.pending().unwrap()
    }

    #[test]
    fn test_idle() {
        let state = AppState::new();
        let term = render(&state, Local::now());
        assert!(term.buffer_contains("Ready"));
        assert!(term.buffer_contains("UI"));
    }

    #[test]
    fn test_generating_shows_request_and_elapsed() {
        let mut state = AppState::new();
        submit(&mut state);
        let since = state.pending_since.unwrap();

        let term = render(&state, since + Duration::seconds(7));
        assert!(term.buffer_contains("Generating"));
        assert!(term.buffer_contains("#1 (7s)"));
    }

    #[test]
    fn test_success() {
        let mut state = AppState::new();
        let id = submit(&mut state);
        update(
            &mut state,
            Message::GenerationCompleted {
                request_id: id,
                code: "code".into(),
                elapsed_ms: 1500,
            },
        );

        let term = render(&state, Local::now());
        assert!(term.buffer_contains("Generated in 1.5s"));
    }

    #[test]
    fn test_failure_message_is_visible() {
        let mut state = AppState::new();
        let id = submit(&mut state);
        update(
            &mut state,
            Message::GenerationFailed {
                request_id: id,
                error: "could not connect".into(),
            },
        );

        let term = render(&state, Local::now());
        assert!(term.buffer_contains("Failed: could not connect"));
    }

    #[test]
    fn test_multiline_failure_body_stays_on_one_row() {
        let mut state = AppState::new();
        let id = submit(&mut state);
        update(
            &mut state,
            Message::GenerationFailed {
                request_id: id,
                error: "HTTP 502: upstream\r\n\n  gateway timeout\n".into(),
            },
        );

        let term = render(&state, Local::now());
        assert!(term.buffer_contains("Failed: HTTP 502: upstream gateway timeout"));
        assert!(term.buffer_contains("UI"));
    }

    #[test]
    fn test_single_line_joins_trimmed_lines() {
        assert_eq!(single_line("a\n\n b \r\nc"), "a b c");
        assert_eq!(single_line("plain"), "plain");
        assert_eq!(single_line(""), "");
    }

    #[test]
    fn test_cancelled() {
        let mut state = AppState::new();
        submit(&mut state);
        update(&mut state, Message::CancelGeneration);

        let term = render(&state, Local::now());
        assert!(term.buffer_contains("Cancelled #1"));
    }
}
