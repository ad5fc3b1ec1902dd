//! Generate button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct GenerateButton {
    focused: bool,
    generating: bool,
}

impl GenerateButton {
    pub fn new(focused: bool, generating: bool) -> Self {
        Self {
            focused,
            generating,
        }
    }

    fn label(&self) -> &'static str {
        if self.generating {
            "Generating…"
        } else {
            "Generate"
        }
    }
}

impl Widget for GenerateButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            styles::focused_selected()
        } else {
            styles::accent_bold()
        };

        Paragraph::new(Line::styled(self.label(), style))
            .alignment(Alignment::Center)
            .block(styles::glass_block(self.focused))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_idle_label() {
        let mut term = TestTerminal::with_size(16, 3);
        term.render_widget(GenerateButton::new(false, false), term.area());
        assert!(term.buffer_contains("Generate"));
        assert!(!term.buffer_contains("Generating"));
    }

    #[test]
    fn test_busy_label() {
        let mut term = TestTerminal::with_size(16, 3);
        term.render_widget(GenerateButton::new(true, true), term.area());
        assert!(term.buffer_contains("Generating"));
    }
}
