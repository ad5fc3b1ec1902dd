//! Multi-line requirements input

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const PLACEHOLDER: &str = "Describe the behaviour the tests should cover...";

/// Requirements text box. Always shows the end of the text, where typing happens.
pub struct RequirementsInput<'a> {
    text: &'a str,
    focused: bool,
}

impl<'a> RequirementsInput<'a> {
    pub fn new(text: &'a str, focused: bool) -> Self {
        Self { text, focused }
    }

    fn line_count(&self) -> u16 {
        // "a\n" has two lines for editing purposes; str::lines would say one
        let count = self.text.split('\n').count();
        u16::try_from(count).unwrap_or(u16::MAX)
    }

    /// Vertical offset that keeps the last line visible
    fn scroll_offset(&self, inner_height: u16) -> u16 {
        self.line_count().saturating_sub(inner_height)
    }

    /// Where the terminal cursor belongs, or None when unfocused.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = styles::glass_block(true).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let last_line = self.text.rsplit('\n').next().unwrap_or("");
        let col = u16::try_from(last_line.width()).unwrap_or(u16::MAX);
        let row = self.line_count().saturating_sub(1) - self.scroll_offset(inner.height);

        Some(Position::new(
            inner.x + col.min(inner.width - 1),
            inner.y + row.min(inner.height - 1),
        ))
    }
}

impl Widget for RequirementsInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Requirements ");
        let inner = block.inner(area);

        let paragraph = if self.text.is_empty() {
            Paragraph::new(Line::styled(PLACEHOLDER, styles::text_muted()))
        } else {
            let lines: Vec<Line> = self.text.split('\n').map(Line::raw).collect();
            Paragraph::new(Text::from(lines))
                .style(styles::text_primary())
                .scroll((self.scroll_offset(inner.height), 0))
        };

        paragraph.block(block).render(area, buf);
    }
}
