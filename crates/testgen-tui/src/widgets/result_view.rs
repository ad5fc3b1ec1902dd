//! Generated code pane
//!
//! Shows the code exactly as returned, one source line per row, with no
//! highlighting. Long lines are clipped unless `ui.wrap_result` is set.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct ResultView<'a> {
    code: &'a str,
    scroll: u16,
    wrap: bool,
    focused: bool,
}

impl<'a> ResultView<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            scroll: 0,
            wrap: false,
            focused: false,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// "first-last/total" for the visible window
    fn position(&self, visible: u16) -> Option<String> {
        let total = self.code.lines().count();
        if total == 0 {
            return None;
        }
        let first = usize::from(self.scroll) + 1;
        let last = (usize::from(self.scroll) + usize::from(visible)).min(total);
        Some(format!(" {}-{}/{} ", first.min(total), last, total))
    }
}

impl Widget for ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused).title(" Generated tests ");
        let inner = block.inner(area);

        if let Some(position) = self.position(inner.height) {
            block = block
                .title_bottom(Line::styled(position, styles::text_muted()).right_aligned());
        }

        if self.code.is_empty() {
            Paragraph::new(Line::styled(
                "No generated tests yet. Press Ctrl+G to generate.",
                styles::text_muted(),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let mut paragraph = Paragraph::new(Text::raw(self.code))
            .style(styles::code())
            .block(block)
            .scroll((self.scroll, 0));
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph.render(area, buf);
    }
}
