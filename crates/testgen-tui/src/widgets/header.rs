//! Header bar: app title, target endpoint and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Main header showing the app title, where requests go, and keybindings
pub struct MainHeader<'a> {
    endpoint: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(endpoint: Option<&'a str>) -> Self {
        Self { endpoint }
    }

    fn shortcuts() -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (key, label) in [
            ("Tab", "Next"),
            ("^G", "Generate"),
            ("Esc", "Cancel"),
            ("^C", "Quit"),
        ] {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![Span::raw(" "), Span::styled("testgen", styles::accent_bold())];
        if let Some(endpoint) = self.endpoint {
            left.push(Span::styled(" / ", styles::text_muted()));
            left.push(Span::styled(endpoint, styles::text_secondary()));
        }
        let left_line = Line::from(left);
        let left_width = left_line.width() as u16;

        let shortcuts_line = Line::from(Self::shortcuts());
        let shortcuts_width = shortcuts_line.width() as u16;

        let row = Rect { height: 1, ..inner };
        left_line.render(row, buf);

        // Hints go right-aligned when there is room for both
        if left_width + shortcuts_width + 2 <= inner.width {
            let hints_area = Rect {
                x: inner.x + inner.width - shortcuts_width,
                width: shortcuts_width,
                ..row
            };
            shortcuts_line.render(hints_area, buf);
        }
    }
}
