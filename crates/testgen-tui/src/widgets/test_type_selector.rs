//! UI / API selector

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use testgen_core::TestType;

use crate::theme::styles;

pub struct TestTypeSelector {
    selected: TestType,
    focused: bool,
}

impl TestTypeSelector {
    pub fn new(selected: TestType, focused: bool) -> Self {
        Self { selected, focused }
    }

    fn option_span(&self, option: TestType) -> Span<'static> {
        let label = format!(" {} ", option);
        if option != self.selected {
            return Span::styled(label, styles::text_muted());
        }
        if self.focused {
            Span::styled(label, styles::focused_selected())
        } else {
            Span::styled(label, styles::accent_bold())
        }
    }
}

impl Widget for TestTypeSelector {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Test type ");

        let mut spans = vec![Span::raw(" ")];
        for option in TestType::ALL {
            spans.push(self.option_span(option));
            spans.push(Span::raw(" "));
        }
        if self.focused {
            spans.push(Span::styled(" ←/→ to switch", styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
