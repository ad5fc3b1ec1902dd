//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use testgen_app::state::{AppState, Focus};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it. `endpoint` is shown in
/// the header when known.
pub fn view(frame: &mut Frame, state: &AppState, endpoint: Option<&str>) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(endpoint), areas.header);

    let requirements = widgets::RequirementsInput::new(
        state.form.requirements(),
        state.focus == Focus::Requirements,
    );
    if let Some(position) = requirements.cursor_position(areas.requirements) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(requirements, areas.requirements);

    frame.render_widget(
        widgets::TestTypeSelector::new(state.form.test_type(), state.focus == Focus::TestType),
        areas.test_type,
    );

    frame.render_widget(
        widgets::GenerateButton::new(
            state.focus == Focus::GenerateButton,
            state.is_generating(),
        ),
        areas.generate_button,
    );

    frame.render_widget(
        widgets::ResultView::new(state.form.generated_code())
            .scroll(state.result_scroll)
            .wrap(state.settings.ui.wrap_result)
            .focused(state.focus == Focus::Result),
        areas.result,
    );

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
