//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the form
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title + key hints
    pub header: Rect,

    /// Multi-line requirements input
    pub requirements: Rect,

    /// UI / API selector
    pub test_type: Rect,

    pub generate_button: Rect,

    /// Generated code
    pub result: Rect,

    /// Single-row outcome line
    pub status: Rect,
}

/// Split the screen into header, form, result and status rows.
///
/// The requirements box takes about a third of the space left after the
/// fixed rows; the result pane takes the rest.
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3),      // Header
        Constraint::Percentage(35), // Requirements
        Constraint::Length(3),      // Controls
        Constraint::Min(3),         // Result
        Constraint::Length(1),      // Status
    ])
    .split(area);

    let controls = Layout::horizontal([Constraint::Min(20), Constraint::Length(16)]).split(rows[2]);

    ScreenAreas {
        header: rows[0],
        requirements: rows[1],
        test_type: controls[0],
        generate_button: controls[1],
        result: rows[3],
        status: rows[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let areas = create(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.test_type.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 23);
        assert_eq!(areas.generate_button.width, 16);
        assert_eq!(
            areas.test_type.width + areas.generate_button.width,
            80,
            "controls row spans the full width"
        );
        assert!(areas.result.height >= 3);
    }

    #[test]
    fn test_layout_rows_do_not_overlap() {
        let areas = create(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.requirements.y, areas.header.bottom());
        assert_eq!(areas.test_type.y, areas.requirements.bottom());
        assert_eq!(areas.result.y, areas.test_type.bottom());
        assert_eq!(areas.status.y, areas.result.bottom());
    }
}
