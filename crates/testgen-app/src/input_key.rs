//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! that the app crate never depends on a terminal library.

/// A single key press as seen by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (no Ctrl)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+g, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_plain_chars_differ() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
        assert_eq!(InputKey::F(5), InputKey::F(5));
    }
}
