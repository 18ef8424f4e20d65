//! Terminal-independent key events.
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary, so the
//! state machine in this crate (and its tests) never sees a terminal type.

/// A single key press as seen by the update loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols, space)
    Char(char),
    /// Character pressed together with Ctrl
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
}

impl InputKey {
    /// True for Ctrl+C, which quits from every mode
    pub fn is_interrupt(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}
