//! Status bar widget
//!
//! Submit progress or the latest status note on the left, key hints for the
//! current input mode after it.

use portal_app::state::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const NORMAL_HINTS: &[(&str, &str)] = &[
    ("v", "Validate"),
    ("s", "Submit"),
    ("e", "Edit"),
    ("r", "Refresh"),
    ("p", "Poll"),
    ("c", "Copy"),
    ("Tab", "Section"),
    ("q", "Quit"),
];

const EDITING_HINTS: &[(&str, &str)] = &[("Esc", "Finish editing")];

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Submit progress wins over a status note
    fn activity(&self) -> Option<Span<'a>> {
        if let Some(label) = self.state.submit_phase.label() {
            let (icon, style) = styles::busy_indicator();
            return Some(Span::styled(format!("{} {}", icon, label), style));
        }
        self.state.status_note.as_ref().map(|note| {
            let style = if note.is_error {
                styles::status_red()
            } else {
                styles::status_green()
            };
            Span::styled(note.text.as_str(), style)
        })
    }

    fn hints(&self) -> Vec<Span<'static>> {
        let hints = match self.state.ui_mode {
            UiMode::Normal => NORMAL_HINTS,
            UiMode::Editing => EDITING_HINTS,
        };
        hints
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled("[", styles::text_muted()),
                    Span::styled(*key, styles::keybinding()),
                    Span::styled(format!("] {} ", label), styles::text_muted()),
                ]
            })
            .collect()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        if let Some(activity) = self.activity() {
            spans.push(activity);
            spans.push(Span::styled(" │ ", styles::text_muted()));
        }
        spans.extend(self.hints());
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
