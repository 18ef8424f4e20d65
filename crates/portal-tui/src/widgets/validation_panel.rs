//! Validation result panel
//!
//! Issues come from the server and are drawn as plain spans; no markup in
//! them is ever interpreted.

use portal_app::validation::{
    ValidationOutcome, ValidationPanelState, CLEAN_MESSAGE, ISSUES_FOOTER, ISSUES_HEADING,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct ValidationPanel<'a> {
    state: &'a ValidationPanelState,
}

impl<'a> ValidationPanel<'a> {
    pub fn new(state: &'a ValidationPanelState) -> Self {
        Self { state }
    }

    /// Rows the panel wants, before wrapping
    pub fn content_height(state: &ValidationPanelState) -> u16 {
        let body = match &state.outcome {
            None | Some(ValidationOutcome::Clean) => 1,
            // heading + issues + blank + footer
            Some(ValidationOutcome::Issues(issues)) => issues.len() + 3,
        };
        let checking = usize::from(state.is_checking());
        u16::try_from(body + checking).unwrap_or(u16::MAX)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        if self.state.is_checking() {
            let (icon, style) = styles::busy_indicator();
            lines.push(Line::from(Span::styled(format!("{} Checking…", icon), style)));
        }

        match &self.state.outcome {
            None => lines.push(Line::from(Span::styled(
                "Press [v] to validate the content",
                styles::text_muted(),
            ))),
            Some(ValidationOutcome::Clean) => {
                lines.push(Line::from(Span::styled(CLEAN_MESSAGE, styles::status_green())));
            }
            Some(ValidationOutcome::Issues(issues)) => {
                let red = styles::status_red();
                lines.push(Line::from(Span::styled(
                    ISSUES_HEADING,
                    red.add_modifier(Modifier::BOLD),
                )));
                lines.extend(
                    issues
                        .iter()
                        .map(|issue| Line::from(Span::styled(issue.as_str(), red))),
                );
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(ISSUES_FOOTER, red)));
            }
        }
        lines
    }
}

impl Widget for ValidationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
