//! Submissions table

use portal_app::submissions::SubmissionsTableState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Widget},
};

use crate::theme::styles;

pub const COLUMN_TITLES: [&str; 3] = ["Time", "Name", "Signature"];

pub struct SubmissionsTable<'a> {
    state: &'a SubmissionsTableState,
    focused: bool,
}

impl<'a> SubmissionsTable<'a> {
    pub fn new(state: &'a SubmissionsTableState, focused: bool) -> Self {
        Self { state, focused }
    }

    fn error_line(&self) -> Option<Line<'static>> {
        self.state.last_error.as_ref().map(|failure| {
            Line::from(vec![
                Span::styled("⚠ Refresh failed: ", styles::status_red()),
                Span::styled(failure.to_string(), styles::status_red()),
            ])
        })
    }
}

impl Widget for SubmissionsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let mut inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Persistent error line until the next successful refresh
        if let Some(line) = self.error_line() {
            Paragraph::new(line).render(Rect { height: 1, ..inner }, buf);
            inner.y += 1;
            inner.height -= 1;
            if inner.height == 0 {
                return;
            }
        }

        let rows = self.state.rows();
        if rows.is_empty() {
            Paragraph::new(Span::styled("No submissions yet", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let header = Row::new(COLUMN_TITLES).style(styles::accent_bold());
        let body = rows.iter().skip(self.state.scroll).map(|record| {
            Row::new(record.cells()).style(styles::text_primary())
        });

        Table::new(
            body,
            [
                Constraint::Length(19),
                Constraint::Fill(1),
                Constraint::Fill(2),
            ],
        )
        .header(header)
        .column_spacing(2)
        .render(inner, buf);
    }
}
