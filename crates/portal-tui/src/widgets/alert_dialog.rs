//! Modal alert (errors and submit results)

use portal_app::alert::{Alert, AlertKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::confirm_dialog::{wrapped_height, MAX_WIDTH};
use super::modal_overlay;
use crate::theme::styles;

pub struct AlertDialog<'a> {
    alert: &'a Alert,
    /// Alerts queued behind this one
    queued: usize,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert, queued: 0 }
    }

    pub fn queued(mut self, queued: usize) -> Self {
        self.queued = queued;
        self
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = wrapped_height(&self.alert.body, width.saturating_sub(4)) + 4;
        let modal_area = modal_overlay::centered_rect(width, height, area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let accent = match self.alert.kind {
            AlertKind::Error => styles::status_red(),
            AlertKind::Success => styles::status_green(),
        };
        let title = format!(" {} ", self.alert.title);
        let block = styles::modal_block(&title, accent).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [body_area, _, footer_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .horizontal_margin(1)
        .areas(inner);

        Paragraph::new(self.alert.body.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .render(body_area, buf);

        let mut footer = vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] OK", styles::text_muted()),
        ];
        if self.queued > 0 {
            footer.push(Span::styled(
                format!("  (+{} more)", self.queued),
                styles::text_muted(),
            ));
        }
        Paragraph::new(Line::from(footer))
            .alignment(Alignment::Center)
            .render(footer_area, buf);
    }
}
