//! Yes/no confirmation dialog

use portal_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

/// Widest the dialog grows
pub const MAX_WIDTH: u16 = 70;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

/// Rows `text` takes when wrapped at `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let rows = text
        .split('\n')
        .map(|line| {
            let cols = unicode_width::UnicodeWidthStr::width(line);
            cols.div_ceil(width).max(1)
        })
        .sum::<usize>();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let text_width = width.saturating_sub(4);
        // borders + message + spacer + buttons
        let height = wrapped_height(&self.state.message, text_width) + 4;
        let modal_area = modal_overlay::centered_rect(width, height, area);
        modal_overlay::prepare_modal(buf, area, modal_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title, styles::status_yellow())
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [message_area, _, buttons_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .horizontal_margin(1)
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .render(message_area, buf);

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::status_green().add_modifier(Modifier::BOLD)),
            Span::styled("] Yes  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled("] No", styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}
