//! API usage section: snippet list with copy buttons and the selected snippet

use portal_app::usage::UsageState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct UsagePanel<'a> {
    state: &'a UsageState,
    focused: bool,
}

impl<'a> UsagePanel<'a> {
    pub fn new(state: &'a UsageState, focused: bool) -> Self {
        Self { state, focused }
    }

    /// Rows needed to show every title and the selected snippet
    pub fn content_height(state: &UsageState) -> u16 {
        let code_lines = state
            .selected_block()
            .map(|b| b.copy_text().lines().count())
            .unwrap_or(0);
        // borders + titles + separator + code
        u16::try_from(2 + state.blocks.len() + 1 + code_lines).unwrap_or(u16::MAX)
    }

    fn title_line(&self, index: usize) -> Line<'a> {
        let block = &self.state.blocks[index];
        let selected = index == self.state.selected;

        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected && self.focused {
            styles::focused_selected()
        } else if selected {
            styles::text_bright_bold()
        } else {
            styles::text_secondary()
        };

        let button = if self.state.is_copied(block.id) {
            Span::styled("✓ Copied", styles::status_green())
        } else if selected {
            Span::styled("[c] Copy", styles::keybinding())
        } else {
            Span::styled("Copy", styles::text_muted())
        };

        Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(block.title, title_style),
            Span::raw("  "),
            button,
        ])
    }
}

impl Widget for UsagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = (0..self.state.blocks.len())
            .map(|i| self.title_line(i))
            .collect();

        if let Some(selected) = self.state.selected_block() {
            lines.push(Line::styled(
                "─".repeat(inner.width as usize),
                styles::border_inactive(),
            ));
            let code_style = Style::default().fg(palette::CODE_FG);
            lines.extend(
                selected
                    .copy_text()
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), code_style))),
            );
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
