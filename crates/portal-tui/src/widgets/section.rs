//! Collapsible section header line

use portal_app::sections::{SectionId, SectionSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// One-line header: arrow, title and an optional status badge
pub struct SectionHeader<'a> {
    id: SectionId,
    sections: &'a SectionSet,
    badge: Option<Span<'a>>,
}

impl<'a> SectionHeader<'a> {
    pub fn new(id: SectionId, sections: &'a SectionSet) -> Self {
        Self {
            id,
            sections,
            badge: None,
        }
    }

    /// Short note after the title (e.g. "refreshing")
    pub fn badge(mut self, badge: Span<'a>) -> Self {
        self.badge = Some(badge);
        self
    }
}

impl Widget for SectionHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let focused = self.sections.focused() == self.id;
        let title_style = if focused {
            styles::focused_selected()
        } else {
            styles::text_bright_bold()
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} {} ", self.sections.arrow(self.id), self.id.title()),
                title_style,
            ),
        ];
        if let Some(badge) = self.badge {
            spans.push(Span::raw(" "));
            spans.push(badge);
        }

        let line_area = Rect { height: 1, ..area };
        Paragraph::new(Line::from(spans)).render(line_area, buf);
    }
}
