//! Header bar widget
//!
//! App title, target server and the polling indicator.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing the server URL and polling state
pub struct MainHeader<'a> {
    server_url: &'a str,
    polling_active: bool,
    poll_interval: Duration,
}

impl<'a> MainHeader<'a> {
    pub fn new(server_url: &'a str) -> Self {
        Self {
            server_url,
            polling_active: false,
            poll_interval: Duration::ZERO,
        }
    }

    pub fn polling(mut self, active: bool, interval: Duration) -> Self {
        self.polling_active = active;
        self.poll_interval = interval;
        self
    }

    fn polling_spans(&self) -> Vec<Span<'static>> {
        let (icon, label, style) = styles::polling_indicator(self.polling_active);
        let mut spans = vec![Span::styled(format!("{} {}", icon, label), style)];
        if self.polling_active {
            spans.push(Span::styled(
                format!(" every {}ms", self.poll_interval.as_millis()),
                styles::text_muted(),
            ));
        }
        spans.push(Span::raw(" "));
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("Submission Portal", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(self.server_url, styles::text_secondary()),
        ]);
        let right = Line::from(self.polling_spans());

        let right_width = right.width() as u16;
        let left_width = left.width() as u16;

        Paragraph::new(left).render(inner, buf);

        // Right-aligned indicator, dropped when it would overlap the title
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                width: right_width,
                height: 1,
                ..inner
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}
