//! Submission content editor

use portal_app::content::ContentBuffer;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Shown in place of an empty buffer
pub const PLACEHOLDER: &str = "Press [e] to paste or type your submission JSON";

pub struct ContentEditor<'a> {
    buffer: &'a ContentBuffer,
    editing: bool,
    focused: bool,
}

impl<'a> ContentEditor<'a> {
    pub fn new(buffer: &'a ContentBuffer) -> Self {
        Self {
            buffer,
            editing: false,
            focused: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" Content ", styles::text_bright_bold())];
        if let Some(name) = self
            .buffer
            .source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
        {
            spans.push(Span::styled(format!("{} ", name), styles::text_secondary()));
        }
        if self.buffer.modified {
            spans.push(Span::styled("[modified] ", styles::status_yellow()));
        }
        if self.editing {
            spans.push(Span::styled("EDITING · Esc to finish ", styles::accent()));
        }
        Line::from(spans)
    }
}

/// Scroll offsets that keep the cursor inside a `width` x `height` viewport
fn scroll_for_cursor(buffer: &ContentBuffer, width: u16, height: u16) -> (u16, u16) {
    let (row, col) = buffer.cursor();
    let vertical = row.saturating_sub(height.saturating_sub(1) as usize);
    let line = &buffer.lines()[row];
    let cursor_x = prefix_width(line, col);
    let horizontal = cursor_x.saturating_sub(width.saturating_sub(1) as usize);
    (vertical as u16, horizontal as u16)
}

/// Display width of the first `chars` characters of `line`
fn prefix_width(line: &str, chars: usize) -> usize {
    let end = line
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    line[..end].width()
}

impl Widget for ContentEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused || self.editing).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.buffer.is_blank() && !self.editing {
            Paragraph::new(Span::styled(PLACEHOLDER, styles::text_muted())).render(inner, buf);
            return;
        }

        let (v_scroll, h_scroll) = scroll_for_cursor(self.buffer, inner.width, inner.height);
        let lines: Vec<Line> = self
            .buffer
            .lines()
            .iter()
            .map(|l| Line::styled(l.as_str(), styles::text_primary()))
            .collect();
        Paragraph::new(lines)
            .scroll((v_scroll, h_scroll))
            .render(inner, buf);

        if self.editing {
            let (row, col) = self.buffer.cursor();
            let x = prefix_width(&self.buffer.lines()[row], col) as u16 - h_scroll;
            let y = row as u16 - v_scroll;
            if let Some(cell) = buf.cell_mut((inner.x + x, inner.y + y)) {
                cell.set_style(styles::cursor());
            }
        }
    }
}
