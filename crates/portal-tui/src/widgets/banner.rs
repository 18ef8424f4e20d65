//! Success banner shown above the sections after a submission

use portal_app::submit::SuccessBanner;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::styles;

pub struct BannerWidget<'a> {
    banner: &'a SuccessBanner,
}

impl<'a> BannerWidget<'a> {
    pub fn new(banner: &'a SuccessBanner) -> Self {
        Self { banner }
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(" ✓ Submitted ", styles::status_green()))
            .title_bottom(Line::from(vec![
                Span::styled(" [x]", styles::keybinding()),
                Span::styled(" hide ", styles::text_muted()),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::status_green());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(self.banner.team_line(), styles::text_bright_bold())),
            Line::from(Span::styled(
                self.banner.signature_line(),
                styles::text_primary(),
            )),
            Line::from(vec![
                Span::styled("Verification: ", styles::text_muted()),
                Span::styled(self.banner.verification.as_str(), styles::text_secondary()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
