//! Screen layout definitions for the TUI
//!
//! The page is a header, an optional success banner, the stack of
//! collapsible sections and a one-line status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Banner: borders + team + signature + verification rows
pub const BANNER_HEIGHT: u16 = 5;

pub const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,

    /// Present only while the success banner is shown
    pub banner: Option<Rect>,

    /// Section stack
    pub body: Rect,

    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_banner: bool) -> ScreenAreas {
    let banner_height = if show_banner { BANNER_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(banner_height),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        banner: show_banner.then_some(chunks[1]),
        body: chunks[2],
        status: chunks[3],
    }
}

/// Vertical space a section asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionHeight {
    /// Header line only
    Collapsed,
    /// Header line plus a body of exactly this many rows
    Exact(u16),
    /// Header line plus at least this many rows; shares leftover space
    Fill(u16),
}

impl SectionHeight {
    fn constraint(self) -> Constraint {
        match self {
            SectionHeight::Collapsed => Constraint::Length(1),
            SectionHeight::Exact(rows) => Constraint::Length(rows.saturating_add(1)),
            SectionHeight::Fill(min) => Constraint::Min(min.saturating_add(1)),
        }
    }
}

/// Split the section stack area, one rect per section in order
pub fn split_sections(body: Rect, heights: &[SectionHeight]) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = heights.iter().map(|h| h.constraint()).collect();

    // Without a fill section the stack hugs the top; pad below it
    if !heights.iter().any(|h| matches!(h, SectionHeight::Fill(_))) {
        constraints.push(Constraint::Min(0));
    }

    let chunks = Layout::vertical(constraints).split(body);
    chunks.iter().take(heights.len()).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_without_banner() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert!(layout.banner.is_none());
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_create_with_banner() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        let banner = layout.banner.unwrap();
        assert_eq!(banner.y, 3);
        assert_eq!(banner.height, BANNER_HEIGHT);
        assert_eq!(layout.body.y, 8);
        assert_eq!(layout.body.height, 15);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for show_banner in [false, true] {
            let layout = create(area, show_banner);
            let banner = layout.banner.map(|b| b.height).unwrap_or(0);
            assert_eq!(
                layout.header.height + banner + layout.body.height + layout.status.height,
                area.height
            );
        }
    }

    #[test]
    fn test_collapsed_sections_take_one_row() {
        let body = Rect::new(0, 3, 80, 20);
        let rects = split_sections(
            body,
            &[
                SectionHeight::Collapsed,
                SectionHeight::Collapsed,
                SectionHeight::Collapsed,
            ],
        );

        assert_eq!(rects.len(), 3);
        assert!(rects.iter().all(|r| r.height == 1));
        assert_eq!(rects[0].y, 3);
        assert_eq!(rects[1].y, 4);
        assert_eq!(rects[2].y, 5);
    }

    #[test]
    fn test_fill_section_takes_leftover() {
        let body = Rect::new(0, 0, 80, 20);
        let rects = split_sections(
            body,
            &[
                SectionHeight::Exact(6),
                SectionHeight::Collapsed,
                SectionHeight::Fill(3),
            ],
        );

        assert_eq!(rects[0].height, 7);
        assert_eq!(rects[1].height, 1);
        assert_eq!(rects[2].height, 12);
    }
}
