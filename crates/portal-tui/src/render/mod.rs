//! Main render/view function (View in TEA pattern)


use portal_app::sections::SectionId;
use portal_app::state::{AppState, UiMode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::{self, SectionHeight};
use crate::theme::{palette, styles};
use crate::widgets;

/// Smallest editor that still shows a few lines
const MIN_EDITOR_HEIGHT: u16 = 5;

/// Smallest table: borders, header and two rows
const MIN_TABLE_HEIGHT: u16 = 5;

/// Render the complete UI (View function in TEA).
///
/// Pure: reads the state and draws it, nothing else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.banner.is_some());

    let header = widgets::MainHeader::new(&state.server_url)
        .polling(state.polling_active, state.settings.polling.interval());
    frame.render_widget(header, areas.header);

    if let (Some(banner), Some(banner_area)) = (&state.banner, areas.banner) {
        frame.render_widget(widgets::BannerWidget::new(banner), banner_area);
    }

    render_sections(frame, areas.body, state);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Alerts take input before the confirm dialog, so they draw on top
    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
    if let Some(alert) = state.alerts.current() {
        let queued = state.alerts.len().saturating_sub(1);
        frame.render_widget(widgets::AlertDialog::new(alert).queued(queued), area);
    }
}

fn section_height(state: &AppState, id: SectionId) -> SectionHeight {
    if state.sections.is_collapsed(id) {
        return SectionHeight::Collapsed;
    }
    match id {
        SectionId::Usage => SectionHeight::Exact(widgets::UsagePanel::content_height(&state.usage)),
        SectionId::Submission => SectionHeight::Fill(
            MIN_EDITOR_HEIGHT + widgets::ValidationPanel::content_height(&state.validation),
        ),
        SectionId::Submissions => SectionHeight::Fill(MIN_TABLE_HEIGHT),
    }
}

fn render_sections(frame: &mut Frame, body: Rect, state: &AppState) {
    let visible = state.sections.visible();
    let heights: Vec<SectionHeight> = visible.iter().map(|&id| section_height(state, id)).collect();
    let rects = layout::split_sections(body, &heights);

    for (&id, rect) in visible.iter().zip(rects) {
        if rect.height == 0 {
            continue;
        }
        let header_area = Rect { height: 1, ..rect };
        frame.render_widget(section_header(state, id), header_area);

        if state.sections.is_collapsed(id) || rect.height < 2 {
            continue;
        }
        let content_area = Rect {
            y: rect.y + 1,
            height: rect.height - 1,
            ..rect
        };
        render_section_body(frame, content_area, state, id);
    }
}

fn section_header(state: &AppState, id: SectionId) -> widgets::SectionHeader<'_> {
    let header = widgets::SectionHeader::new(id, &state.sections);
    let (icon, style) = styles::busy_indicator();
    match id {
        SectionId::Submissions if state.submissions.is_refreshing() => {
            header.badge(Span::styled(format!("{} refreshing", icon), style))
        }
        SectionId::Submission if state.validation.is_checking() => {
            header.badge(Span::styled(format!("{} validating", icon), style))
        }
        _ => header,
    }
}

fn render_section_body(frame: &mut Frame, area: Rect, state: &AppState, id: SectionId) {
    let focused = state.sections.focused() == id;
    match id {
        SectionId::Usage => {
            frame.render_widget(widgets::UsagePanel::new(&state.usage, focused), area);
        }
        SectionId::Submission => {
            let validation_height = widgets::ValidationPanel::content_height(&state.validation);
            let [editor_area, validation_area] = Layout::vertical([
                Constraint::Min(3),
                Constraint::Length(validation_height),
            ])
            .areas(area);

            let editor = widgets::ContentEditor::new(&state.content)
                .focused(focused)
                .editing(state.ui_mode == UiMode::Editing);
            frame.render_widget(editor, editor_area);

            let validation_area = Rect {
                x: validation_area.x + 1,
                width: validation_area.width.saturating_sub(2),
                ..validation_area
            };
            frame.render_widget(
                widgets::ValidationPanel::new(&state.validation),
                validation_area,
            );
        }
        SectionId::Submissions => {
            frame.render_widget(
                widgets::SubmissionsTable::new(&state.submissions, focused),
                area,
            );
        }
    }
}
