//! Content editor and content file reloads

use std::path::{Path, PathBuf};

use portal_core::prelude::*;

use crate::message::EditOp;
use crate::sections::SectionId;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

pub fn handle_start_editing(state: &mut AppState) -> UpdateResult {
    state.sections.focus(SectionId::Submission);
    if state.sections.is_collapsed(SectionId::Submission) {
        state.sections.toggle(SectionId::Submission);
    }
    state.ui_mode = UiMode::Editing;
    UpdateResult::none()
}

pub fn handle_stop_editing(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_edit(state: &mut AppState, op: EditOp) -> UpdateResult {
    let buffer = &mut state.content;
    match op {
        EditOp::Insert(c) => buffer.insert_char(c),
        EditOp::Newline => buffer.newline(),
        EditOp::Backspace => buffer.backspace(),
        EditOp::Delete => buffer.delete(),
        EditOp::Left => buffer.move_left(),
        EditOp::Right => buffer.move_right(),
        EditOp::Up => buffer.move_up(),
        EditOp::Down => buffer.move_down(),
        EditOp::Home => buffer.move_home(),
        EditOp::End => buffer.move_end(),
    }
    UpdateResult::none()
}

pub fn handle_reload(state: &mut AppState) -> UpdateResult {
    match state.content.source.clone() {
        Some(path) => UpdateResult::action(UpdateAction::LoadContentFile { path }),
        None => {
            state.note("No content file given (use --file)", false);
            UpdateResult::none()
        }
    }
}

pub fn handle_loaded(state: &mut AppState, path: PathBuf, text: String) -> UpdateResult {
    info!("Loaded content from {}", path.display());
    state.content.set_text(&text);
    state.note(format!("Loaded {}", path.display()), false);
    state.content.source = Some(path);
    UpdateResult::none()
}

pub fn handle_load_failed(state: &mut AppState, path: &Path, error: &str) -> UpdateResult {
    warn!("Failed to load {}: {}", path.display(), error);
    state.note(format!("Failed to load {}: {}", path.display(), error), true);
    UpdateResult::none()
}

/// Reload on disk changes unless that would discard unsaved edits
pub fn handle_file_changed(state: &mut AppState) -> UpdateResult {
    if state.content.modified {
        state.note("Content file changed on disk; press [l] to reload", false);
        return UpdateResult::none();
    }
    handle_reload(state)
}

pub fn handle_watcher_error(state: &mut AppState, message: &str) -> UpdateResult {
    warn!("Content watcher error: {}", message);
    state.note(format!("Watcher error: {}", message), true);
    UpdateResult::none()
}
