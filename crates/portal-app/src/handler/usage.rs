//! Copy buttons of the API usage section

use portal_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_copy_selected(state: &mut AppState) -> UpdateResult {
    match state.usage.selected_block() {
        Some(block) => UpdateResult::message(Message::CopyBlock { block: block.id }),
        None => UpdateResult::none(),
    }
}

pub fn handle_copy(state: &mut AppState, block: &'static str) -> UpdateResult {
    let Some(text) = state.usage.block(block).map(|b| b.copy_text().to_string()) else {
        warn!("Copy requested for unknown block {}", block);
        return UpdateResult::none();
    };
    let generation = state.usage.next_generation();
    UpdateResult::action(UpdateAction::CopyToClipboard {
        block,
        text,
        generation,
    })
}

pub fn handle_copy_succeeded(
    state: &mut AppState,
    block: &'static str,
    generation: u64,
) -> UpdateResult {
    if !state.usage.mark_copied(block, generation) {
        trace!("Ignoring late copy of {} (gen {})", block, generation);
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::ScheduleCopyReset {
        block,
        generation,
        after: state.settings.ui.copied_feedback(),
    })
}

pub fn handle_copy_failed(state: &mut AppState, block: &'static str, error: &str) -> UpdateResult {
    error!("Failed to copy {}: {}", block, error);
    state.note(format!("Failed to copy: {}", error), true);
    UpdateResult::none()
}

pub fn handle_copy_expired(state: &mut AppState, block: &'static str, generation: u64) -> UpdateResult {
    if !state.usage.expire_copied(block, generation) {
        trace!("Ignoring stale copy reset for {} (gen {})", block, generation);
    }
    UpdateResult::none()
}
