//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use portal_core::AppPhase;

use crate::message::Message;
use crate::state::AppState;

use super::{content, keys::handle_key, submissions, submit, usage, validation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_note(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Sections
        // ─────────────────────────────────────────────────────────
        Message::FocusNextSection => {
            state.sections.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevSection => {
            state.sections.focus_prev();
            UpdateResult::none()
        }
        Message::ToggleFocusedSection => {
            let focused = state.sections.focused();
            state.sections.toggle(focused);
            UpdateResult::none()
        }
        Message::ScrollPageDown => {
            state.sections.scroll_down();
            UpdateResult::none()
        }
        Message::ScrollPageUp => {
            state.sections.scroll_up();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Usage / copy
        // ─────────────────────────────────────────────────────────
        Message::SelectNextBlock => {
            state.usage.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevBlock => {
            state.usage.select_prev();
            UpdateResult::none()
        }
        Message::CopySelectedBlock => usage::handle_copy_selected(state),
        Message::CopyBlock { block } => usage::handle_copy(state, block),
        Message::CopySucceeded { block, generation } => {
            usage::handle_copy_succeeded(state, block, generation)
        }
        Message::CopyFailed { block, error } => usage::handle_copy_failed(state, block, &error),
        Message::CopyFeedbackExpired { block, generation } => {
            usage::handle_copy_expired(state, block, generation)
        }

        // ─────────────────────────────────────────────────────────
        // Content
        // ─────────────────────────────────────────────────────────
        Message::StartEditing => content::handle_start_editing(state),
        Message::StopEditing => content::handle_stop_editing(state),
        Message::EditContent(op) => content::handle_edit(state, op),
        Message::ReloadContent => content::handle_reload(state),
        Message::ContentLoaded { path, text } => content::handle_loaded(state, path, text),
        Message::ContentLoadFailed { path, error } => {
            content::handle_load_failed(state, &path, &error)
        }
        Message::ContentFileChanged => content::handle_file_changed(state),
        Message::WatcherError { message } => content::handle_watcher_error(state, &message),

        // ─────────────────────────────────────────────────────────
        // Submissions
        // ─────────────────────────────────────────────────────────
        Message::RefreshSubmissions => submissions::handle_refresh(state),
        Message::SubmissionsLoaded { request_id, result } => {
            submissions::handle_loaded(state, request_id, result)
        }
        Message::ScrollTableUp => {
            state.submissions.scroll_up();
            UpdateResult::none()
        }
        Message::ScrollTableDown => {
            state.submissions.scroll_down();
            UpdateResult::none()
        }
        Message::TogglePolling => submissions::handle_toggle_polling(state),

        // ─────────────────────────────────────────────────────────
        // Validation / submit
        // ─────────────────────────────────────────────────────────
        Message::Validate => validation::handle_validate(state),
        Message::ValidationCompleted { request_id, result } => {
            validation::handle_completed(state, request_id, result)
        }
        Message::Submit => submit::handle_submit(state),
        Message::SubmitValidationCompleted { result } => {
            submit::handle_validation_completed(state, result)
        }
        Message::ConfirmSubmit => submit::handle_confirm(state),
        Message::CancelSubmit => submit::handle_cancel(state),
        Message::SubmitCompleted { result } => submit::handle_completed(state, result),
        Message::HideBanner => {
            state.banner = None;
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.alerts.dismiss();
            UpdateResult::none()
        }
    }
}
