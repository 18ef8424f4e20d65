//! Submissions table refresh and polling toggle

use portal_core::prelude::*;
use portal_core::{RequestFailure, RequestId, SubmissionRecord};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    let request_id = state.submissions.begin_refresh();
    debug!("Refreshing submissions ({})", request_id);
    UpdateResult::action(UpdateAction::FetchSubmissions { request_id })
}

pub fn handle_loaded(
    state: &mut AppState,
    request_id: RequestId,
    result: std::result::Result<Vec<SubmissionRecord>, RequestFailure>,
) -> UpdateResult {
    let failure = result.as_ref().err().cloned();
    let count = result.as_ref().map(Vec::len).unwrap_or_default();

    if !state.submissions.apply(request_id, result) {
        debug!("Dropping stale submissions response {}", request_id);
        return UpdateResult::none();
    }

    match failure {
        Some(failure) => warn!("Failed to load submissions: {}", failure),
        None => debug!("Loaded {} submissions ({})", count, request_id),
    }
    UpdateResult::none()
}

pub fn handle_toggle_polling(state: &mut AppState) -> UpdateResult {
    if state.polling_active {
        UpdateResult::action(UpdateAction::StopPolling)
    } else {
        UpdateResult::action(UpdateAction::StartPolling)
    }
}
