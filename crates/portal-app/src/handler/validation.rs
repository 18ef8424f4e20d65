//! Validation flow

use portal_core::prelude::*;
use portal_core::{RequestFailure, RequestId, ValidationResult};

use crate::alert::Alert;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_validate(state: &mut AppState) -> UpdateResult {
    let content = state.content.text();
    let request_id = state.validation.begin();
    debug!("Validating {} bytes ({})", content.len(), request_id);
    UpdateResult::action(UpdateAction::CheckSubmission {
        request_id,
        content,
    })
}

pub fn handle_completed(
    state: &mut AppState,
    request_id: RequestId,
    result: std::result::Result<ValidationResult, RequestFailure>,
) -> UpdateResult {
    match result {
        Ok(result) => {
            if state.validation.settle(request_id, Some(&result)) {
                info!(
                    "Validation {}: {:?} ({} issues)",
                    request_id,
                    result.status,
                    result.issues.len()
                );
            } else {
                debug!("Dropping stale validation response {}", request_id);
            }
        }
        Err(failure) => {
            if state.validation.settle(request_id, None) {
                warn!("Validation {} failed: {}", request_id, failure);
                state.alerts.push(Alert::error(failure.to_string()));
            } else {
                debug!("Dropping stale validation failure {}", request_id);
            }
        }
    }
    UpdateResult::none()
}
