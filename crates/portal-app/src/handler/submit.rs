//! Submit flow: validate, confirm on issues, submit, show the receipt

use portal_core::prelude::*;
use portal_core::{RequestFailure, SubmitResult, ValidationResult};

use crate::alert::Alert;
use crate::confirm_dialog::ConfirmDialogState;
use crate::state::AppState;
use crate::submit::{submit_alert_text, SubmitPhase, SuccessBanner};

use super::{UpdateAction, UpdateResult};

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.submit_phase.is_idle() {
        info!("Submit ignored: a submission is already in progress");
        state.note("A submission is already in progress", false);
        return UpdateResult::none();
    }

    let content = state.content.text();
    state.submit_phase = SubmitPhase::Validating {
        content: content.clone(),
    };
    UpdateResult::action(UpdateAction::ValidateBeforeSubmit { content })
}

pub fn handle_validation_completed(
    state: &mut AppState,
    result: std::result::Result<ValidationResult, RequestFailure>,
) -> UpdateResult {
    let content = match std::mem::take(&mut state.submit_phase) {
        SubmitPhase::Validating { content } => content,
        other => {
            warn!("Unexpected pre-submit validation result in phase {:?}", other);
            state.submit_phase = other;
            return UpdateResult::none();
        }
    };

    let validation = match result {
        Ok(validation) => validation,
        Err(failure) => {
            warn!("Pre-submit validation failed: {}", failure);
            state.alerts.push(Alert::error(failure.to_string()));
            return UpdateResult::none();
        }
    };

    if validation.has_issues() && state.settings.submit.confirm_on_issues {
        info!(
            "Validation found {} issues, asking for confirmation",
            validation.issues.len()
        );
        state.confirm_dialog = Some(ConfirmDialogState::submit_despite_issues(
            &validation.issues,
        ));
        state.submit_phase = SubmitPhase::AwaitingConfirmation { content };
        return UpdateResult::none();
    }

    state.submit_phase = SubmitPhase::Submitting;
    UpdateResult::action(UpdateAction::SubmitContent { content })
}

pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    match std::mem::take(&mut state.submit_phase) {
        SubmitPhase::AwaitingConfirmation { content } => {
            info!("Submitting despite validation issues");
            state.submit_phase = SubmitPhase::Submitting;
            UpdateResult::action(UpdateAction::SubmitContent { content })
        }
        other => {
            state.submit_phase = other;
            UpdateResult::none()
        }
    }
}

pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    if matches!(state.submit_phase, SubmitPhase::AwaitingConfirmation { .. }) {
        info!("Submission declined");
        state.submit_phase = SubmitPhase::Idle;
    }
    UpdateResult::none()
}

pub fn handle_completed(
    state: &mut AppState,
    result: std::result::Result<SubmitResult, RequestFailure>,
) -> UpdateResult {
    state.submit_phase = SubmitPhase::Idle;

    let result = match result {
        Ok(result) => result,
        Err(failure) => {
            warn!("Submission failed: {}", failure);
            state.alerts.push(Alert::error(failure.to_string()));
            return UpdateResult::none();
        }
    };

    info!(
        "Submitted as {} ({:?})",
        result.response.submission_name, result.status
    );

    if let Some((title, body)) = submit_alert_text(&result) {
        state.alerts.push(Alert::success(title, body));
    }
    state.banner = Some(SuccessBanner::from_receipt(&result.response));
    state.sections.scroll_to_top();

    let request_id = state.submissions.begin_refresh();
    UpdateResult::action(UpdateAction::FetchSubmissions { request_id })
}
