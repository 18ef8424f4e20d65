//! Tests for handler module

use std::path::PathBuf;
use std::time::Duration;

use portal_core::{
    AppPhase, RequestFailure, SubmissionReceipt, SubmissionRecord, SubmitResult, SubmitStatus,
    ValidationResult,
};
use serde_json::json;

use super::*;
use crate::input_key::InputKey;
use crate::message::{EditOp, Message};
use crate::sections::SectionId;
use crate::state::{AppState, UiMode};
use crate::submit::SubmitPhase;
use crate::validation::ValidationOutcome;

fn submit_result(status: SubmitStatus) -> SubmitResult {
    SubmitResult {
        status,
        issues: vec!["q3 unanswered".into()],
        response: SubmissionReceipt {
            submission_name: "TeamX".into(),
            signature: "SIG123".into(),
            tsp_verification_data: json!({"n": 1}),
        },
    }
}

/// Run `msg` and every follow-up message, collecting the actions
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn state_with_content(text: &str) -> AppState {
    let mut state = AppState::default();
    state.content.set_text(text);
    state
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::default();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_shortcut_keys() {
    let state = AppState::default();
    let cases = [
        (InputKey::Char('v'), "Validate"),
        (InputKey::Char('s'), "Submit"),
        (InputKey::Char('r'), "RefreshSubmissions"),
        (InputKey::Char('p'), "TogglePolling"),
        (InputKey::Char('c'), "CopySelectedBlock"),
        (InputKey::Char('x'), "HideBanner"),
        (InputKey::Char('e'), "StartEditing"),
        (InputKey::Char('q'), "Quit"),
        (InputKey::Tab, "FocusNextSection"),
        (InputKey::BackTab, "FocusPrevSection"),
        (InputKey::Enter, "ToggleFocusedSection"),
        (InputKey::Char(' '), "ToggleFocusedSection"),
    ];
    for (key, expected) in cases {
        let msg = handle_key(&state, key).unwrap();
        assert_eq!(format!("{:?}", msg), expected, "key {:?}", key);
    }
}

#[test]
fn test_ctrl_c_quits_even_in_dialogs() {
    let mut state = AppState::default();
    state.alerts.push(crate::alert::Alert::error("Error: 500 x"));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_arrows_follow_focused_section() {
    let mut state = AppState::default();
    state.sections.focus(SectionId::Usage);
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::SelectNextBlock)
    ));
    state.sections.focus(SectionId::Submissions);
    assert!(matches!(
        handle_key(&state, InputKey::Up),
        Some(Message::ScrollTableUp)
    ));
    state.sections.focus(SectionId::Submission);
    assert!(handle_key(&state, InputKey::Down).is_none());
}

#[test]
fn test_alert_captures_keys() {
    let mut state = AppState::default();
    state.alerts.push(crate::alert::Alert::error("Error: 400 bad input"));
    assert!(handle_key(&state, InputKey::Char('s')).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::DismissAlert)
    ));
    run(&mut state, Message::Key(InputKey::Enter));
    assert!(state.alerts.is_empty());
}

#[test]
fn test_editing_mode_types_into_buffer() {
    let mut state = AppState::default();
    run(&mut state, Message::Key(InputKey::Char('e')));
    assert_eq!(state.ui_mode, UiMode::Editing);

    for c in "{\"a\":1}".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    // 's' and 'q' are text while editing
    run(&mut state, Message::Key(InputKey::Char('s')));
    run(&mut state, Message::Key(InputKey::Backspace));
    run(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.content.text(), "{\"a\":1}");
    assert!(!state.should_quit());
}

#[test]
fn test_start_editing_expands_submission_section() {
    let mut state = AppState::default();
    state.sections.toggle(SectionId::Submission);
    run(&mut state, Message::StartEditing);
    assert!(!state.sections.is_collapsed(SectionId::Submission));
    assert_eq!(state.sections.focused(), SectionId::Submission);
}

// ─────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_focused_section() {
    let mut state = AppState::default();
    run(&mut state, Message::FocusNextSection);
    assert_eq!(state.sections.focused(), SectionId::Submissions);
    run(&mut state, Message::Key(InputKey::Enter));
    assert!(state.sections.is_collapsed(SectionId::Submissions));
    run(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(!state.sections.is_collapsed(SectionId::Submissions));
}

// ─────────────────────────────────────────────────────────
// Submissions
// ─────────────────────────────────────────────────────────

#[test]
fn test_refresh_issues_increasing_request_ids() {
    let mut state = AppState::default();
    let first = run(&mut state, Message::RefreshSubmissions);
    let second = run(&mut state, Message::RefreshSubmissions);
    match (&first[..], &second[..]) {
        (
            [UpdateAction::FetchSubmissions { request_id: a }],
            [UpdateAction::FetchSubmissions { request_id: b }],
        ) => assert!(b > a),
        other => panic!("unexpected actions {:?}", other),
    }
}

#[test]
fn test_stale_submissions_response_is_ignored() {
    let mut state = AppState::default();
    let old = state.submissions.begin_refresh();
    let new = state.submissions.begin_refresh();

    run(
        &mut state,
        Message::SubmissionsLoaded {
            request_id: new,
            result: Ok(vec![SubmissionRecord::new("t", "new", "s")]),
        },
    );
    run(
        &mut state,
        Message::SubmissionsLoaded {
            request_id: old,
            result: Ok(vec![
                SubmissionRecord::new("t", "old1", "s"),
                SubmissionRecord::new("t", "old2", "s"),
            ]),
        },
    );

    assert_eq!(state.submissions.rows().len(), 1);
    assert_eq!(state.submissions.rows()[0].submission_name, "new");
}

#[test]
fn test_refresh_failure_is_not_an_alert() {
    let mut state = AppState::default();
    let id = state.submissions.begin_refresh();
    run(
        &mut state,
        Message::SubmissionsLoaded {
            request_id: id,
            result: Err(RequestFailure::local("connection refused")),
        },
    );
    assert!(state.alerts.is_empty());
    assert!(state.submissions.last_error.is_some());
}

#[test]
fn test_toggle_polling_follows_indicator() {
    let mut state = AppState::default();
    assert_eq!(
        run(&mut state, Message::TogglePolling),
        vec![UpdateAction::StartPolling]
    );
    state.polling_active = true;
    assert_eq!(
        run(&mut state, Message::Key(InputKey::Char('p'))),
        vec![UpdateAction::StopPolling]
    );
}

// ─────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────

#[test]
fn test_validate_sends_current_content() {
    let mut state = state_with_content("{\"q\": 1}");
    let actions = run(&mut state, Message::Key(InputKey::Char('v')));
    assert!(matches!(
        &actions[..],
        [UpdateAction::CheckSubmission { content, .. }] if content == "{\"q\": 1}"
    ));
    assert!(state.validation.is_checking());
}

#[test]
fn test_validation_issues_and_clean_outcomes() {
    let mut state = AppState::default();
    let id = state.validation.begin();
    run(
        &mut state,
        Message::ValidationCompleted {
            request_id: id,
            result: Ok(ValidationResult::with_issues(["a", "b"])),
        },
    );
    assert_eq!(
        state.validation.outcome,
        Some(ValidationOutcome::Issues(vec!["a".into(), "b".into()]))
    );

    let id = state.validation.begin();
    run(
        &mut state,
        Message::ValidationCompleted {
            request_id: id,
            result: Ok(ValidationResult::ok()),
        },
    );
    assert_eq!(state.validation.outcome, Some(ValidationOutcome::Clean));
}

#[test]
fn test_validation_error_alerts_and_keeps_panel() {
    let mut state = AppState::default();
    let id = state.validation.begin();
    let actions = run(
        &mut state,
        Message::ValidationCompleted {
            request_id: id,
            result: Err(RequestFailure::http(400, "bad input")),
        },
    );
    assert!(actions.is_empty());
    assert!(state.validation.outcome.is_none());
    let alert = state.alerts.current().unwrap();
    assert!(alert.body.contains("400"));
    assert!(alert.body.contains("bad input"));
}

// ─────────────────────────────────────────────────────────
// Submit flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_validates_first() {
    let mut state = state_with_content("payload");
    let actions = run(&mut state, Message::Submit);
    assert_eq!(
        actions,
        vec![UpdateAction::ValidateBeforeSubmit {
            content: "payload".into()
        }]
    );
    assert!(matches!(state.submit_phase, SubmitPhase::Validating { .. }));
}

#[test]
fn test_second_submit_while_busy_is_ignored() {
    let mut state = state_with_content("payload");
    run(&mut state, Message::Submit);
    let actions = run(&mut state, Message::Submit);
    assert!(actions.is_empty());
    assert!(matches!(state.submit_phase, SubmitPhase::Validating { .. }));
}

#[test]
fn test_clean_validation_proceeds_to_submit_with_captured_content() {
    let mut state = state_with_content("original");
    run(&mut state, Message::Submit);
    // Edits made while validating do not change what gets submitted
    state.content.set_text("edited");

    let actions = run(
        &mut state,
        Message::SubmitValidationCompleted {
            result: Ok(ValidationResult::ok()),
        },
    );
    assert_eq!(
        actions,
        vec![UpdateAction::SubmitContent {
            content: "original".into()
        }]
    );
    assert_eq!(state.submit_phase, SubmitPhase::Submitting);
}

#[test]
fn test_issues_open_confirm_dialog_and_decline_stops() {
    let mut state = state_with_content("payload");
    run(&mut state, Message::Submit);
    let actions = run(
        &mut state,
        Message::SubmitValidationCompleted {
            result: Ok(ValidationResult::with_issues(["missing q1"])),
        },
    );
    assert!(actions.is_empty());
    let dialog = state.confirm_dialog.as_ref().unwrap();
    assert!(dialog.message.contains("missing q1"));

    let actions = run(&mut state, Message::Key(InputKey::Char('n')));
    assert!(actions.is_empty());
    assert!(state.confirm_dialog.is_none());
    assert!(state.submit_phase.is_idle());
}

#[test]
fn test_accepting_confirm_dialog_submits() {
    let mut state = state_with_content("payload");
    run(&mut state, Message::Submit);
    run(
        &mut state,
        Message::SubmitValidationCompleted {
            result: Ok(ValidationResult::with_issues(["missing q1"])),
        },
    );
    let actions = run(&mut state, Message::Key(InputKey::Char('y')));
    assert_eq!(
        actions,
        vec![UpdateAction::SubmitContent {
            content: "payload".into()
        }]
    );
    assert!(state.confirm_dialog.is_none());
}

#[test]
fn test_issues_without_confirmation_setting_submit_directly() {
    let mut state = state_with_content("payload");
    state.settings.submit.confirm_on_issues = false;
    run(&mut state, Message::Submit);
    let actions = run(
        &mut state,
        Message::SubmitValidationCompleted {
            result: Ok(ValidationResult::with_issues(["x"])),
        },
    );
    assert!(state.confirm_dialog.is_none());
    assert!(matches!(&actions[..], [UpdateAction::SubmitContent { .. }]));
}

#[test]
fn test_pre_submit_validation_error_alerts_and_resets() {
    let mut state = state_with_content("payload");
    run(&mut state, Message::Submit);
    let actions = run(
        &mut state,
        Message::SubmitValidationCompleted {
            result: Err(RequestFailure::http(400, "bad input")),
        },
    );
    assert!(actions.is_empty());
    assert!(state.submit_phase.is_idle());
    assert_eq!(state.alerts.current().unwrap().body, "Error: 400 bad input");
}

#[test]
fn test_successful_submit_shows_banner_scrolls_and_refreshes() {
    let mut state = state_with_content("payload");
    state.sections.scroll_down();
    state.submit_phase = SubmitPhase::Submitting;

    let actions = run(
        &mut state,
        Message::SubmitCompleted {
            result: Ok(submit_result(SubmitStatus::Success)),
        },
    );

    assert!(matches!(&actions[..], [UpdateAction::FetchSubmissions { .. }]));
    assert!(state.submit_phase.is_idle());
    assert_eq!(state.sections.first_visible(), 0);

    let banner = state.banner.as_ref().unwrap();
    assert_eq!(banner.team_line(), "Team: TeamX");
    assert_eq!(banner.signature_line(), "Signature: SIG123");
    assert_eq!(banner.verification, r#"{"n":1}"#);

    let alert = state.alerts.current().unwrap();
    assert_eq!(alert.title, "Submission successful!");
}

#[test]
fn test_submit_with_issues_alert_lists_issues() {
    let mut state = AppState::default();
    state.submit_phase = SubmitPhase::Submitting;
    run(
        &mut state,
        Message::SubmitCompleted {
            result: Ok(submit_result(SubmitStatus::IssuesFound)),
        },
    );
    let alert = state.alerts.current().unwrap();
    assert_eq!(alert.title, "Successfully submitted with issues!");
    assert!(alert.body.contains("q3 unanswered"));
    assert!(state.banner.is_some());
}

#[test]
fn test_submit_other_status_updates_banner_without_alert() {
    let mut state = AppState::default();
    state.submit_phase = SubmitPhase::Submitting;
    let actions = run(
        &mut state,
        Message::SubmitCompleted {
            result: Ok(submit_result(SubmitStatus::Other)),
        },
    );
    assert!(state.alerts.is_empty());
    assert!(state.banner.is_some());
    assert_eq!(actions.len(), 1);
}

#[test]
fn test_submit_failure_alerts_without_banner() {
    let mut state = AppState::default();
    state.submit_phase = SubmitPhase::Submitting;
    let actions = run(
        &mut state,
        Message::SubmitCompleted {
            result: Err(RequestFailure::http(502, "Bad Gateway")),
        },
    );
    assert!(actions.is_empty());
    assert!(state.banner.is_none());
    assert_eq!(state.alerts.current().unwrap().body, "Error: 502 Bad Gateway");
    assert!(state.submit_phase.is_idle());
}

#[test]
fn test_hide_banner() {
    let mut state = AppState::default();
    state.submit_phase = SubmitPhase::Submitting;
    run(
        &mut state,
        Message::SubmitCompleted {
            result: Ok(submit_result(SubmitStatus::Other)),
        },
    );
    run(&mut state, Message::Key(InputKey::Char('x')));
    assert!(state.banner.is_none());
}

// ─────────────────────────────────────────────────────────
// Copy buttons
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_selected_block_copies_trimmed_text() {
    let mut state = AppState::default();
    state.usage.selected = 3;
    let actions = run(&mut state, Message::Key(InputKey::Char('c')));
    match &actions[..] {
        [UpdateAction::CopyToClipboard { block, text, .. }] => {
            assert_eq!(*block, "python-upload");
            assert!(text.starts_with("import requests"));
            assert_eq!(text.trim(), text);
        }
        other => panic!("unexpected actions {:?}", other),
    }
}

#[test]
fn test_copy_success_marks_block_and_schedules_reset() {
    let mut state = AppState::default();
    let actions = run(
        &mut state,
        Message::CopySucceeded {
            block: "curl-list",
            generation: 1,
        },
    );
    assert!(state.usage.is_copied("curl-list"));
    assert_eq!(
        actions,
        vec![UpdateAction::ScheduleCopyReset {
            block: "curl-list",
            generation: 1,
            after: Duration::from_millis(2500),
        }]
    );

    run(
        &mut state,
        Message::CopyFeedbackExpired {
            block: "curl-list",
            generation: 1,
        },
    );
    assert!(!state.usage.is_copied("curl-list"));
}

#[test]
fn test_late_success_of_earlier_copy_keeps_newer_feedback() {
    let mut state = AppState::default();
    let first = match &run(&mut state, Message::CopyBlock { block: "curl-check" })[..] {
        [UpdateAction::CopyToClipboard { generation, .. }] => *generation,
        other => panic!("unexpected actions {:?}", other),
    };
    let second = match &run(&mut state, Message::CopyBlock { block: "curl-submit" })[..] {
        [UpdateAction::CopyToClipboard { generation, .. }] => *generation,
        other => panic!("unexpected actions {:?}", other),
    };

    run(
        &mut state,
        Message::CopySucceeded {
            block: "curl-submit",
            generation: second,
        },
    );
    let actions = run(
        &mut state,
        Message::CopySucceeded {
            block: "curl-check",
            generation: first,
        },
    );

    assert!(actions.is_empty());
    assert!(state.usage.is_copied("curl-submit"));
    assert!(!state.usage.is_copied("curl-check"));

    run(
        &mut state,
        Message::CopyFeedbackExpired {
            block: "curl-submit",
            generation: second,
        },
    );
    assert!(!state.usage.is_copied("curl-submit"));
}

#[test]
fn test_copy_failure_sets_error_note() {
    let mut state = AppState::default();
    run(
        &mut state,
        Message::CopyFailed {
            block: "curl-list",
            error: "no display".into(),
        },
    );
    let note = state.status_note.as_ref().unwrap();
    assert!(note.is_error);
    assert!(note.text.contains("no display"));
    assert!(state.alerts.is_empty());
}

// ─────────────────────────────────────────────────────────
// Content file
// ─────────────────────────────────────────────────────────

#[test]
fn test_reload_without_file_notes() {
    let mut state = AppState::default();
    let actions = run(&mut state, Message::ReloadContent);
    assert!(actions.is_empty());
    assert!(state.status_note.is_some());
}

#[test]
fn test_reload_with_file_loads() {
    let mut state = AppState::default();
    state.content.source = Some(PathBuf::from("answers.json"));
    let actions = run(&mut state, Message::Key(InputKey::Char('l')));
    assert_eq!(
        actions,
        vec![UpdateAction::LoadContentFile {
            path: PathBuf::from("answers.json")
        }]
    );
}

#[test]
fn test_file_change_does_not_clobber_edits() {
    let mut state = AppState::default();
    state.content.source = Some(PathBuf::from("answers.json"));
    run(&mut state, Message::EditContent(EditOp::Insert('x')));
    let actions = run(&mut state, Message::ContentFileChanged);
    assert!(actions.is_empty());
    assert_eq!(state.content.text(), "x");
}

#[test]
fn test_content_loaded_replaces_buffer() {
    let mut state = AppState::default();
    run(
        &mut state,
        Message::ContentLoaded {
            path: PathBuf::from("answers.json"),
            text: "{\"a\": 1}\n".into(),
        },
    );
    assert_eq!(state.content.text(), "{\"a\": 1}\n");
    assert!(!state.content.modified);
    assert_eq!(state.content.source, Some(PathBuf::from("answers.json")));
}
