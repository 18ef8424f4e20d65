//! Confirm dialog state.
//!
//! Data model for yes/no dialogs. The rendering widget lives in
//! `portal-tui::widgets::confirm_dialog`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Sent when the user accepts (`y` / Enter)
    pub on_accept: Message,
    /// Sent when the user declines (`n` / Esc)
    pub on_decline: Message,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        on_accept: Message,
        on_decline: Message,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_accept,
            on_decline,
        }
    }

    /// Dialog asking whether to submit although validation found issues
    pub fn submit_despite_issues(issues: &[String]) -> Self {
        Self::new(
            "Submit with issues?",
            crate::submit::confirm_despite_issues_text(issues),
            Message::ConfirmSubmit,
            Message::CancelSubmit,
        )
    }
}
