//! Submit flow state and texts

use portal_core::{SubmissionReceipt, SubmitResult, SubmitStatus};

/// Progress of the submit flow.
///
/// Only one flow may run at a time; a submit request outside `Idle` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Pre-submit validation in flight
    Validating { content: String },
    /// Issues were found; waiting for the user to confirm
    AwaitingConfirmation { content: String },
    /// Submission request in flight
    Submitting,
}

impl SubmitPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitPhase::Idle)
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            SubmitPhase::Idle => None,
            SubmitPhase::Validating { .. } => Some("Validating before submit…"),
            SubmitPhase::AwaitingConfirmation { .. } => Some("Waiting for confirmation"),
            SubmitPhase::Submitting => Some("Submitting…"),
        }
    }
}

/// Success banner shown at the top of the page after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessBanner {
    pub submission_name: String,
    pub signature: String,
    /// Compact JSON of the timestamp verification payload
    pub verification: String,
}

impl SuccessBanner {
    pub fn from_receipt(receipt: &SubmissionReceipt) -> Self {
        Self {
            submission_name: receipt.submission_name.clone(),
            signature: receipt.signature.clone(),
            verification: receipt.verification_json(),
        }
    }

    pub fn team_line(&self) -> String {
        format!("Team: {}", self.submission_name)
    }

    pub fn signature_line(&self) -> String {
        format!("Signature: {}", self.signature)
    }
}

/// Body of the dialog asking whether to submit despite validation issues
pub fn confirm_despite_issues_text(issues: &[String]) -> String {
    format!(
        "These issues could prevent correct scoring of your submission:\n{}\n\nPlease adhere to the submission guidelines to ensure correct scoring.\n\nSubmit despite possible scoring issues?",
        issues.join("\n")
    )
}

/// Alert shown after a successful submission, if any
pub fn submit_alert_text(result: &SubmitResult) -> Option<(&'static str, String)> {
    let receipt = &result.response;
    match result.status {
        SubmitStatus::IssuesFound => Some((
            "Successfully submitted with issues!",
            format!(
                "Consider submitting again adhering to the submission guidelines. \
                 Use the identical team name and mail address to overwrite this submission.\n\n\
                 Issues: {}\n\nTeam: {}\n\nSignature: {}",
                result.issues.join("\n"),
                receipt.submission_name,
                receipt.signature
            ),
        )),
        SubmitStatus::Success => Some((
            "Submission successful!",
            format!(
                "Team: {}\n\nSignature: {}",
                receipt.submission_name, receipt.signature
            ),
        )),
        SubmitStatus::Other => None,
    }
}
