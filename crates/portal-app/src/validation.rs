//! Validation panel state

use portal_core::{RequestFence, RequestId, ValidationResult};

/// What the validation panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Server reported no issues (or an unknown status)
    Clean,
    /// Server reported issues, in server order
    Issues(Vec<String>),
}

impl From<&ValidationResult> for ValidationOutcome {
    fn from(result: &ValidationResult) -> Self {
        if result.has_issues() {
            ValidationOutcome::Issues(result.issues.clone())
        } else {
            ValidationOutcome::Clean
        }
    }
}

pub const ISSUES_HEADING: &str = "Validation issues detected:";
pub const ISSUES_FOOTER: &str = "Fix the issues to ensure correct scoring of your submission!";
pub const CLEAN_MESSAGE: &str = "No validation issues detected. Press [s] to submit!";

#[derive(Debug, Clone, Default)]
pub struct ValidationPanelState {
    pub outcome: Option<ValidationOutcome>,
    fence: RequestFence,
}

impl ValidationPanelState {
    pub fn begin(&mut self) -> RequestId {
        self.fence.issue()
    }

    pub fn is_checking(&self) -> bool {
        self.fence.is_pending()
    }

    /// Accept the response to `request_id` unless a newer check was applied.
    ///
    /// The panel content is only replaced for successful checks; callers pass
    /// `None` for failures so the previous outcome stays visible.
    pub fn settle(&mut self, request_id: RequestId, result: Option<&ValidationResult>) -> bool {
        if !self.fence.accept(request_id) {
            return false;
        }
        if let Some(result) = result {
            self.outcome = Some(result.into());
        }
        true
    }
}
