//! Headless command runner
//!
//! Each command makes the same requests the TUI would, in the same order,
//! and reports every step as a [`HeadlessEvent`].

use std::io::{Read, Write};
use std::path::Path;

use tracing::{info, warn};

use portal_client::PortalApi;
use portal_core::prelude::*;

use super::HeadlessEvent;

/// How a headless command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Completed,
    /// Submission skipped because validation found issues
    Declined,
    /// An HTTP, transport or local failure
    Failed,
}

impl HeadlessOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            HeadlessOutcome::Completed => 0,
            HeadlessOutcome::Failed => 1,
            HeadlessOutcome::Declined => 2,
        }
    }
}

/// Read the submission content from `path`, or from stdin when it is `-`
pub fn read_content(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| Error::content_file("<stdin>", e.to_string()))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| Error::content_file(path, e.to_string()))
}

fn report_failure<W: Write>(err: &Error, out: &mut W) -> HeadlessOutcome {
    warn!("Headless request failed: {}", err);
    HeadlessEvent::error(err).write_to(out);
    HeadlessOutcome::Failed
}

/// `subportal list`
pub async fn list<A: PortalApi, W: Write>(api: &A, out: &mut W) -> HeadlessOutcome {
    match api.list_submissions().await {
        Ok(records) => {
            info!("Listed {} submissions", records.len());
            HeadlessEvent::submissions_listed(records).write_to(out);
            HeadlessOutcome::Completed
        }
        Err(e) => report_failure(&e, out),
    }
}

/// `subportal check <FILE>`
pub async fn check<A: PortalApi, W: Write>(api: &A, content: &str, out: &mut W) -> HeadlessOutcome {
    match api.check_submission(content).await {
        Ok(result) => {
            HeadlessEvent::validation_completed(&result).write_to(out);
            HeadlessOutcome::Completed
        }
        Err(e) => report_failure(&e, out),
    }
}

/// `subportal submit <FILE> [--yes]`.
///
/// Validates first. With issues the submission only goes ahead when
/// `assume_yes` is set or confirmation is disabled.
pub async fn submit<A: PortalApi, W: Write>(
    api: &A,
    content: &str,
    assume_yes: bool,
    confirm_on_issues: bool,
    out: &mut W,
) -> HeadlessOutcome {
    let validation = match api.check_submission(content).await {
        Ok(result) => result,
        Err(e) => return report_failure(&e, out),
    };
    HeadlessEvent::validation_completed(&validation).write_to(out);

    if validation.has_issues() && confirm_on_issues && !assume_yes {
        info!(
            "Submission declined: {} validation issue(s) and no --yes",
            validation.issues.len()
        );
        HeadlessEvent::submission_declined(validation.issues).write_to(out);
        return HeadlessOutcome::Declined;
    }

    match api.submit(content).await {
        Ok(result) => {
            info!(
                "Submitted as {} ({:?})",
                result.response.submission_name, result.status
            );
            HeadlessEvent::submission_completed(&result).write_to(out);
            HeadlessOutcome::Completed
        }
        Err(e) => report_failure(&e, out),
    }
}
