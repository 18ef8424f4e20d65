//! Headless mode - NDJSON event output for scripted use
//!
//! `subportal list|check|submit` talk to the portal without the TUI and
//! print one JSON object per line to stdout.
//!
//! # Example Output
//!
//! ```json
//! {"event":"validation_completed","status":"issues found","issues":["missing answer 3"],"timestamp":1704700001000}
//! {"event":"submission_declined","issues":["missing answer 3"],"timestamp":1704700001005}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use portal_core::{Error, SubmissionRecord, SubmitResult, SubmitStatus, ValidationResult, ValidationStatus};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// `GET /submissions` answered
    SubmissionsListed {
        count: usize,
        submissions: Vec<SubmissionRecord>,
        timestamp: i64,
    },

    /// `POST /check-submission-ui` answered
    ValidationCompleted {
        status: ValidationStatus,
        issues: Vec<String>,
        timestamp: i64,
    },

    /// `POST /submit-ui` answered
    SubmissionCompleted {
        status: SubmitStatus,
        submission_name: String,
        signature: String,
        tsp_verification_data: serde_json::Value,
        issues: Vec<String>,
        timestamp: i64,
    },

    /// Validation found issues and `--yes` was not given
    SubmissionDeclined { issues: Vec<String>, timestamp: i64 },

    /// A request or local step failed
    Error {
        message: String,
        status: Option<u16>,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as one JSON line, logging (not propagating) failures
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn submissions_listed(submissions: Vec<SubmissionRecord>) -> Self {
        Self::SubmissionsListed {
            count: submissions.len(),
            submissions,
            timestamp: Self::now(),
        }
    }

    pub fn validation_completed(result: &ValidationResult) -> Self {
        Self::ValidationCompleted {
            status: result.status,
            issues: result.issues.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn submission_completed(result: &SubmitResult) -> Self {
        Self::SubmissionCompleted {
            status: result.status,
            submission_name: result.response.submission_name.clone(),
            signature: result.response.signature.clone(),
            tsp_verification_data: result.response.tsp_verification_data.clone(),
            issues: result.issues.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn submission_declined(issues: Vec<String>) -> Self {
        Self::SubmissionDeclined {
            issues,
            timestamp: Self::now(),
        }
    }

    pub fn error(err: &Error) -> Self {
        Self::Error {
            message: err.to_string(),
            status: err.status(),
            fatal: err.is_fatal(),
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::SubmissionReceipt;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out);
        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.lines().count(), 1);
        serde_json::from_str(&line).expect("invalid JSON")
    }

    #[test]
    fn test_submissions_listed_serialization() {
        let event = HeadlessEvent::submissions_listed(vec![SubmissionRecord::new(
            "2025-03-01 10:00:00",
            "TeamA",
            "SIG",
        )]);
        let value = to_value(&event);

        assert_eq!(value["event"], "submissions_listed");
        assert_eq!(value["count"], 1);
        assert_eq!(value["submissions"][0]["submission_name"], "TeamA");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_validation_completed_uses_wire_status() {
        let event = HeadlessEvent::validation_completed(&ValidationResult::with_issues(["a"]));
        let value = to_value(&event);

        assert_eq!(value["event"], "validation_completed");
        assert_eq!(value["status"], "issues found");
        assert_eq!(value["issues"][0], "a");
    }

    #[test]
    fn test_submission_completed_carries_receipt() {
        let result = SubmitResult {
            status: SubmitStatus::Success,
            issues: Vec::new(),
            response: SubmissionReceipt {
                submission_name: "TeamX".to_string(),
                signature: "SIG123".to_string(),
                tsp_verification_data: serde_json::json!({"n": 1}),
            },
        };
        let value = to_value(&HeadlessEvent::submission_completed(&result));

        assert_eq!(value["event"], "submission_completed");
        assert_eq!(value["status"], "success");
        assert_eq!(value["submission_name"], "TeamX");
        assert_eq!(value["signature"], "SIG123");
        assert_eq!(value["tsp_verification_data"]["n"], 1);
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error(&Error::http(400, "bad input")));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "Error: 400 bad input");
        assert_eq!(value["status"], 400);
        assert_eq!(value["fatal"], false);
    }

    #[test]
    fn test_declined_serialization() {
        let value = to_value(&HeadlessEvent::submission_declined(vec!["x".into()]));
        assert_eq!(value["event"], "submission_declined");
        assert_eq!(value["issues"][0], "x");
    }
}
