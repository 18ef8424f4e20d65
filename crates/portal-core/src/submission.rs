//! Wire types exchanged with the portal server
//!
//! The shapes follow the JSON produced by the three UI endpoints:
//! `GET /submissions`, `POST /check-submission-ui` and `POST /submit-ui`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// One previously stored submission, as listed by `GET /submissions`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionRecord {
    pub time: String,
    pub submission_name: String,
    pub signature: String,
}

impl SubmissionRecord {
    pub fn new(
        time: impl Into<String>,
        submission_name: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            submission_name: submission_name.into(),
            signature: signature.into(),
        }
    }

    /// Cell values in display order: time, name, signature
    pub fn cells(&self) -> [&str; 3] {
        [&self.time, &self.submission_name, &self.signature]
    }
}

/// Outcome reported by the validation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ValidationStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "issues found")]
    IssuesFound,
    /// Any status string this client does not know; treated like `Ok`
    #[serde(other)]
    Other,
}

/// Response of `POST /check-submission-ui`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub issues: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            status: ValidationStatus::Ok,
            issues: Vec::new(),
        }
    }

    pub fn with_issues<I, S>(issues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            status: ValidationStatus::IssuesFound,
            issues: issues.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_issues(&self) -> bool {
        self.status == ValidationStatus::IssuesFound
    }
}

/// Outcome reported by the submit endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SubmitStatus {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "issues found")]
    IssuesFound,
    #[serde(other)]
    Other,
}

/// Identifiers returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubmissionReceipt {
    pub submission_name: String,
    pub signature: String,
    /// Opaque timestamp-protocol payload; only ever displayed
    #[serde(default)]
    pub tsp_verification_data: serde_json::Value,
}

impl SubmissionReceipt {
    /// Compact JSON rendering of the verification payload
    pub fn verification_json(&self) -> String {
        self.tsp_verification_data.to_string()
    }
}

/// Response of `POST /submit-ui`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubmitResult {
    pub status: SubmitStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub issues: Vec<String>,
    pub response: SubmissionReceipt,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cloneable description of a failed portal call.
///
/// [`Error`] is not `Clone` (it wraps `std::io::Error`), so messages crossing
/// the TEA channel carry this instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    /// HTTP status, `None` when no response was received or it could not be decoded
    pub status: Option<u16>,
    pub detail: String,
}

impl RequestFailure {
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn local(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "Error: {} {}", status, self.detail),
            None => write!(f, "Error: {}", self.detail),
        }
    }
}

impl From<&Error> for RequestFailure {
    fn from(err: &Error) -> Self {
        match err {
            Error::Http { status, detail } => Self::http(*status, detail.clone()),
            other => Self::local(other.to_string()),
        }
    }
}

impl From<Error> for RequestFailure {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}
