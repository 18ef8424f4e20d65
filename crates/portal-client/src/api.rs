//! Portal API abstraction
//!
//! The TEA layer only sees this trait, so flows can be exercised against a
//! scripted transport in tests and against [`crate::HttpPortalClient`] at runtime.

use portal_core::prelude::*;
use portal_core::{SubmissionRecord, SubmitResult, ValidationResult};

/// Operations offered by the portal server.
///
/// Implement the generated `PortalApi` (Send futures) so implementations can be
/// driven from spawned tokio tasks.
#[trait_variant::make(PortalApi: Send)]
pub trait LocalPortalApi {
    /// `GET /submissions`
    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>>;

    /// `POST /check-submission-ui` with `content` as form data
    async fn check_submission(&self, content: &str) -> Result<ValidationResult>;

    /// `POST /submit-ui` with `content` as form data
    async fn submit(&self, content: &str) -> Result<SubmitResult>;
}
