//! Endpoint paths served by the portal

/// Lists stored submissions
pub const SUBMISSIONS: &str = "/submissions";

/// Validates form-encoded content (UI flavour)
pub const CHECK_SUBMISSION_UI: &str = "/check-submission-ui";

/// Stores form-encoded content (UI flavour)
pub const SUBMIT_UI: &str = "/submit-ui";

/// Stores an uploaded JSON file (scripted clients)
pub const SUBMIT_FILE: &str = "/submit";

/// Name of the form field carrying the submission text
pub const CONTENT_FIELD: &str = "content";
