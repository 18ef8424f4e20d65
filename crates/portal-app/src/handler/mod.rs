//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and dialogs
//! - `submissions`: Table refresh and polling toggle
//! - `validation`: Validation flow
//! - `submit`: Submit flow (validate, confirm, submit)
//! - `usage`: Copy buttons of the API usage section
//! - `content`: Content editor and content file reloads

pub(crate) mod content;
pub(crate) mod keys;
pub(crate) mod submissions;
pub(crate) mod submit;
pub(crate) mod update;
pub(crate) mod usage;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

use portal_core::RequestId;

use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// `GET /submissions`; the result comes back as `SubmissionsLoaded`
    FetchSubmissions { request_id: RequestId },

    /// Validation for the panel; result comes back as `ValidationCompleted`
    CheckSubmission {
        request_id: RequestId,
        content: String,
    },

    /// First step of the submit flow; result comes back as `SubmitValidationCompleted`
    ValidateBeforeSubmit { content: String },

    /// Second step of the submit flow; result comes back as `SubmitCompleted`
    SubmitContent { content: String },

    StartPolling,
    StopPolling,

    /// Write text to the system clipboard off the event loop
    CopyToClipboard {
        block: &'static str,
        text: String,
        generation: u64,
    },

    /// Send `CopyFeedbackExpired` after `after`
    ScheduleCopyReset {
        block: &'static str,
        generation: u64,
        after: Duration,
    },

    /// Read the content file; result comes back as `ContentLoaded`/`ContentLoadFailed`
    LoadContentFile { path: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
