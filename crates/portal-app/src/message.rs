//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use portal_core::{RequestFailure, RequestId, SubmissionRecord, SubmitResult, ValidationResult};

use crate::input_key::InputKey;

/// Edit applied to the content buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick from the event loop
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────
    FocusNextSection,
    FocusPrevSection,
    ToggleFocusedSection,
    ScrollPageUp,
    ScrollPageDown,

    // ─────────────────────────────────────────────────────────
    // API usage / copy buttons
    // ─────────────────────────────────────────────────────────
    SelectNextBlock,
    SelectPrevBlock,
    CopySelectedBlock,
    CopyBlock {
        block: &'static str,
    },
    /// Clipboard write finished
    CopySucceeded {
        block: &'static str,
        generation: u64,
    },
    CopyFailed {
        block: &'static str,
        error: String,
    },
    /// Feedback window of a copy elapsed
    CopyFeedbackExpired {
        block: &'static str,
        generation: u64,
    },

    // ─────────────────────────────────────────────────────────
    // Content editor
    // ─────────────────────────────────────────────────────────
    StartEditing,
    StopEditing,
    EditContent(EditOp),
    /// Re-read the `--file` content source
    ReloadContent,
    ContentLoaded {
        path: PathBuf,
        text: String,
    },
    ContentLoadFailed {
        path: PathBuf,
        error: String,
    },
    /// The watched content file changed on disk
    ContentFileChanged,
    WatcherError {
        message: String,
    },

    // ─────────────────────────────────────────────────────────
    // Submissions table
    // ─────────────────────────────────────────────────────────
    RefreshSubmissions,
    SubmissionsLoaded {
        request_id: RequestId,
        result: Result<Vec<SubmissionRecord>, RequestFailure>,
    },
    ScrollTableUp,
    ScrollTableDown,
    TogglePolling,

    // ─────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────
    Validate,
    ValidationCompleted {
        request_id: RequestId,
        result: Result<ValidationResult, RequestFailure>,
    },

    // ─────────────────────────────────────────────────────────
    // Submit flow
    // ─────────────────────────────────────────────────────────
    Submit,
    /// Pre-submit validation finished
    SubmitValidationCompleted {
        result: Result<ValidationResult, RequestFailure>,
    },
    /// Submit despite issues (confirm dialog accepted)
    ConfirmSubmit,
    /// Abort the flow (confirm dialog declined)
    CancelSubmit,
    SubmitCompleted {
        result: Result<SubmitResult, RequestFailure>,
    },
    HideBanner,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    DismissAlert,
}
