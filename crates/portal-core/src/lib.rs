//! # portal-core - Core Domain Types
//!
//! Foundation crate for the submission portal client. Provides the wire-level
//! domain types, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`submission`)
//! - [`SubmissionRecord`] - One row of the submissions listing
//! - [`ValidationResult`] / [`ValidationStatus`] - Response of the validation endpoint
//! - [`SubmitResult`] / [`SubmitStatus`] / [`SubmissionReceipt`] - Response of the submit endpoint
//! - [`RequestFailure`] - Cloneable description of a failed HTTP call
//!
//! ### Application Types (`types`)
//! - [`AppPhase`] - Application lifecycle phase
//! - [`RequestId`], [`RequestFence`] - Ordering of overlapping requests
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use portal_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod submission;
pub mod types;

/// Prelude for common imports used throughout all portal crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use submission::{
    RequestFailure, SubmissionReceipt, SubmissionRecord, SubmitResult, SubmitStatus,
    ValidationResult, ValidationStatus,
};
pub use types::{AppPhase, RequestFence, RequestId};
