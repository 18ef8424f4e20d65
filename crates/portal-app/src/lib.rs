//! portal-app - Application state and orchestration for the submission portal
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine that executes side effects, the polling controller,
//! configuration loading, clipboard access and the content file watcher.

pub mod actions;
pub mod alert;
pub mod clipboard;
pub mod config;
pub mod confirm_dialog;
pub mod content;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod polling;
pub mod process;
pub mod sections;
pub mod signals;
pub mod state;
pub mod submissions;
pub mod submit;
pub mod usage;
pub mod validation;
pub mod watcher;

// Re-export primary types
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use config::Settings;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use polling::PollingController;
pub use sections::SectionId;
pub use state::{AppState, UiMode};
