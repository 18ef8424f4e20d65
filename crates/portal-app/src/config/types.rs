//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sections::SectionId;

/// Smallest accepted polling period
pub const MIN_POLL_INTERVAL_MS: u64 = 250;

/// Application settings (`.subportal/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub polling: PollingSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub submit: SubmitSettings,

    #[serde(default)]
    pub content: ContentSettings,
}

/// Portal server connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Submissions polling
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingSettings {
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,

    /// Start polling as soon as the UI opens
    #[serde(default)]
    pub auto_start: bool,
}

impl PollingSettings {
    /// Polling period, clamped to the minimum
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_POLL_INTERVAL_MS))
    }
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_poll_interval_ms(),
            auto_start: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a copy button shows its "copied" state
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,

    /// Sections collapsed at startup
    #[serde(default)]
    pub collapsed_sections: Vec<SectionId>,
}

impl UiSettings {
    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            copied_feedback_ms: default_copied_feedback_ms(),
            collapsed_sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmitSettings {
    /// Ask before submitting content the server flagged
    #[serde(default = "default_true")]
    pub confirm_on_issues: bool,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            confirm_on_issues: true,
        }
    }
}

/// Content file handling (`--file`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentSettings {
    /// Reload the content file when it changes on disk
    #[serde(default)]
    pub watch: bool,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            watch: false,
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_base_url() -> String {
    portal_client::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    portal_client::DEFAULT_TIMEOUT_MS
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_copied_feedback_ms() -> u64 {
    2500
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_true() -> bool {
    true
}
