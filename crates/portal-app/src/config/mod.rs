//! Configuration file parsing for the portal client
//!
//! Supports `.subportal/config.toml` in the working directory. Every key is
//! optional; missing keys fall back to built-in defaults.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, resolve_base_url, CONFIG_DIR, CONFIG_FILENAME, URL_ENV_VAR};
pub use types::{
    ContentSettings, PollingSettings, ServerSettings, Settings, SubmitSettings, UiSettings,
};
