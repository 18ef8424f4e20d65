//! Settings loading and initialization

use std::path::{Path, PathBuf};

use portal_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR: &str = ".subportal";

/// Environment variable overriding `[server] base_url`
pub const URL_ENV_VAR: &str = "SUBPORTAL_URL";

const DEFAULT_CONFIG: &str = r#"# Submission portal client configuration

[server]
base_url = "http://127.0.0.1:8000"
timeout_ms = 10000

[polling]
interval_ms = 2000      # Refresh period of the submissions table (min 250)
auto_start = false      # Start polling when the UI opens

[ui]
copied_feedback_ms = 2500
collapsed_sections = [] # Any of "usage", "submission", "submissions"

[submit]
confirm_on_issues = true  # Ask before submitting content with validation issues

[content]
watch = false           # Reload the --file content when it changes
debounce_ms = 300
"#;

/// Load settings from `.subportal/config.toml` under `base_dir`.
///
/// A missing or unreadable file yields the defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = base_dir.join(CONFIG_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config under `base_dir`.
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let dir = base_dir.join(CONFIG_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {} dir: {}", CONFIG_DIR, e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        info!("Config already present at {:?}", config_path);
    } else {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

/// Pick the server URL: command line, then environment, then config file.
pub fn resolve_base_url(cli: Option<&str>, env: Option<&str>, settings: &Settings) -> String {
    [cli, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(&settings.server.base_url)
        .to_string()
}
