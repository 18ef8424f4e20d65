//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use portal_core::AppPhase;

use crate::alert::AlertQueue;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::content::ContentBuffer;
use crate::sections::SectionSet;
use crate::submissions::SubmissionsTableState;
use crate::submit::{SubmitPhase, SuccessBanner};
use crate::usage::UsageState;
use crate::validation::ValidationPanelState;

/// How long a status-line note stays visible
pub const STATUS_NOTE_TTL: Duration = Duration::from_secs(4);

/// Input mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keys are shortcuts
    #[default]
    Normal,
    /// Keys edit the content buffer until Esc
    Editing,
}

/// Transient one-line note in the status bar
#[derive(Debug, Clone)]
pub struct StatusNote {
    pub text: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Server the client talks to, shown in the header
    pub server_url: String,
    pub settings: Settings,

    pub sections: SectionSet,
    pub usage: UsageState,
    pub content: ContentBuffer,
    pub validation: ValidationPanelState,
    pub submissions: SubmissionsTableState,

    pub submit_phase: SubmitPhase,
    pub banner: Option<SuccessBanner>,

    pub confirm_dialog: Option<ConfirmDialogState>,
    pub alerts: AlertQueue,
    pub status_note: Option<StatusNote>,

    /// Mirrors the engine's polling controller
    pub polling_active: bool,
}

impl AppState {
    pub fn new(settings: Settings, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            sections: SectionSet::with_collapsed(&settings.ui.collapsed_sections),
            usage: UsageState::new(&server_url),
            content: ContentBuffer::new(),
            validation: ValidationPanelState::default(),
            submissions: SubmissionsTableState::new(),
            submit_phase: SubmitPhase::Idle,
            banner: None,
            confirm_dialog: None,
            alerts: AlertQueue::default(),
            status_note: None,
            polling_active: false,
            server_url,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn note(&mut self, text: impl Into<String>, is_error: bool) {
        self.status_note = Some(StatusNote {
            text: text.into(),
            is_error,
            expires_at: Instant::now() + STATUS_NOTE_TTL,
        });
    }

    /// Drop the status note once it has expired
    pub fn expire_note(&mut self, now: Instant) {
        if self.status_note.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.status_note = None;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let settings = Settings::default();
        let url = settings.server.base_url.clone();
        Self::new(settings, url)
    }
}
