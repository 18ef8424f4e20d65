//! Engine - shared orchestration core for the TUI and tests
//!
//! Owns the application state, the message channel, the polling controller
//! and the content watcher. Frontends feed it messages and render
//! `engine.state`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use portal_client::PortalApi;
use portal_core::prelude::*;

use crate::actions::ActionContext;
use crate::clipboard::ClipboardWriter;
use crate::config::Settings;
use crate::message::Message;
use crate::polling::PollingController;
use crate::process::process_message;
use crate::signals;
use crate::state::AppState;
use crate::watcher::ContentWatcher;


/// Capacity of the message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine<A> {
    pub state: AppState,

    /// Sender half, cloned into every background task
    pub msg_tx: mpsc::Sender<Message>,
    pub msg_rx: mpsc::Receiver<Message>,

    api: Arc<A>,
    clipboard: Arc<dyn ClipboardWriter>,
    poller: PollingController,
    content_path: Option<PathBuf>,
    content_watcher: Option<ContentWatcher>,
}

impl<A> Engine<A>
where
    A: PortalApi + Sync + 'static,
{
    /// Build an engine. Nothing runs until [`Engine::start`].
    pub fn new(
        api: A,
        clipboard: Arc<dyn ClipboardWriter>,
        settings: Settings,
        content_path: Option<PathBuf>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        let poller = PollingController::new(settings.polling.interval());
        let server_url = settings.server.base_url.clone();
        let mut state = AppState::new(settings, server_url);
        state.content.source = content_path.clone();

        Self {
            state,
            msg_tx,
            msg_rx,
            api: Arc::new(api),
            clipboard,
            poller,
            content_path,
            content_watcher: None,
        }
    }

    /// Kick off startup work: content load, first refresh, polling, watcher
    pub fn start(&mut self) {
        signals::spawn_signal_handler(self.msg_tx.clone());

        if self.content_path.is_some() {
            self.process_message(Message::ReloadContent);
        }
        self.start_content_watcher();

        self.process_message(Message::RefreshSubmissions);

        if self.state.settings.polling.auto_start {
            self.process_message(Message::TogglePolling);
        }
    }

    fn start_content_watcher(&mut self) {
        let Some(path) = self.content_path.clone() else {
            return;
        };
        if !self.state.settings.content.watch {
            return;
        }
        let debounce = Duration::from_millis(self.state.settings.content.debounce_ms);
        let mut watcher = ContentWatcher::new(path, debounce);
        match watcher.start(self.msg_tx.clone()) {
            Ok(()) => self.content_watcher = Some(watcher),
            Err(e) => warn!("Content watcher not started: {}", e),
        }
    }

    /// Process one message and its follow-ups
    pub fn process_message(&mut self, message: Message) {
        let mut ctx = ActionContext {
            msg_tx: &self.msg_tx,
            api: &self.api,
            clipboard: &self.clipboard,
            poller: &mut self.poller,
        };
        process_message(&mut self.state, message, &mut ctx);
    }

    /// Process every message already queued, returning how many were handled
    pub fn drain_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            handled += 1;
        }
        handled
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn poller(&self) -> &PollingController {
        &self.poller
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Stop background work before exit
    pub fn shutdown(&mut self) {
        self.poller.stop();
        if let Some(mut watcher) = self.content_watcher.take() {
            watcher.stop();
        }
        self.state.polling_active = false;
        info!("Engine shut down");
    }
}
