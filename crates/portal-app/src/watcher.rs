//! Content file watcher
//!
//! Watches the `--file` content source and sends `ContentFileChanged` after
//! debounced writes. The parent directory is watched rather than the file, so
//! editors that save by rename are still noticed.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::{mpsc, oneshot};

use portal_core::prelude::*;

use crate::message::Message;

/// Debounced watcher for a single file
pub struct ContentWatcher {
    path: PathBuf,
    debounce: Duration,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl ContentWatcher {
    pub fn new(path: PathBuf, debounce: Duration) -> Self {
        Self {
            path,
            debounce,
            stop_tx: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<()> {
        if self.is_running() {
            return Err(Error::content_file(&self.path, "watcher is already running"));
        }
        let file_name = self
            .path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| Error::content_file(&self.path, "not a file path"))?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let debounce = self.debounce;
        let (stop_tx, stop_rx) = oneshot::channel();
        self.stop_tx = Some(stop_tx);

        tokio::task::spawn_blocking(move || {
            run_watcher(dir, file_name, debounce, message_tx, stop_rx);
        });
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }
}

impl Drop for ContentWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_watcher(
    dir: PathBuf,
    file_name: OsString,
    debounce: Duration,
    message_tx: mpsc::Sender<Message>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let tx = message_tx.clone();
    let target = file_name.clone();

    let debouncer_result = new_debouncer(debounce, None, move |result: DebounceEventResult| {
        match result {
            Ok(events) => {
                let touched = events.iter().any(|event| {
                    event
                        .paths
                        .iter()
                        .any(|path| path.file_name() == Some(target.as_os_str()))
                });
                if touched {
                    debug!("Content file changed on disk");
                    let _ = tx.blocking_send(Message::ContentFileChanged);
                }
            }
            Err(errors) => {
                for error in errors {
                    warn!("Content watcher error: {:?}", error);
                    let _ = tx.blocking_send(Message::WatcherError {
                        message: error.to_string(),
                    });
                }
            }
        }
    });

    let mut debouncer = match debouncer_result {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to create content watcher: {}", e);
            let _ = message_tx.blocking_send(Message::WatcherError {
                message: format!("Failed to create watcher: {}", e),
            });
            return;
        }
    };

    if let Err(e) = debouncer.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Failed to watch {}: {}", dir.display(), e);
        let _ = message_tx.blocking_send(Message::WatcherError {
            message: format!("Failed to watch {}: {}", dir.display(), e),
        });
        return;
    }
    info!("Watching {:?} in {}", file_name, dir.display());

    loop {
        match stop_rx.try_recv() {
            Ok(()) | Err(oneshot::error::TryRecvError::Closed) => {
                info!("Content watcher stopping");
                break;
            }
            Err(oneshot::error::TryRecvError::Empty) => {
                std::thread::sleep(Duration::from_millis(100));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_watcher_is_idle() {
        let watcher = ContentWatcher::new(PathBuf::from("answers.json"), Duration::from_millis(50));
        assert!(!watcher.is_running());
        assert_eq!(watcher.path(), Path::new("answers.json"));
    }

    #[tokio::test]
    async fn test_stop_when_not_started() {
        let mut watcher =
            ContentWatcher::new(PathBuf::from("answers.json"), Duration::from_millis(50));
        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_start_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "{}").unwrap();

        let (tx, _rx) = mpsc::channel(8);
        let mut watcher = ContentWatcher::new(path, Duration::from_millis(50));
        watcher.start(tx.clone()).unwrap();
        assert!(watcher.is_running());
        assert!(watcher.start(tx).is_err());
        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_reports_write_to_watched_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "{}").unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        let mut watcher = ContentWatcher::new(path.clone(), Duration::from_millis(50));
        watcher.start(tx).unwrap();

        // Give the watcher thread time to register
        tokio::time::sleep(Duration::from_millis(300)).await;
        std::fs::write(&path, "{\"changed\": true}").unwrap();

        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("change notification");
        assert!(matches!(msg, Some(Message::ContentFileChanged)));
        watcher.stop();
    }
}
