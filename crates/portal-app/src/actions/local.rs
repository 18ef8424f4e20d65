//! Local side effects: clipboard, timers and the content file

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use portal_core::prelude::*;

use crate::clipboard::ClipboardWriter;
use crate::message::Message;

pub(super) fn spawn_clipboard_write(
    clipboard: Arc<dyn ClipboardWriter>,
    msg_tx: mpsc::Sender<Message>,
    block: &'static str,
    text: String,
    generation: u64,
) {
    tokio::spawn(async move {
        let outcome = tokio::task::spawn_blocking(move || clipboard.write_text(&text)).await;
        let msg = match outcome {
            Ok(Ok(())) => Message::CopySucceeded { block, generation },
            Ok(Err(e)) => Message::CopyFailed {
                block,
                error: e.to_string(),
            },
            Err(join_error) => Message::CopyFailed {
                block,
                error: format!("clipboard task failed: {}", join_error),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

pub(super) fn spawn_copy_reset(
    msg_tx: mpsc::Sender<Message>,
    block: &'static str,
    generation: u64,
    after: Duration,
) {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        let _ = msg_tx
            .send(Message::CopyFeedbackExpired { block, generation })
            .await;
    });
}

pub(super) fn spawn_load_content(msg_tx: mpsc::Sender<Message>, path: PathBuf) {
    tokio::spawn(async move {
        let msg = match tokio::fs::read_to_string(&path).await {
            Ok(text) => Message::ContentLoaded { path, text },
            Err(e) => {
                debug!("Reading {} failed: {}", path.display(), e);
                Message::ContentLoadFailed {
                    error: e.to_string(),
                    path,
                }
            }
        };
        let _ = msg_tx.send(msg).await;
    });
}
