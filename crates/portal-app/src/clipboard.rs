//! System clipboard access

use portal_core::prelude::*;

/// Synchronous clipboard sink.
///
/// Writes may block (X11 round trips), so callers run them on the blocking
/// pool rather than the event loop.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The desktop clipboard via `arboard`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| Error::clipboard(format!("failed to access clipboard: {}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| Error::clipboard(format!("failed to copy: {}", e)))
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use super::*;

    /// Records writes; optionally fails every write
    #[derive(Default)]
    pub struct FakeClipboard {
        pub writes: Mutex<Vec<String>>,
        pub fail_with: Option<String>,
    }

    impl FakeClipboard {
        pub fn failing(reason: &str) -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                fail_with: Some(reason.to_string()),
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl ClipboardWriter for FakeClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if let Some(reason) = &self.fail_with {
                return Err(Error::clipboard(reason.clone()));
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
