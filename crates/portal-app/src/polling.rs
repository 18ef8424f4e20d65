//! Submissions polling.
//!
//! [`PollingController`] owns the repeating refresh timer. The engine holds the
//! only instance; `update()` asks for start/stop through `UpdateAction`s and the
//! engine mirrors [`PollingController::is_polling`] into the state indicator.
//!
//! The timer task sends `Message::RefreshSubmissions` once per period, the
//! first one a full period after start. It exits when:
//! - the controller signals shutdown (`stop`, `start` again, drop), or
//! - the message channel is closed (engine shutting down).

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use portal_core::prelude::*;

use crate::message::Message;

struct PollingTask {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Start/stop control over the refresh timer
pub struct PollingController {
    interval: Duration,
    task: Option<PollingTask>,
}

impl PollingController {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_polling(&self) -> bool {
        self.task.is_some()
    }

    /// Number of live timers: 0 or 1
    pub fn active_timers(&self) -> usize {
        usize::from(self.task.is_some())
    }

    /// Start polling. A running timer is stopped first.
    pub fn start(&mut self, msg_tx: mpsc::Sender<Message>) {
        self.stop();

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(run_timer(self.interval, msg_tx, shutdown_rx));
        self.task = Some(PollingTask {
            shutdown_tx,
            handle,
        });
        info!("Polling submissions every {:?}", self.interval);
    }

    /// Stop polling. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        let _ = task.shutdown_tx.send(true);
        task.handle.abort();
        info!("Polling stopped");
        true
    }

    /// Flip between polling and stopped, returning the new state
    pub fn toggle(&mut self, msg_tx: mpsc::Sender<Message>) -> bool {
        if self.is_polling() {
            self.stop();
        } else {
            self.start(msg_tx);
        }
        self.is_polling()
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_timer(
    period: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if msg_tx.send(Message::RefreshSubmissions).await.is_err() {
                    debug!("Polling channel closed");
                    break;
                }
            }
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(2000);

    fn channel() -> (mpsc::Sender<Message>, mpsc::Receiver<Message>) {
        mpsc::channel(16)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (tx, mut rx) = channel();
        let mut poller = PollingController::new(PERIOD);
        poller.start(tx.clone());

        let early = tokio::time::timeout(Duration::from_millis(1999), rx.recv()).await;
        assert!(early.is_err(), "no refresh before the first period");

        let msg = tokio::time::timeout(Duration::from_millis(10), rx.recv())
            .await
            .expect("refresh at 2000ms");
        assert!(matches!(msg, Some(Message::RefreshSubmissions)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_repeat_every_period() {
        let (tx, mut rx) = channel();
        let mut poller = PollingController::new(PERIOD);
        poller.start(tx.clone());

        let start = Instant::now();
        for _ in 0..3 {
            rx.recv().await.unwrap();
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= PERIOD * 3 && elapsed < PERIOD * 3 + Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_twice_leaves_no_timer() {
        let (tx, mut rx) = channel();
        let mut poller = PollingController::new(PERIOD);

        assert!(poller.toggle(tx.clone()));
        assert_eq!(poller.active_timers(), 1);
        assert!(!poller.toggle(tx.clone()));
        assert_eq!(poller.active_timers(), 0);
        assert!(!poller.is_polling());

        let late = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(late.is_err(), "no tick after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_keeps_single_timer() {
        let (tx, mut rx) = channel();
        let mut poller = PollingController::new(PERIOD);
        poller.start(tx.clone());
        tokio::time::advance(Duration::from_millis(1500)).await;
        poller.start(tx.clone());
        assert_eq!(poller.active_timers(), 1);

        // The replacement timer restarts the period; the old one never fires
        let early = tokio::time::timeout(Duration::from_millis(1999), rx.recv()).await;
        assert!(early.is_err());
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_stop_when_idle_is_noop() {
        let mut poller = PollingController::new(PERIOD);
        assert!(!poller.stop());
        assert_eq!(poller.active_timers(), 0);
    }
}
