//! Timer and clock adapters backed by tokio and chrono.

use shelf_engine::{DeferredTask, Scheduler, TimeSource, Timestamp};
use std::time::Duration;
use tokio::sync::mpsc;

/// Receiving end for tasks whose delay elapsed.
pub type DeferredReceiver = mpsc::UnboundedReceiver<DeferredTask>;

/// Runs each deferred task on its own sleeping tokio task, then hands it back
/// to the event loop over a channel.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    sender: mpsc::UnboundedSender<DeferredTask>,
}

impl TokioScheduler {
    pub fn new() -> (Self, DeferredReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Scheduler for TokioScheduler {
    fn after(&mut self, delay_ms: u64, task: DeferredTask) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            if sender.send(task).is_err() {
                tracing::trace!("Event loop gone, dropping deferred task");
            }
        });
    }
}

/// Wall clock in milliseconds since the epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_millis(&self) -> Timestamp {
        chrono::Utc::now().timestamp_millis().max(0) as Timestamp
    }
}
