//! Transient notices and deferred work.
//!
//! Every notice is cleared by a timer scheduled when it is posted. Timers are
//! fire-and-forget, so an older timer can expire while a newer notice is on
//! screen. Each notice carries a [`NoticeToken`] and a timer only clears the
//! view when its token is still the latest one.

use crate::view::{NoticeKind, View};
use serde::{Deserialize, Serialize};

/// Generation number of one posted notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoticeToken(pub u64);

/// Work the controller wants run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeferredTask {
    ClearNotice { token: NoticeToken },
}

/// Deferred execution primitive. There is no cancellation handle.
///
/// Implementations must hand the task back to the controller through
/// `EntryController::run_deferred` once `delay_ms` has elapsed.
pub trait Scheduler {
    fn after(&mut self, delay_ms: u64, task: DeferredTask);
}

/// Tracks which notice is current.
#[derive(Debug, Clone)]
pub struct Notifier {
    delay_ms: u64,
    latest: NoticeToken,
    showing: bool,
}

impl Notifier {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            latest: NoticeToken(0),
            showing: false,
        }
    }

    /// Show `message` and schedule its removal.
    pub fn post<V: View, S: Scheduler>(
        &mut self,
        view: &mut V,
        scheduler: &mut S,
        message: &str,
        kind: NoticeKind,
    ) -> NoticeToken {
        self.latest = NoticeToken(self.latest.0 + 1);
        self.showing = true;
        view.notify(message, kind);
        scheduler.after(
            self.delay_ms,
            DeferredTask::ClearNotice {
                token: self.latest,
            },
        );
        self.latest
    }

    /// Handle an expired timer. Returns `true` if the view was cleared.
    pub fn expire<V: View>(&mut self, view: &mut V, token: NoticeToken) -> bool {
        if token != self.latest || !self.showing {
            tracing::trace!(token = token.0, latest = self.latest.0, "Ignoring stale notice timer");
            return false;
        }
        self.showing = false;
        view.clear_notice();
        true
    }

    /// Token of the most recent notice.
    pub fn latest(&self) -> NoticeToken {
        self.latest
    }

    /// Check if a notice is on screen.
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

/// Scheduler driven by an explicit virtual clock.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: u64,
    pending: Vec<(u64, DeferredTask)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward and return every task that became due,
    /// earliest first. Tasks due at the same instant keep scheduling order.
    pub fn advance(&mut self, millis: u64) -> Vec<DeferredTask> {
        self.now += millis;
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    /// Number of tasks not yet due.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Current virtual time.
    pub fn now(&self) -> u64 {
        self.now
    }
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay_ms: u64, task: DeferredTask) {
        self.pending.push((self.now + delay_ms, task));
    }
}
