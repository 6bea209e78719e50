//! Clock readings and entry ID generation.
//!
//! IDs are clock readings in milliseconds rendered as decimal strings, the
//! same shape the widget has always persisted. The generator never hands out
//! a reading that is not strictly greater than the previous one, so two
//! submissions inside the same millisecond still get distinct IDs.

use crate::error::{Error, Result};
use crate::{EntryId, Timestamp};
use std::cell::Cell;

/// Source of wall-clock readings in milliseconds since the epoch.
pub trait TimeSource {
    fn now_millis(&self) -> Timestamp;
}

/// A clock that only moves when told to. Used by tests and replay tooling.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    /// Create a clock fixed at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    /// Set the clock to an arbitrary reading, including backwards.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }
}

impl TimeSource for ManualClock {
    fn now_millis(&self) -> Timestamp {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_millis(&self) -> Timestamp {
        (**self).now_millis()
    }
}

/// Monotonic entry ID generator.
///
/// Ordering rules:
/// 1. A fresh clock reading wins if it is past the last issued ID
/// 2. Otherwise the last issued ID plus one is used
#[derive(Debug)]
pub struct IdGenerator<C> {
    clock: C,
    last: Timestamp,
}

impl<C: TimeSource> IdGenerator<C> {
    /// Create a generator that has issued nothing yet.
    pub fn new(clock: C) -> Self {
        Self { clock, last: 0 }
    }

    /// Make sure every future ID is greater than `floor`.
    pub fn observe(&mut self, floor: Timestamp) {
        self.last = self.last.max(floor);
    }

    /// Issue the next ID.
    ///
    /// Fails once `u64::MAX` has been issued or observed; there is no larger
    /// ID left to hand out.
    pub fn next_id(&mut self) -> Result<EntryId> {
        let reading = self.clock.now_millis();
        self.last = if reading > self.last {
            reading
        } else {
            self.last.checked_add(1).ok_or(Error::IdsExhausted)?
        };
        Ok(self.last.to_string())
    }

    /// The last issued (or observed) value.
    pub fn last(&self) -> Timestamp {
        self.last
    }
}
