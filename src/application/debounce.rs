//! Cancellable scheduled commits
//!
//! A [`Debouncer`] holds at most one pending value together with the instant
//! it becomes due. Scheduling a new value cancels the previous one, so only
//! the last value of a burst can ever fire, and only once the full quiet
//! window has passed since it was scheduled.
//!
//! Time never advances on its own here: the owner polls with the current
//! instant, which keeps the behaviour deterministic under a manual clock.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: DateTime<Utc>,
}

/// Single-slot debounce timer
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `value` to fire one window after `now`.
    ///
    /// A deadline past the representable range saturates at the last
    /// instant. Returns the value this schedule superseded, if one was
    /// pending.
    pub fn schedule(&mut self, value: T, now: DateTime<Utc>) -> Option<T> {
        let due = now
            .checked_add_signed(self.window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let previous = self.pending.replace(Pending { value, due });
        previous.map(|p| p.value)
    }

    /// Take the pending value if its quiet window has elapsed at `now`
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the pending value regardless of its deadline
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    pub fn due(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|p| p.due)
    }
}
