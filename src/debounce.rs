//! Debounce primitive for the search input.
//!
//! Suppresses intermediate values of a fast-changing input and emits only
//! after a quiet period. The event loop feeds every edit through
//! [`Debouncer::update`] and calls [`Debouncer::poll`] on each tick; the
//! value comes back once it has been stable for the configured delay.
//! A changed value restarts the wait, so only the most recent one survives.

use std::time::{Duration, Instant};

pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Record a new input value at `now`. Re-submitting the value already
    /// pending does not restart the wait.
    pub fn update(&mut self, value: T, now: Instant) {
        match &self.pending {
            Some((pending, _)) if *pending == value => {}
            _ => self.pending = Some((value, now)),
        }
    }

    /// Return the pending value if it has been stable for the delay.
    /// Emits each value at most once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, since)) if now.duration_since(*since) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Drop any pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
