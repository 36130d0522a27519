//! Pausable one-shot timer.
//!
//! Pausing records the elapsed portion and resuming continues with the
//! remaining duration; the timer never restarts from the full duration on
//! resume. Callers inject `Instant`s so the timer stays deterministic
//! under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct PausableTimer {
    remaining: Duration,
    /// Set while running; `None` while paused.
    started_at: Option<Instant>,
}

impl PausableTimer {
    /// Start a running timer for `duration`.
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            remaining: duration,
            started_at: Some(now),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.started_at.is_none()
    }

    /// Time left on the timer as of `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(start) => self.remaining.saturating_sub(now.duration_since(start)),
            None => self.remaining,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Pause the timer, banking the elapsed portion. No-op while paused.
    pub fn pause(&mut self, now: Instant) {
        if let Some(start) = self.started_at.take() {
            self.remaining = self.remaining.saturating_sub(now.duration_since(start));
        }
    }

    /// Resume with whatever was left when paused. No-op while running.
    pub fn resume(&mut self, now: Instant) {
        if self.started_at.is_none() && !self.remaining.is_zero() {
            self.started_at = Some(now);
        }
    }

    /// Rearm to a fresh full duration, running.
    pub fn restart(&mut self, duration: Duration, now: Instant) {
        self.remaining = duration;
        self.started_at = Some(now);
    }
}
