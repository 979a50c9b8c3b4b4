//! Idle tracking and the terminal sleep state
//!
//! Every externally observed interaction refreshes the idle window. Once
//! the window expires the device shuts down for good: the sleep state is
//! one-way for the remainder of the power-on session, and wake requires
//! an external hardware reset.

use embassy_time::{Duration, Instant};

/// Default idle timeout before deep sleep (5 minutes)
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(300_000);

pub struct PowerLifecycle {
    last_interaction: Instant,
    idle_timeout: Duration,
    asleep: bool,
}

impl PowerLifecycle {
    /// Create a lifecycle tracker
    ///
    /// A zero `idle_timeout` permanently disables the idle check.
    pub const fn new(idle_timeout: Duration, now: Instant) -> Self {
        Self {
            last_interaction: now,
            idle_timeout,
            asleep: false,
        }
    }

    /// Refresh the idle window
    pub fn record_activity(&mut self, now: Instant) {
        self.last_interaction = now;
    }

    /// Check whether the idle window has expired
    pub fn is_expired(&self, now: Instant) -> bool {
        if self.asleep || self.idle_timeout.as_millis() == 0 {
            return false;
        }
        now.duration_since(self.last_interaction) > self.idle_timeout
    }

    /// Enter the terminal sleep state
    pub fn mark_asleep(&mut self) {
        self.asleep = true;
    }

    pub const fn is_asleep(&self) -> bool {
        self.asleep
    }

    pub const fn last_interaction(&self) -> Instant {
        self.last_interaction
    }
}
