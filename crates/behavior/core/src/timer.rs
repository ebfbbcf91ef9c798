//! Simulation-time countdown used for attack cadences and session expiry.

use std::time::Duration;

/// Restartable interval measured in simulation time.
///
/// A timer is in one of three observable states:
/// - **ticking**: armed and the interval has not been reached yet
/// - **elapsed**: armed and the interval has been reached; stays so until reset
/// - **idle**: not armed
///
/// The accumulator never grows past the interval, so partial ticks summing to
/// the interval elapse the timer exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CountdownTimer {
    interval: Duration,
    elapsed: Duration,
    armed: bool,
}

impl CountdownTimer {
    pub const fn new(interval: Duration, running: bool) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            armed: running,
        }
    }

    /// Zeroes the accumulator and arms (`running = true`) or stops the timer.
    pub fn reset(&mut self, running: bool) {
        self.elapsed = Duration::ZERO;
        self.armed = running;
    }

    /// Replaces the interval and resets.
    pub fn with_interval(&mut self, interval: Duration, running: bool) {
        self.interval = interval;
        self.reset(running);
    }

    /// Advances the accumulator by `delta` while ticking.
    pub fn update(&mut self, delta: Duration) {
        if !self.is_ticking() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(delta).min(self.interval);
    }

    pub fn has_elapsed(&self) -> bool {
        self.armed && self.elapsed >= self.interval
    }

    pub fn is_ticking(&self) -> bool {
        self.armed && self.elapsed < self.interval
    }

    pub fn is_idle(&self) -> bool {
        !self.armed
    }

    /// Time left before the timer elapses; zero when elapsed or idle.
    pub fn remaining(&self) -> Duration {
        if self.armed {
            self.interval.saturating_sub(self.elapsed)
        } else {
            Duration::ZERO
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
