use std::time::Duration;

/// Inactivity detector driven by input timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleTimer {
    timeout: Duration,
    last_input: Duration,
}

impl IdleTimer {
    /// Timer armed at `now`, as if input had just happened.
    pub fn new(timeout: Duration, now: Duration) -> Self {
        Self {
            timeout,
            last_input: now,
        }
    }

    /// Register pointer movement or scrolling at `now`.
    pub fn reset(&mut self, now: Duration) {
        self.last_input = self.last_input.max(now);
    }

    /// Return `true` once `timeout` has passed since the last input.
    pub fn is_idle(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_input) >= self.timeout
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
#[path = "../../tests/unit/title/idle.rs"]
mod tests;
