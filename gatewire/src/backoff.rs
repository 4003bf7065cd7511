//! Exponential reconnect delay.

#[cfg(test)]
#[path = "backoff_test.rs"]
mod backoff_test;

use std::time::Duration;

pub const DEFAULT_INITIAL_MS: u64 = 250;
pub const DEFAULT_CEILING_MS: u64 = 10_000;

/// Doubling delay with a ceiling and no retry cap.
///
/// Attempt `i` (1-based) waits `min(initial * 2^(i-1), ceiling)`. The
/// sequence restarts from attempt 1 after [`Backoff::reset`], which callers
/// invoke whenever a socket reaches the open state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backoff {
    initial: Duration,
    ceiling: Duration,
    attempts: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_INITIAL_MS),
            Duration::from_millis(DEFAULT_CEILING_MS),
        )
    }
}

impl Backoff {
    #[must_use]
    pub fn new(initial: Duration, ceiling: Duration) -> Self {
        Self { initial, ceiling: ceiling.max(initial), attempts: 0 }
    }

    /// Delay before the 1-based attempt `attempt`. Attempt 0 is treated as 1.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let factor = 1_u32 << exponent;
        self.initial.saturating_mul(factor).min(self.ceiling)
    }

    /// Delay for the next attempt; advances the attempt counter.
    pub fn next_delay(&mut self) -> Duration {
        self.attempts = self.attempts.saturating_add(1);
        self.delay_for_attempt(self.attempts)
    }

    pub fn reset(&mut self) {
        self.attempts = 0;
    }

    /// Consecutive attempts since the last reset.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
