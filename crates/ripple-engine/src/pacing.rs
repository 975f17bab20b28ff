//! Fixed-period pacing for the driver loop.

use crate::config::ConfigError;

/// Decides when a driver loop should step.
///
/// The caller supplies a millisecond clock. A tick is due once at least
/// one period has passed since the last tick; the last tick is then
/// snapped down to a period boundary, so a late poll does not push every
/// later tick back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTicker {
    period_ms: u64,
    last_ms: u64,
}

impl FixedTicker {
    /// Default period: 20 ms.
    pub const DEFAULT_PERIOD_MS: u64 = 20;

    /// A ticker whose first tick is due one period after `start_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTickPeriod`] if `period_ms` is zero.
    pub fn new(period_ms: u64, start_ms: u64) -> Result<Self, ConfigError> {
        if period_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        Ok(Self {
            period_ms,
            last_ms: start_ms,
        })
    }

    /// Period in milliseconds.
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Time of the last tick, aligned to a period boundary after the first.
    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }

    /// Whether a tick is due at `now_ms`; records it if so.
    ///
    /// A clock that goes backwards never produces a tick.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) >= self.period_ms {
            self.last_ms = (now_ms / self.period_ms) * self.period_ms;
            true
        } else {
            false
        }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self {
            period_ms: Self::DEFAULT_PERIOD_MS,
            last_ms: 0,
        }
    }
}
