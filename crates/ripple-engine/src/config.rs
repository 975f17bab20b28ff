//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks the invariants that can be
//! decided before any cell is allocated.

use std::error::Error;
use std::fmt;

use ripple_core::DT;
use ripple_propagator::{Injection, RateLaw};

// ── StabilityPolicy ────────────────────────────────────────────────

/// What to do when the law's stability bound is below the fixed step.
///
/// Explicit schemes blow up past their bound; the integrator never checks
/// this itself, so the policy lives here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StabilityPolicy {
    /// Accept the configuration and log a warning. Default.
    #[default]
    Trust,
    /// Refuse to build the simulation.
    Reject,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a [`SimConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Injection damping or clamp range is invalid.
    InvalidInjection {
        /// Description of the rejected parameter.
        reason: String,
    },
    /// The driver tick period is zero.
    InvalidTickPeriod,
    /// The fixed step exceeds the law's stability bound under
    /// [`StabilityPolicy::Reject`].
    Unstable {
        /// The fixed step.
        dt: f32,
        /// The law's bound.
        max_dt: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInjection { reason } => write!(f, "invalid injection: {reason}"),
            Self::InvalidTickPeriod => write!(f, "tick_period_ms must be at least 1"),
            Self::Unstable { dt, max_dt } => {
                write!(f, "dt {dt} exceeds the law's stability bound {max_dt}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything needed to construct a [`Simulation`](crate::Simulation).
///
/// Grid dimensions are clamped by the grid itself (zero becomes one), so
/// they are never a validation error.
#[derive(Clone, Debug)]
pub struct SimConfig<L> {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// The rate law to integrate.
    pub law: L,
    /// How perturbation stamps are written into the field.
    pub injection: Injection,
    /// Reaction to an unstable law. Default: [`StabilityPolicy::Trust`].
    pub stability: StabilityPolicy,
    /// Driver tick period in milliseconds. Default: 20.
    pub tick_period_ms: u64,
}

impl<L: RateLaw> SimConfig<L> {
    /// Default driver tick period: 20 ms, i.e. 50 steps per second.
    pub const DEFAULT_TICK_PERIOD_MS: u64 = 20;

    /// A configuration with default injection, stability and pacing.
    pub fn new(width: u32, height: u32, law: L) -> Self {
        Self {
            width,
            height,
            law,
            injection: Injection::default(),
            stability: StabilityPolicy::default(),
            tick_period_ms: Self::DEFAULT_TICK_PERIOD_MS,
        }
    }

    /// Replace the injection policy, validating its parameters.
    pub fn with_injection(mut self, damping: f32, min: f32, max: f32) -> Result<Self, ConfigError> {
        self.injection = Injection::new(damping, min, max)
            .map_err(|reason| ConfigError::InvalidInjection { reason })?;
        Ok(self)
    }

    /// Replace the stability policy.
    pub fn with_stability(mut self, stability: StabilityPolicy) -> Self {
        self.stability = stability;
        self
    }

    /// Replace the driver tick period.
    pub fn with_tick_period_ms(mut self, tick_period_ms: u64) -> Self {
        self.tick_period_ms = tick_period_ms;
        self
    }

    /// The law's bound when the fixed step [`DT`] exceeds it.
    pub fn exceeded_bound(&self) -> Option<f32> {
        self.law.max_dt().filter(|&max_dt| DT > max_dt)
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidTickPeriod`] if `tick_period_ms` is zero.
    /// - [`ConfigError::Unstable`] if the policy is
    ///   [`StabilityPolicy::Reject`] and [`DT`] exceeds the law's bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        if self.stability == StabilityPolicy::Reject {
            if let Some(max_dt) = self.exceeded_bound() {
                return Err(ConfigError::Unstable { dt: DT, max_dt });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_propagator::ZeroLaw;

    /// Reports a fixed stability bound.
    struct Bounded(f32);

    impl RateLaw for Bounded {
        fn name(&self) -> &str {
            "bounded"
        }

        fn rate(&self, _x: i32, _y: i32) -> f32 {
            0.0
        }

        fn max_dt(&self) -> Option<f32> {
            Some(self.0)
        }
    }

    #[test]
    fn defaults() {
        let cfg = SimConfig::new(4, 4, ZeroLaw);
        assert_eq!(cfg.injection, Injection::default());
        assert_eq!(cfg.stability, StabilityPolicy::Trust);
        assert_eq!(cfg.tick_period_ms, 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_tick_period_rejected() {
        let cfg = SimConfig::new(4, 4, ZeroLaw).with_tick_period_ms(0);
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidTickPeriod));
    }

    #[test]
    fn bad_injection_rejected() {
        let err = SimConfig::new(4, 4, ZeroLaw)
            .with_injection(1.0, 1.0, -1.0)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInjection { .. }));
        assert!(err.to_string().starts_with("invalid injection"));
    }

    #[test]
    fn unstable_law_trusted_by_default() {
        let cfg = SimConfig::new(4, 4, Bounded(0.1));
        assert_eq!(cfg.exceeded_bound(), Some(0.1));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unstable_law_rejected_under_strict_policy() {
        let cfg = SimConfig::new(4, 4, Bounded(0.1)).with_stability(StabilityPolicy::Reject);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Unstable {
                dt: DT,
                max_dt: 0.1
            })
        );
    }

    #[test]
    fn bound_equal_to_dt_is_stable() {
        let cfg = SimConfig::new(4, 4, Bounded(DT)).with_stability(StabilityPolicy::Reject);
        assert_eq!(cfg.exceeded_bound(), None);
        assert!(cfg.validate().is_ok());
    }
}
