//! Lockstep (synchronous) simulation.
//!
//! [`Simulation`] is the user-facing API. Each call to
//! [`step_sync()`](Simulation::step_sync) deposits the submitted
//! perturbations, advances the integrator one fixed step, and returns a
//! [`Frame`] of the result.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] but is driven through `&mut self`. The
//! [`StepResult`] returned by `step_sync()` borrows from the simulation, so
//! the caller cannot step again while still holding the frame.

use std::time::Instant;

use ripple_core::{StampId, StepError, TickId};
use ripple_propagator::{Injection, RateLaw, TimeIntegrator};
use ripple_space::Stamp;

use crate::config::{ConfigError, SimConfig};
use crate::hash::state_hash;
use crate::metrics::{RunStats, StepMetrics};
use crate::perturbation::{Perturbation, PerturbationBatch};
use crate::stamps::StampLibrary;
use crate::view::Frame;

// Compile-time assertion: a Simulation can move to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation<ripple_propagator::ZeroLaw>>();
        assert_send::<Simulation<Box<dyn RateLaw>>>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`Simulation::step_sync()`] call.
pub struct StepResult<'s> {
    /// The current field after this step.
    pub frame: Frame<'s>,
    /// Timing for this step.
    pub metrics: StepMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// A single-threaded field simulation driven one step at a time.
///
/// # Example
///
/// ```
/// use ripple_engine::{Perturbation, SimConfig, Simulation};
/// use ripple_propagator::ZeroLaw;
/// use ripple_space::Stamp;
///
/// let mut sim = Simulation::new(SimConfig::new(16, 16, ZeroLaw)).unwrap();
/// let drop = sim.add_stamp("drop", Stamp::point(1.0).unwrap());
///
/// let result = sim.step_sync([Perturbation::new(drop, 8, 8)]).unwrap();
/// assert_eq!(result.frame.height_at(8, 8), 0.33);
/// assert_eq!(result.metrics.perturbations, 1);
/// ```
pub struct Simulation<L: RateLaw> {
    integrator: TimeIntegrator<L>,
    stamps: StampLibrary,
    injection: Injection,
    tick_period_ms: u64,
    last_metrics: StepMetrics,
    stats: RunStats,
}

impl<L: RateLaw> Simulation<L> {
    /// Build a simulation from a validated [`SimConfig`].
    ///
    /// Under [`StabilityPolicy::Trust`](crate::StabilityPolicy::Trust) an
    /// unstable law is accepted with a warning.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`SimConfig::validate`].
    pub fn new(config: SimConfig<L>) -> Result<Self, ConfigError> {
        config.validate()?;
        if let Some(max_dt) = config.exceeded_bound() {
            tracing::warn!(
                law = config.law.name(),
                dt = ripple_core::DT,
                max_dt,
                "fixed step exceeds the law's stability bound; the field will grow without limit"
            );
        }

        let SimConfig {
            width,
            height,
            law,
            injection,
            tick_period_ms,
            ..
        } = config;
        let integrator = TimeIntegrator::new(width, height, law);
        tracing::info!(
            law = integrator.law().name(),
            width = integrator.width(),
            height = integrator.height(),
            "simulation created"
        );

        Ok(Self {
            integrator,
            stamps: StampLibrary::new(),
            injection,
            tick_period_ms,
            last_metrics: StepMetrics::default(),
            stats: RunStats::default(),
        })
    }

    /// Register a stamp for use in perturbations.
    pub fn add_stamp(&mut self, name: impl Into<String>, stamp: Stamp) -> StampId {
        self.stamps.insert(name, stamp)
    }

    /// The registered stamps.
    pub fn stamps(&self) -> &StampLibrary {
        &self.stamps
    }

    /// Deposit the perturbations, then advance one step.
    ///
    /// Every perturbation is resolved before any is applied, so an unknown
    /// stamp leaves the field and the tick untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnknownStamp`] for the first perturbation whose
    /// stamp is not registered.
    pub fn step_sync<I>(&mut self, perturbations: I) -> Result<StepResult<'_>, StepError>
    where
        I: IntoIterator<Item = Perturbation>,
    {
        let batch: PerturbationBatch = perturbations.into_iter().collect();
        if let Some(p) = batch.iter().find(|p| !self.stamps.contains(p.stamp)) {
            return Err(StepError::UnknownStamp { id: p.stamp });
        }

        let start = Instant::now();
        for p in &batch {
            if let Some(stamp) = self.stamps.get(p.stamp) {
                self.integrator.inject(stamp, p.x, p.y, &self.injection);
                tracing::debug!(stamp = %p.stamp, x = p.x, y = p.y, "perturbation applied");
            }
        }
        let injected = Instant::now();

        self.integrator.step();
        let done = Instant::now();

        let metrics = StepMetrics {
            total_us: done.duration_since(start).as_micros() as u64,
            injection_us: injected.duration_since(start).as_micros() as u64,
            integration_us: done.duration_since(injected).as_micros() as u64,
            perturbations: batch.len() as u32,
        };
        self.stats.record(&metrics);
        self.last_metrics = metrics.clone();

        Ok(StepResult {
            frame: self.frame(),
            metrics,
        })
    }

    /// Reallocate every buffer at a new size.
    ///
    /// Heights, law state, tick counter and statistics reset; registered
    /// stamps are kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.integrator.resize(width, height);
        self.last_metrics = StepMetrics::default();
        self.stats = RunStats::default();
        tracing::info!(
            width = self.integrator.width(),
            height = self.integrator.height(),
            "simulation resized"
        );
    }

    /// The current field.
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(self.integrator.current(), self.integrator.tick())
    }

    /// Completed steps since construction or the last resize.
    pub fn tick(&self) -> TickId {
        self.integrator.tick()
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.integrator.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.integrator.height()
    }

    /// The underlying integrator.
    pub fn integrator(&self) -> &TimeIntegrator<L> {
        &self.integrator
    }

    /// The law being integrated.
    pub fn law(&self) -> &L {
        self.integrator.law()
    }

    /// How stamps are written into the field.
    pub fn injection(&self) -> &Injection {
        &self.injection
    }

    /// Configured driver tick period.
    pub fn tick_period_ms(&self) -> u64 {
        self.tick_period_ms
    }

    /// Hash of the current field and the law's auxiliary state.
    pub fn state_hash(&self) -> u64 {
        state_hash(self.integrator.current(), self.integrator.law().auxiliary())
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Totals since construction or the last resize.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}

impl<L: RateLaw> std::fmt::Debug for Simulation<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("law", &self.integrator.law().name())
            .field("width", &self.integrator.width())
            .field("height", &self.integrator.height())
            .field("tick", &self.integrator.tick())
            .field("stamps", &self.stamps.len())
            .finish()
    }
}
