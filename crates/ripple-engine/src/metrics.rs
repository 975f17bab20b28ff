//! Per-step and cumulative timing.
//!
//! [`StepMetrics`] captures one step; [`RunStats`] folds every step since
//! construction or the last resize.

/// Timing collected during a single step.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step.
    pub total_us: u64,
    /// Time spent writing perturbation stamps.
    pub injection_us: u64,
    /// Time spent in the law and the integration pass.
    pub integration_us: u64,
    /// Number of perturbations applied this step.
    pub perturbations: u32,
}

/// Cumulative statistics over many steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Steps recorded.
    pub steps: u64,
    /// Sum of [`StepMetrics::total_us`].
    pub total_step_us: u64,
    /// Sum of [`StepMetrics::perturbations`].
    pub perturbations: u64,
}

impl RunStats {
    /// Fold one step into the totals.
    pub fn record(&mut self, metrics: &StepMetrics) {
        self.steps += 1;
        self.total_step_us = self.total_step_us.saturating_add(metrics.total_us);
        self.perturbations += u64::from(metrics.perturbations);
    }

    /// Mean step time in milliseconds, or `None` before the first step.
    pub fn mean_step_ms(&self) -> Option<f64> {
        if self.steps == 0 {
            return None;
        }
        Some(self.total_step_us as f64 / self.steps as f64 / 1000.0)
    }
}
