//! Lockstep driver for Ripple simulations.
//!
//! Wraps a [`TimeIntegrator`](ripple_propagator::TimeIntegrator) with the
//! pieces an interactive or headless driver needs: a validated
//! [`SimConfig`], a [`StampLibrary`] of named perturbation patterns,
//! [`Frame`] views for presentation, a [`FixedTicker`] for pacing, and
//! per-step [`StepMetrics`].
//!
//! ```text
//! driver loop ── FixedTicker::poll ──> Simulation::step_sync(perturbations)
//!                                        │ inject stamps into current
//!                                        │ law.update_rate, integrate, rotate
//!                                        └─> StepResult { frame, metrics }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod lockstep;
pub mod metrics;
pub mod pacing;
pub mod perturbation;
pub mod stamps;
pub mod view;

pub use config::{ConfigError, SimConfig, StabilityPolicy};
pub use hash::{field_hash, state_hash};
pub use lockstep::{Simulation, StepResult};
pub use metrics::{RunStats, StepMetrics};
pub use pacing::FixedTicker;
pub use perturbation::{Perturbation, PerturbationBatch};
pub use stamps::StampLibrary;
pub use view::{Frame, Sample, ViewMode};
