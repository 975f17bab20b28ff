//! Ripple: explicit finite-difference wave simulation on a toroidal grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Ripple sub-crates. For most users, adding `ripple` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let law = WaveLaw::new(0.1).unwrap();
//! let config = SimConfig::new(8, 8, law).with_injection(1.0, -1.0, 1.0).unwrap();
//! let mut sim = Simulation::new(config).unwrap();
//! let drop = sim.add_stamp("drop", Stamp::point(1.0).unwrap());
//!
//! let result = sim.step_sync([Perturbation::new(drop, 4, 4)]).unwrap();
//! assert_eq!(result.frame.tick(), TickId(1));
//! assert!(result.frame.height_at(4, 4) < 1.0);
//! assert!(result.frame.height_at(3, 4) > 0.0);
//! assert_eq!(result.frame.height_at(4, 6), 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Fixed step, IDs, step errors |
//! | [`space`] | `ripple-space` | Toroidal grids, scalar fields, stamps |
//! | [`arena`] | `ripple-arena` | Triple buffer and role rotation |
//! | [`propagator`] | `ripple-propagator` | Rate-law trait, integrator, injection |
//! | [`propagators`] | `ripple-propagators` | The wave law |
//! | [`engine`] | `ripple-engine` | Lockstep driver, views, pacing, hashing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core constants, IDs and errors (`ripple-core`).
pub use ripple_core as types;

/// Spatial storage (`ripple-space`).
///
/// [`space::ToroidalGrid`] wraps every coordinate;
/// [`space::ScalarField`] adds central differences.
pub use ripple_space as space;

/// Triple-buffered storage (`ripple-arena`).
pub use ripple_arena as arena;

/// Rate laws and the time integrator (`ripple-propagator`).
///
/// The [`propagator::RateLaw`] trait is the main extension point for
/// user-defined physics.
pub use ripple_propagator as propagator;

/// Reference rate laws (`ripple-propagators`).
pub use ripple_propagators as propagators;

/// Lockstep driver (`ripple-engine`).
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{StampId, StepError, TickId, DT};

    // Space
    pub use ripple_space::{ScalarField, SpaceError, Stamp, ToroidalGrid};

    // Propagator
    pub use ripple_propagator::{Injection, LawContext, RateLaw, TimeIntegrator, ZeroLaw};

    // Laws
    pub use ripple_propagators::{WaveEquation, WaveLaw};

    // Engine
    pub use ripple_engine::{
        ConfigError, FixedTicker, Frame, Perturbation, Sample, SimConfig, Simulation,
        StabilityPolicy, StepMetrics, StepResult, ViewMode,
    };
}
