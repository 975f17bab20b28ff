//! Core types for the Ripple field simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fixed integration step, the strongly-typed identifiers shared between
//! the integrator and the engine, and the step-level error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::StepError;
pub use id::{StampId, TickId};

/// Fixed time step shared by every integrator.
///
/// With unit grid spacing the wave scheme stays bounded at this step for
/// `celerity² * DT ≤ 1`.
pub const DT: f32 = 0.5;
