//! Rate-law trait and explicit time integrator for Ripple simulations.
//!
//! [`TimeIntegrator`] owns three scalar fields with rotating roles and
//! advances them by the fixed step [`DT`](ripple_core::DT). The physics is
//! supplied by a [`RateLaw`]: once per step the law sees the current and
//! previous fields, updates whatever internal state it keeps, and then
//! reports a per-cell rate of change that the integrator applies.
//!
//! Disturbances enter through [`Injection`], which writes a clamped
//! [`Stamp`](ripple_space::Stamp) straight into the current field.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod inject;
pub mod integrator;
pub mod law;

pub use context::LawContext;
pub use inject::Injection;
pub use integrator::TimeIntegrator;
pub use law::{RateLaw, ZeroLaw};
