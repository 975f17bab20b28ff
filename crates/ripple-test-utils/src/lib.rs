//! Test utilities and mock laws for Ripple development.
//!
//! Provides mock [`RateLaw`](ripple_propagator::RateLaw) implementations that record how the
//! integrator drives them, plus seeded fixtures for building stamps and
//! initial conditions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{load_field, random_stamp, ConstantLaw, Observation, RecordingLaw};
