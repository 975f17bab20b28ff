//! Reference rate laws for Ripple simulations.
//!
//! [`WaveLaw`] integrates the 2D scalar wave equation on the torus. Drive
//! it through [`WaveEquation`], the integrator specialised to it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod wave_equation;

pub use wave_equation::{WaveEquation, WaveLaw, WaveLawBuilder};
