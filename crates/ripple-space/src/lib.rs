//! Spatial storage for Ripple simulations.
//!
//! Everything here lives on a torus: every integer coordinate, including
//! negative and out-of-range ones, wraps onto a valid cell. There are no
//! boundary cells and no bounds errors.
//!
//! - [`ToroidalGrid`]: dense 2D storage with periodic addressing
//! - [`ScalarField`]: an `f32` grid with central-difference operators
//! - [`Stamp`]: a normalised pattern deposited into a field by injection

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod scalar;
pub mod stamp;
pub mod torus;

pub use error::SpaceError;
pub use scalar::ScalarField;
pub use stamp::Stamp;
pub use torus::{ToroidalGrid, MAX_DIM};
