//! Role-rotating buffer storage for Ripple integrators.
//!
//! An explicit integrator reads the current state while writing the next
//! one, and some physical laws also look one step further back. Rather
//! than swapping pointers, [`TripleBuffer`] keeps three fixed slots in an
//! array and moves the *roles* between them: [`Roles`] holds one index per
//! role and rotates them once per step.
//!
//! Storage is allocated once at construction; stepping never allocates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod roles;
pub mod triple;

pub use roles::Roles;
pub use triple::{Stage, TripleBuffer};
