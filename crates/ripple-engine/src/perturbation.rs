//! Perturbation events submitted with a step.

use ripple_core::StampId;
use smallvec::SmallVec;

/// Drop a registered stamp centred on `(x, y)` in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Perturbation {
    /// Which stamp to deposit.
    pub stamp: StampId,
    /// Centre column; wraps.
    pub x: i32,
    /// Centre row; wraps.
    pub y: i32,
}

impl Perturbation {
    /// A perturbation of `stamp` centred on `(x, y)`.
    pub fn new(stamp: StampId, x: i32, y: i32) -> Self {
        Self { stamp, x, y }
    }
}

/// The perturbations applied in one step.
///
/// Interactive drivers submit at most a handful per step, so small batches
/// stay inline.
pub type PerturbationBatch = SmallVec<[Perturbation; 4]>;
