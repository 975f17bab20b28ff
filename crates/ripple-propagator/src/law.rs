//! The [`RateLaw`] trait and the [`ZeroLaw`] default.

use crate::context::LawContext;

/// The physical law an integrator advances.
///
/// # Contract
///
/// - [`update_rate`](RateLaw::update_rate) is called exactly once per step,
///   before any cell of the next state is written.
/// - [`rate`](RateLaw::rate) is then queried once per cell in row-major
///   order (y outer, x inner) and must be a pure read of the law's state.
/// - Both MUST be deterministic: same inputs produce bit-identical outputs.
///
/// Laws that keep auxiliary per-cell state (e.g. a velocity field) size it
/// in [`allocate`](RateLaw::allocate), which the integrator calls at
/// construction and on every resize.
///
/// # Object safety
///
/// This trait is object-safe; `Box<dyn RateLaw>` implements it too, so an
/// integrator can hold a law chosen at runtime.
///
/// # Examples
///
/// A law that grows every cell at a constant rate:
///
/// ```
/// use ripple_propagator::{RateLaw, TimeIntegrator};
///
/// struct Constant(f32);
///
/// impl RateLaw for Constant {
///     fn name(&self) -> &str { "constant" }
///     fn rate(&self, _x: i32, _y: i32) -> f32 { self.0 }
/// }
///
/// let mut sim = TimeIntegrator::new(4, 4, Constant(1.0));
/// sim.step();
/// assert_eq!(sim.value(2, 2), 0.5);
/// ```
pub trait RateLaw: Send + 'static {
    /// Human-readable name for logs and diagnostics.
    fn name(&self) -> &str;

    /// (Re)allocate auxiliary state for a `width * height` grid.
    ///
    /// Any existing state is discarded and zero-initialised.
    /// Default: no auxiliary state.
    fn allocate(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Advance internal state from the frozen fields in `ctx`.
    ///
    /// Default: stateless, nothing to do.
    fn update_rate(&mut self, ctx: &LawContext<'_>) {
        let _ = ctx;
    }

    /// Rate of change of the field at `(x, y)` for the step in progress.
    fn rate(&self, x: i32, y: i32) -> f32;

    /// Largest step for which the explicit scheme stays bounded.
    ///
    /// Advisory only: the integrator never checks it. Return `None` to
    /// impose no constraint.
    fn max_dt(&self) -> Option<f32> {
        None
    }

    /// Row-major auxiliary state, for hashing and inspection.
    fn auxiliary(&self) -> &[f32] {
        &[]
    }
}

/// The law under which nothing changes: rate zero everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroLaw;

impl RateLaw for ZeroLaw {
    fn name(&self) -> &str {
        "ZeroLaw"
    }

    fn rate(&self, _x: i32, _y: i32) -> f32 {
        0.0
    }
}

impl RateLaw for Box<dyn RateLaw> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn allocate(&mut self, width: u32, height: u32) {
        (**self).allocate(width, height);
    }

    fn update_rate(&mut self, ctx: &LawContext<'_>) {
        (**self).update_rate(ctx);
    }

    fn rate(&self, x: i32, y: i32) -> f32 {
        (**self).rate(x, y)
    }

    fn max_dt(&self) -> Option<f32> {
        (**self).max_dt()
    }

    fn auxiliary(&self) -> &[f32] {
        (**self).auxiliary()
    }
}
