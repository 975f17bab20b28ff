//! Read-only step context handed to a [`RateLaw`](crate::RateLaw).

use ripple_core::TickId;
use ripple_space::ScalarField;

/// What a law may observe while a step is in progress.
///
/// Both fields are frozen for the whole of `update_rate`: the integrator
/// writes the next state only after the law has finished.
pub struct LawContext<'a> {
    current: &'a ScalarField,
    previous: &'a ScalarField,
    dt: f32,
    tick_id: TickId,
}

impl<'a> LawContext<'a> {
    /// Assemble a context. Called by the integrator once per step.
    pub fn new(
        current: &'a ScalarField,
        previous: &'a ScalarField,
        dt: f32,
        tick_id: TickId,
    ) -> Self {
        Self {
            current,
            previous,
            dt,
            tick_id,
        }
    }

    /// The state being advanced.
    pub fn current(&self) -> &'a ScalarField {
        self.current
    }

    /// The state one step before `current`.
    ///
    /// Before the first step this is the zero-filled initial buffer.
    pub fn previous(&self) -> &'a ScalarField {
        self.previous
    }

    /// Step size.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Number of steps completed before this one.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }
}
