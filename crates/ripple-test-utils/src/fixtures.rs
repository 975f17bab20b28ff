//! Reusable law and field fixtures.
//!
//! - [`ConstantLaw`]: the same rate everywhere, no state.
//! - [`RecordingLaw`]: zero rate, records every context it is handed.
//! - [`random_stamp`]: seeded ChaCha8 noise in `[0, 1)`.
//! - [`load_field`]: copy an arbitrary `[0, 1]` pattern into an integrator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ripple_core::TickId;
use ripple_propagator::{Injection, LawContext, RateLaw, TimeIntegrator};
use ripple_space::Stamp;

/// Applies `rate` to every cell.
pub struct ConstantLaw {
    pub rate: f32,
}

impl ConstantLaw {
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }
}

impl RateLaw for ConstantLaw {
    fn name(&self) -> &str {
        "ConstantLaw"
    }

    fn rate(&self, _x: i32, _y: i32) -> f32 {
        self.rate
    }
}

/// One observed `update_rate` call.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub tick_id: TickId,
    pub dt: f32,
    pub current_sum: f32,
    pub previous_sum: f32,
}

/// Zero-rate law that records each context and every allocation.
#[derive(Default)]
pub struct RecordingLaw {
    pub observations: Vec<Observation>,
    pub allocations: Vec<(u32, u32)>,
}

impl RecordingLaw {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLaw for RecordingLaw {
    fn name(&self) -> &str {
        "RecordingLaw"
    }

    fn allocate(&mut self, width: u32, height: u32) {
        self.allocations.push((width, height));
    }

    fn update_rate(&mut self, ctx: &LawContext<'_>) {
        self.observations.push(Observation {
            tick_id: ctx.tick_id(),
            dt: ctx.dt(),
            current_sum: ctx.current().as_slice().iter().sum(),
            previous_sum: ctx.previous().as_slice().iter().sum(),
        });
    }

    fn rate(&self, _x: i32, _y: i32) -> f32 {
        0.0
    }
}

/// A `width * height` stamp of seeded uniform noise in `[0, 1)`.
pub fn random_stamp(seed: u64, width: u32, height: u32) -> Stamp {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..width as usize * height as usize)
        .map(|_| rng.random::<f32>())
        .collect();
    Stamp::new(width, height, values).expect("uniform samples lie in [0, 1)")
}

/// Overwrite the integrator's current field with `stamp * scale`.
///
/// The stamp must match the integrator's dimensions; it is placed so that
/// stamp cell `(x, y)` lands on field cell `(x, y)`.
pub fn load_field<L: RateLaw>(sim: &mut TimeIntegrator<L>, stamp: &Stamp, scale: f32) {
    assert_eq!(
        (stamp.width(), stamp.height()),
        (sim.width(), sim.height()),
        "stamp must cover the whole field"
    );
    let bound = scale.abs();
    let injection = Injection::new(scale, -bound, bound).expect("finite scale");
    let cx = (stamp.width() / 2) as i32;
    let cy = (stamp.height() / 2) as i32;
    sim.inject(stamp, cx, cy, &injection);
}
