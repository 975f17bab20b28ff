//! Triple-buffered explicit time integrator.

use crate::context::LawContext;
use crate::law::RateLaw;
use ripple_arena::{Roles, Stage, TripleBuffer};
use ripple_core::{TickId, DT};
use ripple_space::ScalarField;

/// Advances a scalar field on a torus by one fixed step at a time.
///
/// Each [`step`](TimeIntegrator::step):
///
/// 1. calls [`RateLaw::update_rate`] with the current and previous fields;
/// 2. writes `next(x, y) = current(x, y) + rate(x, y) * DT` for every cell,
///    row-major;
/// 3. rotates roles so `next` becomes `current`.
///
/// Only the current field is observable between steps. The law and the
/// integrator never clamp: keeping the configuration inside the law's
/// stability bound ([`RateLaw::max_dt`]) is the caller's responsibility,
/// and an unstable configuration grows without bound.
///
/// # Examples
///
/// ```
/// use ripple_propagator::{TimeIntegrator, ZeroLaw};
///
/// let mut sim = TimeIntegrator::new(16, 16, ZeroLaw);
/// sim.step();
/// assert_eq!(sim.tick().0, 1);
/// assert_eq!(sim.value(0, 0), 0.0);
/// ```
pub struct TimeIntegrator<L> {
    buffers: TripleBuffer<ScalarField>,
    law: L,
}

// Compile-time assertion: integrators can move to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<TimeIntegrator<crate::ZeroLaw>>();
        assert_send::<TimeIntegrator<Box<dyn RateLaw>>>();
    }
};

impl<L: RateLaw> TimeIntegrator<L> {
    /// Create a zero-filled integrator of `width * height` cells.
    ///
    /// Zero dimensions clamp to one. The law is asked to allocate its
    /// auxiliary state at the clamped size.
    pub fn new(width: u32, height: u32, mut law: L) -> Self {
        let buffers = TripleBuffer::from_fn(|_| ScalarField::new(width, height));
        law.allocate(buffers.current().width(), buffers.current().height());
        Self { buffers, law }
    }

    /// Advance one step of size [`DT`].
    pub fn step(&mut self) {
        let tick_id = self.tick();
        let Stage {
            current,
            previous,
            next,
        } = self.buffers.stage();

        let ctx = LawContext::new(current, previous, DT, tick_id);
        self.law.update_rate(&ctx);

        let width = current.width() as i32;
        let height = current.height() as i32;
        for y in 0..height {
            for x in 0..width {
                next.set(x, y, current.get(x, y) + self.law.rate(x, y) * DT);
            }
        }

        self.buffers.rotate();
    }

    /// Reallocate every buffer at a new size.
    ///
    /// All state is discarded: the three fields and the law's auxiliary
    /// state are zero-filled, roles return to their initial assignment and
    /// the tick counter restarts at zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.buffers
            .reset(std::array::from_fn(|_| ScalarField::new(width, height)));
        let current = self.buffers.current();
        self.law.allocate(current.width(), current.height());
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.buffers.current().width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.buffers.current().height()
    }

    /// Number of cells per field.
    pub fn cell_count(&self) -> usize {
        self.buffers.current().cell_count()
    }

    /// Number of completed steps.
    pub fn tick(&self) -> TickId {
        TickId(self.buffers.rotations())
    }

    /// Which physical buffer holds each role.
    pub fn roles(&self) -> Roles {
        self.buffers.roles()
    }

    /// The law being integrated.
    pub fn law(&self) -> &L {
        &self.law
    }

    /// The published field.
    pub fn current(&self) -> &ScalarField {
        self.buffers.current()
    }

    pub(crate) fn current_mut(&mut self) -> &mut ScalarField {
        self.buffers.current_mut()
    }

    /// Current value at `(x, y)`.
    pub fn value(&self, x: i32, y: i32) -> f32 {
        self.current().get(x, y)
    }

    /// Central first difference in x of the current field.
    pub fn dx(&self, x: i32, y: i32) -> f32 {
        self.current().dx(x, y)
    }

    /// Central second difference in x of the current field.
    pub fn dxx(&self, x: i32, y: i32) -> f32 {
        self.current().dxx(x, y)
    }

    /// Central first difference in y of the current field.
    pub fn dy(&self, x: i32, y: i32) -> f32 {
        self.current().dy(x, y)
    }

    /// Central second difference in y of the current field.
    pub fn dyy(&self, x: i32, y: i32) -> f32 {
        self.current().dyy(x, y)
    }

    /// Surface height: the current value.
    pub fn height_at(&self, x: i32, y: i32) -> f32 {
        self.value(x, y)
    }

    /// Surface slope `(dx, dy)`.
    pub fn slope(&self, x: i32, y: i32) -> (f32, f32) {
        self.current().gradient(x, y)
    }

    /// Local divergence of the slope, `dxx + dyy`.
    pub fn divergence(&self, x: i32, y: i32) -> f32 {
        self.current().laplacian(x, y)
    }
}
