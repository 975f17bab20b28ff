//! Second-order scalar wave equation, `∂²u/∂t² = c² ∇²u`.
//!
//! Produces propagating wavefronts and interference patterns that wrap
//! around the torus. Keeps one persistent velocity field next to the
//! integrator's rotating height buffers.
//!
//! Uses semi-implicit (symplectic) Euler integration:
//! ```text
//! laplacian[i]  = dxx[i] + dyy[i]                  (five-point stencil)
//! acceleration  = celerity² * laplacian[i] - damping * velocity[i]
//! velocity[i]  += acceleration * dt                (in update_rate)
//! height'[i]    = height[i] + velocity[i] * dt     (in the integrator)
//! ```
//!
//! The damping term is skipped entirely when damping is zero, so the
//! undamped update is exactly `velocity += c² (dxx + dyy) dt`.
//!
//! Constructed via the builder pattern: [`WaveLaw::builder`].

use ripple_propagator::{LawContext, RateLaw, TimeIntegrator};
use ripple_space::ToroidalGrid;

/// An integrator driven by [`WaveLaw`].
///
/// Height, slope and divergence come from the integrator
/// ([`TimeIntegrator::height_at`], [`TimeIntegrator::slope`],
/// [`TimeIntegrator::divergence`]); velocity from
/// [`WaveLaw::velocity`] via [`TimeIntegrator::law`].
pub type WaveEquation = TimeIntegrator<WaveLaw>;

/// The discrete 2D wave equation as a [`RateLaw`].
///
/// # Stability
///
/// With unit grid spacing the scheme stays bounded while
/// `dt ≤ 1 / sqrt(2 c²)`. At the fixed step of 0.5 this is `c² ≤ 2`,
/// i.e. `c² * dt ≤ 1`. Nothing checks this at runtime: beyond the bound
/// velocity and height grow without limit.
#[derive(Clone, Debug)]
pub struct WaveLaw {
    celerity_sq: f32,
    damping: f32,
    velocity: ToroidalGrid<f32>,
}

/// Builder for [`WaveLaw`].
pub struct WaveLawBuilder {
    celerity_sq: f32,
    damping: f32,
}

impl WaveLaw {
    /// Create a new builder for configuring a `WaveLaw`.
    pub fn builder() -> WaveLawBuilder {
        WaveLawBuilder {
            celerity_sq: 1.0,
            damping: 0.0,
        }
    }

    /// Build an undamped wave law.
    ///
    /// Shorthand for `WaveLaw::builder().celerity_sq(c2).build()`.
    pub fn new(celerity_sq: f32) -> Result<Self, String> {
        Self::builder().celerity_sq(celerity_sq).build()
    }

    /// Wrap this law in a `width * height` integrator.
    pub fn into_integrator(self, width: u32, height: u32) -> WaveEquation {
        TimeIntegrator::new(width, height, self)
    }

    /// Squared propagation speed in grid cells per unit time.
    pub fn celerity_sq(&self) -> f32 {
        self.celerity_sq
    }

    /// Linear velocity damping coefficient.
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Accumulated velocity at `(x, y)`.
    pub fn velocity(&self, x: i32, y: i32) -> f32 {
        self.velocity.get(x, y)
    }

    /// The whole velocity field.
    pub fn velocity_field(&self) -> &ToroidalGrid<f32> {
        &self.velocity
    }
}

impl WaveLawBuilder {
    /// Set the squared wave speed (default: 1.0). Must be finite and >= 0.
    pub fn celerity_sq(mut self, celerity_sq: f32) -> Self {
        self.celerity_sq = celerity_sq;
        self
    }

    /// Set the damping coefficient (default: 0.0). Must be finite and >= 0.
    pub fn damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Build the law, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `celerity_sq` is negative, infinite or NaN
    /// - `damping` is negative, infinite or NaN
    pub fn build(self) -> Result<WaveLaw, String> {
        if !(self.celerity_sq >= 0.0 && self.celerity_sq.is_finite()) {
            return Err(format!(
                "celerity_sq must be finite and >= 0, got {}",
                self.celerity_sq
            ));
        }
        if !(self.damping >= 0.0 && self.damping.is_finite()) {
            return Err(format!(
                "damping must be finite and >= 0, got {}",
                self.damping
            ));
        }
        Ok(WaveLaw {
            celerity_sq: self.celerity_sq,
            damping: self.damping,
            velocity: ToroidalGrid::new(1, 1),
        })
    }
}

impl RateLaw for WaveLaw {
    fn name(&self) -> &str {
        "WaveLaw"
    }

    fn allocate(&mut self, width: u32, height: u32) {
        self.velocity = ToroidalGrid::new(width, height);
    }

    fn update_rate(&mut self, ctx: &LawContext<'_>) {
        let current = ctx.current();
        let dt = ctx.dt();
        let width = current.width() as i32;
        let height = current.height() as i32;

        for y in 0..height {
            for x in 0..width {
                let mut accel = self.celerity_sq * (current.dxx(x, y) + current.dyy(x, y));
                if self.damping > 0.0 {
                    accel -= self.damping * self.velocity.get(x, y);
                }
                *self.velocity.get_mut(x, y) += accel * dt;
            }
        }
    }

    fn rate(&self, x: i32, y: i32) -> f32 {
        self.velocity.get(x, y)
    }

    fn max_dt(&self) -> Option<f32> {
        // dt <= 1 / sqrt(2 c²): the five-point Laplacian has spectral
        // radius 8, and symplectic Euler needs (omega dt)² <= 4.
        if self.celerity_sq > 0.0 {
            Some(1.0 / (2.0 * self.celerity_sq).sqrt())
        } else {
            None
        }
    }

    fn auxiliary(&self) -> &[f32] {
        self.velocity.as_slice()
    }
}
