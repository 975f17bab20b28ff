//! Depositing stamps into the current field.

use crate::integrator::TimeIntegrator;
use crate::law::RateLaw;
use ripple_space::{ScalarField, Stamp};

/// How a stamp is written into a field.
///
/// Each stamp value is scaled by `damping` and clamped to `[min, max]`
/// before it overwrites the target cell. The clamp is the only place the
/// core bounds field values; integration itself never clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Injection {
    damping: f32,
    min: f32,
    max: f32,
}

impl Injection {
    /// Default stamp scale.
    pub const DEFAULT_DAMPING: f32 = 0.33;

    /// Build an injection policy.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `damping`, `min` or `max` is not finite, or if
    /// `min > max`.
    pub fn new(damping: f32, min: f32, max: f32) -> Result<Self, String> {
        if !damping.is_finite() {
            return Err(format!("damping must be finite, got {damping}"));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(format!(
                "clamp range must be finite, got [{min}, {max}]"
            ));
        }
        if min > max {
            return Err(format!("clamp range is empty: min {min} > max {max}"));
        }
        Ok(Self { damping, min, max })
    }

    /// Scale applied to stamp values.
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Inclusive clamp range `(min, max)`.
    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Write `stamp` into `field`, centred on `(cx, cy)`.
    ///
    /// Stamp cell `(sx, sy)` lands on
    /// `(cx - width / 2 + sx, cy - height / 2 + sy)`, wrapped onto the
    /// torus. Cells are visited row-major, so where a stamp larger than the
    /// field overlaps itself the last write wins.
    pub fn apply(&self, field: &mut ScalarField, stamp: &Stamp, cx: i32, cy: i32) {
        let sw = stamp.width() as i32;
        let sh = stamp.height() as i32;
        let ox = i64::from(cx) - i64::from(sw / 2);
        let oy = i64::from(cy) - i64::from(sh / 2);
        let fw = i64::from(field.width());
        let fh = i64::from(field.height());

        for sy in 0..sh {
            let ty = (oy + i64::from(sy)).rem_euclid(fh) as i32;
            for sx in 0..sw {
                let tx = (ox + i64::from(sx)).rem_euclid(fw) as i32;
                let value = (stamp.get(sx, sy) * self.damping).clamp(self.min, self.max);
                field.set(tx, ty, value);
            }
        }
    }
}

impl Default for Injection {
    fn default() -> Self {
        Self {
            damping: Self::DEFAULT_DAMPING,
            min: -1.0,
            max: 1.0,
        }
    }
}

impl<L: RateLaw> TimeIntegrator<L> {
    /// Deposit `stamp` into the current field, centred on `(cx, cy)`.
    ///
    /// The written cells take part in the next step exactly like values
    /// produced by integration.
    pub fn inject(&mut self, stamp: &Stamp, cx: i32, cy: i32, injection: &Injection) {
        injection.apply(self.current_mut(), stamp, cx, cy);
    }
}
