//! Read-only views of the published field.
//!
//! A [`Frame`] borrows the current field after a step. Presentation layers
//! pick a [`ViewMode`] and pull [`Sample`]s; colour mapping is theirs.

use ripple_core::TickId;
use ripple_space::ScalarField;

/// Which quantity a presentation layer displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Surface height.
    #[default]
    Height,
    /// `dxx + dyy` of the height.
    Divergence,
    /// Slope `(dx, dy)` together with height.
    Gradient,
}

impl ViewMode {
    /// All modes in key order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Height, ViewMode::Divergence, ViewMode::Gradient];

    /// Map the digit keys `'1'`, `'2'`, `'3'` to a mode.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Height),
            '2' => Some(Self::Divergence),
            '3' => Some(Self::Gradient),
            _ => None,
        }
    }
}

/// One cell as seen under a [`ViewMode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// Surface height.
    Height(f32),
    /// Local divergence, `dxx + dyy`.
    Divergence(f32),
    /// Slope and height.
    Gradient {
        /// Central difference in x.
        dx: f32,
        /// Central difference in y.
        dy: f32,
        /// Surface height.
        height: f32,
    },
}

/// The current field of a simulation at a given tick.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    field: &'a ScalarField,
    tick: TickId,
}

impl<'a> Frame<'a> {
    /// Wrap a field published at `tick`.
    pub fn new(field: &'a ScalarField, tick: TickId) -> Self {
        Self { field, tick }
    }

    /// Number of completed steps when this frame was taken.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.field.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.field.height()
    }

    /// The underlying field.
    pub fn field(&self) -> &'a ScalarField {
        self.field
    }

    /// Surface height at `(x, y)`.
    pub fn height_at(&self, x: i32, y: i32) -> f32 {
        self.field.get(x, y)
    }

    /// Surface slope `(dx, dy)` at `(x, y)`.
    pub fn slope(&self, x: i32, y: i32) -> (f32, f32) {
        self.field.gradient(x, y)
    }

    /// Local divergence at `(x, y)`.
    pub fn divergence(&self, x: i32, y: i32) -> f32 {
        self.field.laplacian(x, y)
    }

    /// The quantity `mode` selects at `(x, y)`.
    pub fn sample(&self, mode: ViewMode, x: i32, y: i32) -> Sample {
        match mode {
            ViewMode::Height => Sample::Height(self.height_at(x, y)),
            ViewMode::Divergence => Sample::Divergence(self.divergence(x, y)),
            ViewMode::Gradient => {
                let (dx, dy) = self.slope(x, y);
                Sample::Gradient {
                    dx,
                    dy,
                    height: self.height_at(x, y),
                }
            }
        }
    }

    /// Every cell under `mode`, row-major.
    pub fn samples(&self, mode: ViewMode) -> impl Iterator<Item = Sample> + 'a {
        let frame = *self;
        let width = self.width() as i32;
        let height = self.height() as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| frame.sample(mode, x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump() -> ScalarField {
        let mut field = ScalarField::new(5, 5);
        field.set(2, 2, 1.0);
        field
    }

    #[test]
    fn keys_select_modes() {
        assert_eq!(ViewMode::from_key('1'), Some(ViewMode::Height));
        assert_eq!(ViewMode::from_key('2'), Some(ViewMode::Divergence));
        assert_eq!(ViewMode::from_key('3'), Some(ViewMode::Gradient));
        assert_eq!(ViewMode::from_key('4'), None);
        assert_eq!(ViewMode::default(), ViewMode::Height);
    }

    #[test]
    fn samples_per_mode() {
        let field = bump();
        let frame = Frame::new(&field, TickId(3));
        assert_eq!(frame.tick(), TickId(3));
        assert_eq!(frame.sample(ViewMode::Height, 2, 2), Sample::Height(1.0));
        assert_eq!(
            frame.sample(ViewMode::Divergence, 2, 2),
            Sample::Divergence(-4.0)
        );
        assert_eq!(
            frame.sample(ViewMode::Gradient, 1, 2),
            Sample::Gradient {
                dx: 0.5,
                dy: 0.0,
                height: 0.0
            }
        );
    }

    #[test]
    fn samples_wrap_like_the_field() {
        let field = bump();
        let frame = Frame::new(&field, TickId(0));
        assert_eq!(frame.height_at(7, -3), frame.height_at(2, 2));
    }

    #[test]
    fn samples_iterates_row_major() {
        let field = bump();
        let frame = Frame::new(&field, TickId(0));
        let heights: Vec<_> = frame.samples(ViewMode::Height).collect();
        assert_eq!(heights.len(), 25);
        assert_eq!(heights[2 * 5 + 2], Sample::Height(1.0));
        let divergence_sum: f32 = frame
            .samples(ViewMode::Divergence)
            .map(|s| match s {
                Sample::Divergence(v) => v,
                _ => unreachable!(),
            })
            .sum();
        assert_eq!(divergence_sum, 0.0);
    }
}
