//! Scalar `f32` fields with central-difference operators.

use crate::torus::ToroidalGrid;
use std::ops::{Index, IndexMut};

/// A toroidal grid of `f32` amplitudes with derivative operators.
///
/// All operators use unit grid spacing and read neighbours through the
/// wrapping accessor, so cells on one edge see the opposite edge as their
/// neighbours. Operators are pure: they never mutate the field.
///
/// # Examples
///
/// ```
/// use ripple_space::ScalarField;
///
/// let mut f = ScalarField::new(8, 8);
/// f.set(4, 4, 1.0);
/// assert_eq!(f.dxx(4, 4), -2.0);
/// assert_eq!(f.dx(3, 4), 0.5);
/// assert_eq!(f.laplacian(4, 4), -4.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    grid: ToroidalGrid<f32>,
}

impl ScalarField {
    /// Create a zero-filled field. Zero dimensions clamp to one.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: ToroidalGrid::new(width, height),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.grid.cell_count()
    }

    /// Value at `(x, y)` after wrapping.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> f32 {
        self.grid.get(x, y)
    }

    /// Overwrite the value at `(x, y)` after wrapping.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: f32) {
        self.grid.set(x, y, value);
    }

    /// Mutable reference to the value at `(x, y)` after wrapping.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut f32 {
        self.grid.get_mut(x, y)
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, value: f32) {
        self.grid.fill(value);
    }

    /// Row-major view of all values.
    pub fn as_slice(&self) -> &[f32] {
        self.grid.as_slice()
    }

    /// Mutable row-major view of all values.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.grid.as_mut_slice()
    }

    /// The underlying grid.
    pub fn grid(&self) -> &ToroidalGrid<f32> {
        &self.grid
    }

    /// Central first difference in x: `(u[x+1] - u[x-1]) / 2`.
    #[inline]
    pub fn dx(&self, x: i32, y: i32) -> f32 {
        0.5 * (self.get(x + 1, y) - self.get(x - 1, y))
    }

    /// Central second difference in x: `u[x+1] + u[x-1] - 2u[x]`.
    #[inline]
    pub fn dxx(&self, x: i32, y: i32) -> f32 {
        self.get(x + 1, y) + self.get(x - 1, y) - 2.0 * self.get(x, y)
    }

    /// Central first difference in y.
    #[inline]
    pub fn dy(&self, x: i32, y: i32) -> f32 {
        0.5 * (self.get(x, y + 1) - self.get(x, y - 1))
    }

    /// Central second difference in y.
    #[inline]
    pub fn dyy(&self, x: i32, y: i32) -> f32 {
        self.get(x, y + 1) + self.get(x, y - 1) - 2.0 * self.get(x, y)
    }

    /// Five-point discrete Laplacian, `dxx + dyy`.
    #[inline]
    pub fn laplacian(&self, x: i32, y: i32) -> f32 {
        self.dxx(x, y) + self.dyy(x, y)
    }

    /// Gradient `(dx, dy)`.
    #[inline]
    pub fn gradient(&self, x: i32, y: i32) -> (f32, f32) {
        (self.dx(x, y), self.dy(x, y))
    }
}

impl From<ToroidalGrid<f32>> for ScalarField {
    fn from(grid: ToroidalGrid<f32>) -> Self {
        Self { grid }
    }
}

impl Index<(i32, i32)> for ScalarField {
    type Output = f32;

    fn index(&self, coord: (i32, i32)) -> &f32 {
        &self.grid[coord]
    }
}

impl IndexMut<(i32, i32)> for ScalarField {
    fn index_mut(&mut self, coord: (i32, i32)) -> &mut f32 {
        &mut self.grid[coord]
    }
}
