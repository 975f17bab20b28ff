//! Dense 2D storage with periodic (torus) addressing.

use crate::error::SpaceError;
use std::ops::{Index, IndexMut};

/// Largest accepted dimension: coordinates are `i32`, so each axis must fit.
pub const MAX_DIM: u32 = i32::MAX as u32;

/// Clamp a requested dimension into `[1, MAX_DIM]`.
fn clamp_dim(len: u32) -> u32 {
    len.clamp(1, MAX_DIM)
}

/// A fixed-size dense 2D array with wrap-around indexing.
///
/// Cell `(x, y)` is stored row-major at `y * width + x`. Every integer
/// coordinate maps onto a cell: `x = -1` addresses the same cell as
/// `x = width - 1`, and `x = width` the same cell as `x = 0`.
///
/// Dimensions are fixed at construction. A requested size of zero is
/// clamped up to one, so a grid is never empty.
///
/// # Examples
///
/// ```
/// use ripple_space::ToroidalGrid;
///
/// let mut grid = ToroidalGrid::<f32>::new(4, 3);
/// grid.set(-1, 0, 2.5);
/// assert_eq!(grid.get(3, 0), 2.5);
/// assert_eq!(grid.get(7, 3), 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ToroidalGrid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Copy + Default> ToroidalGrid<T> {
    /// Create a grid of `width * height` default-valued cells.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Copy> ToroidalGrid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        let width = clamp_dim(width);
        let height = clamp_dim(height);
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Read the cell at `(x, y)` after wrapping.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> T {
        self.data[self.index_of(x, y)]
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> ToroidalGrid<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// Dimensions are clamped exactly as in [`ToroidalGrid::new`]; the
    /// buffer length must match the clamped cell count.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self, SpaceError> {
        let width = clamp_dim(width);
        let height = clamp_dim(height);
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(SpaceError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`, never zero).
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Normalise `(x, y)` onto the torus.
    ///
    /// The result always satisfies `x' < width` and `y' < height`.
    #[inline]
    pub fn wrap(&self, x: i32, y: i32) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i32) as usize,
            y.rem_euclid(self.height as i32) as usize,
        )
    }

    /// Flat row-major index of the cell addressed by `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> usize {
        let (x, y) = self.wrap(x, y);
        y * self.width as usize + x
    }

    /// Mutable reference to the cell at `(x, y)` after wrapping.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut T {
        let i = self.index_of(x, y);
        &mut self.data[i]
    }

    /// Write `value` into the cell at `(x, y)` after wrapping.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        *self.get_mut(x, y) = value;
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of all cells.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(i32, i32)> for ToroidalGrid<T> {
    type Output = T;

    fn index(&self, (x, y): (i32, i32)) -> &T {
        &self.data[self.index_of(x, y)]
    }
}

impl<T> IndexMut<(i32, i32)> for ToroidalGrid<T> {
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut T {
        self.get_mut(x, y)
    }
}
