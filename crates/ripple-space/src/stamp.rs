//! Disturbance patterns deposited into a field by injection.

use crate::error::SpaceError;
use crate::torus::{ToroidalGrid, MAX_DIM};

/// A rectangular pattern of normalised amplitudes in `[0, 1]`.
///
/// Stamps are the only input the core takes from the outside world:
/// a loaded droplet bitmap, a synthetic splash, or a single impulse.
/// Their dimensions are independent of the field they are injected into.
///
/// # Examples
///
/// ```
/// use ripple_space::Stamp;
///
/// let stamp = Stamp::from_luma8(2, 1, &[0, 255]).unwrap();
/// assert_eq!(stamp.get(0, 0), 0.0);
/// assert_eq!(stamp.get(1, 0), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    cells: ToroidalGrid<f32>,
}

impl Stamp {
    /// Build a stamp from row-major values.
    ///
    /// # Errors
    ///
    /// - [`SpaceError::EmptyStamp`] if either dimension is zero
    /// - [`SpaceError::ShapeMismatch`] if `values.len() != width * height`
    ///   (or a dimension exceeds [`MAX_DIM`])
    /// - [`SpaceError::ValueOutOfRange`] for NaN or values outside `[0, 1]`
    pub fn new(width: u32, height: u32, values: Vec<f32>) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyStamp);
        }
        if width > MAX_DIM || height > MAX_DIM {
            return Err(SpaceError::ShapeMismatch {
                expected: width as usize * height as usize,
                got: values.len(),
            });
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(SpaceError::ValueOutOfRange { index, value });
        }
        Ok(Self {
            cells: ToroidalGrid::from_vec(width, height, values)?,
        })
    }

    /// Build a stamp from 8-bit intensities, normalised by 255.
    pub fn from_luma8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, SpaceError> {
        let values = bytes.iter().map(|&b| f32::from(b) / 255.0).collect();
        Self::new(width, height, values)
    }

    /// A single-cell stamp.
    pub fn point(value: f32) -> Result<Self, SpaceError> {
        Self::new(1, 1, vec![value])
    }

    /// A `width * height` stamp with every cell set to `value`.
    pub fn uniform(width: u32, height: u32, value: f32) -> Result<Self, SpaceError> {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    /// Value at stamp cell `(sx, sy)`.
    ///
    /// Coordinates wrap like every other grid access in the workspace.
    pub fn get(&self, sx: i32, sy: i32) -> f32 {
        self.cells.get(sx, sy)
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[f32] {
        self.cells.as_slice()
    }
}
