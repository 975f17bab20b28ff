//! Error types for space construction.

use std::fmt;

/// Errors arising from building grids or stamps from caller data.
///
/// Addressing never fails; only construction from explicit buffers does.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// The buffer length does not match `width * height`.
    ShapeMismatch {
        /// Cell count implied by the dimensions.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },
    /// A stamp must have at least one cell.
    EmptyStamp,
    /// A stamp value is NaN or outside `[0, 1]`.
    ValueOutOfRange {
        /// Row-major index of the offending value.
        index: usize,
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "buffer has {got} cells, dimensions require {expected}")
            }
            Self::EmptyStamp => write!(f, "stamp must have at least one cell"),
            Self::ValueOutOfRange { index, value } => {
                write!(f, "stamp value {value} at index {index} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
