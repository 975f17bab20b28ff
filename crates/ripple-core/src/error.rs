//! Error types for stepping a simulation.

use crate::id::StampId;
use std::error::Error;
use std::fmt;

/// Errors from a simulation step.
///
/// Integration itself is total; the only failures come from the
/// perturbations submitted alongside a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A perturbation referenced a stamp that was never registered.
    UnknownStamp {
        /// The unresolved stamp.
        id: StampId,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStamp { id } => write!(f, "unknown stamp {id}"),
        }
    }
}

impl Error for StepError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stamp_message_names_id() {
        let err = StepError::UnknownStamp { id: StampId(5) };
        assert_eq!(err.to_string(), "unknown stamp 5");
    }
}
