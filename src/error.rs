//! Error types for dice, games and analysis.
//!
//! All errors are represented by the `DiceError` enum. Every error is
//! raised at the point of the invalid call and leaves the receiver
//! untouched.

use crate::face::Face;
use thiserror::Error;

/// Broad category of a [`DiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidState,
}

/// Errors that can occur while building dice, playing games or
/// analyzing results.
///
/// # Examples
///
/// ```rust
/// use montecarlo::{DiceError, Face};
///
/// let err = DiceError::NotFound(Face::from(7));
/// assert_eq!(err.to_string(), "Face not found on die: 7");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiceError {
    /// Malformed input: duplicate faces, mismatched face sets, a weight
    /// that is not a finite non-negative number, an unknown result form.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The referenced face is not one of the die's faces.
    #[error("Face not found on die: {0}")]
    NotFound(Face),

    /// The operation needs a prerequisite that has not happened yet,
    /// such as analyzing before playing or rolling a die whose weights
    /// are all zero.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl DiceError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidState(_) => ErrorKind::InvalidState,
        }
    }
}
