//! Error types for minimization

use crate::term::SizeMismatchError;
use std::fmt;
use std::io;

/// Errors that abort a minimization stage
///
/// A failed stage leaves the [`Minimizer`](super::Minimizer) in the state it
/// had before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// Terms or assignments over different variable counts were mixed
    SizeMismatch(SizeMismatchError),
    /// The declared variable count exceeds the configured limit
    TooManyVariables {
        /// The declared variable count
        requested: usize,
        /// The configured maximum
        max: usize,
    },
    /// The cover search would run over more prime implicants than allowed
    TooManyPrimeImplicants {
        /// Number of prime implicants found
        found: usize,
        /// The configured maximum
        max: usize,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::SizeMismatch(e) => write!(f, "{}", e),
            MinimizeError::TooManyVariables { requested, max } => write!(
                f,
                "Function declares {} variables, at most {} are supported",
                requested, max
            ),
            MinimizeError::TooManyPrimeImplicants { found, max } => write!(
                f,
                "Cover search over {} prime implicants exceeds the limit of {}",
                found, max
            ),
        }
    }
}

impl std::error::Error for MinimizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizeError::SizeMismatch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SizeMismatchError> for MinimizeError {
    fn from(err: SizeMismatchError) -> Self {
        MinimizeError::SizeMismatch(err)
    }
}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
