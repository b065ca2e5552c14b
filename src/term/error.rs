//! Error types for term operations

use std::fmt;
use std::io;

/// Two operands were declared over different variable counts
///
/// Raised whenever two terms, or a term and an assignment, of different widths
/// are compared, merged or evaluated together. This always indicates caller
/// misuse (functions over different variable counts were mixed) and is never
/// recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatchError {
    /// The width of the receiving operand
    pub expected: usize,
    /// The width of the other operand
    pub found: usize,
}

impl SizeMismatchError {
    /// Return `Ok(())` when both widths agree
    pub(crate) fn check(expected: usize, found: usize) -> Result<(), SizeMismatchError> {
        if expected == found {
            Ok(())
        } else {
            Err(SizeMismatchError { expected, found })
        }
    }
}

impl fmt::Display for SizeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operand size mismatch: expected {} variables, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for SizeMismatchError {}

impl From<SizeMismatchError> for io::Error {
    fn from(err: SizeMismatchError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Reasons two terms could not be merged into one implicant
///
/// Returned by [`Term::merge`](super::Term::merge). [`MergeError::Incompatible`]
/// is the ordinary outcome for most pairs tried during combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeError {
    /// The terms have different widths
    SizeMismatch(SizeMismatchError),
    /// The terms do not differ in exactly one complementary bit
    Incompatible {
        /// Number of positions whose values differ
        differing: usize,
    },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::SizeMismatch(e) => write!(f, "{}", e),
            MergeError::Incompatible { differing } => write!(
                f,
                "Terms cannot be combined: {} differing positions, need exactly one true/false pair",
                differing
            ),
        }
    }
}

impl std::error::Error for MergeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MergeError::SizeMismatch(e) => Some(e),
            MergeError::Incompatible { .. } => None,
        }
    }
}

impl From<SizeMismatchError> for MergeError {
    fn from(err: SizeMismatchError) -> Self {
        MergeError::SizeMismatch(err)
    }
}

impl From<MergeError> for io::Error {
    fn from(err: MergeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
