//! Error types for the Quine-McCluskey minimizer
//!
//! Each module reports its own error type. This module provides [`Error`],
//! which unifies them for callers that read text, minimize and write results
//! in one go (such as the `qmc` binary).

use crate::minimizer::MinimizeError;
use crate::notation::NotationError;
use crate::term::SizeMismatchError;
use std::fmt;
use std::io;

/// The main error type for the minimizer crate
#[derive(Debug)]
pub enum Error {
    /// The function text could not be read or validated
    Notation(NotationError),

    /// A minimization stage failed
    Minimize(MinimizeError),

    /// IO error wrapper
    ///
    /// Wraps standard IO errors that occur while reading input or writing output.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Notation(e) => write!(f, "{}", e),
            Error::Minimize(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Notation(e) => Some(e),
            Error::Minimize(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<NotationError> for Error {
    fn from(err: NotationError) -> Self {
        Error::Notation(err)
    }
}

impl From<MinimizeError> for Error {
    fn from(err: MinimizeError) -> Self {
        Error::Minimize(err)
    }
}

impl From<SizeMismatchError> for Error {
    fn from(err: SizeMismatchError) -> Self {
        Error::Minimize(MinimizeError::SizeMismatch(err))
    }
}

/// IO errors carrying one of this crate's errors are unwrapped back into it
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let is_ours = err
            .get_ref()
            .map_or(false, |inner| inner.is::<NotationError>() || inner.is::<MinimizeError>());
        if !is_ours {
            return Error::Io(err);
        }
        match err.into_inner().map(|inner| inner.downcast::<NotationError>()) {
            Some(Ok(e)) => Error::Notation(*e),
            Some(Err(inner)) => match inner.downcast::<MinimizeError>() {
                Ok(e) => Error::Minimize(*e),
                Err(inner) => Error::Io(io::Error::new(io::ErrorKind::Other, inner)),
            },
            None => Error::Io(io::Error::new(io::ErrorKind::Other, "unknown error")),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Notation(e) => e.into(),
            Error::Minimize(e) => e.into(),
            Error::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::Notation(NotationError::Empty);
        assert_eq!(err.to_string(), "Expression is empty");

        let err = Error::Minimize(MinimizeError::TooManyVariables {
            requested: 30,
            max: 24,
        });
        assert!(err.to_string().contains("30 variables"));
    }

    #[test]
    fn test_error_source() {
        let err: Error = NotationError::Empty.into();
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error_unwraps_notation_error() {
        let io_err: io::Error = NotationError::Empty.into();
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Notation(NotationError::Empty)));
    }

    #[test]
    fn test_from_io_error_unwraps_minimize_error() {
        let io_err: io::Error = MinimizeError::TooManyPrimeImplicants { found: 9, max: 4 }.into();
        let err: Error = io_err.into();
        assert!(matches!(
            err,
            Error::Minimize(MinimizeError::TooManyPrimeImplicants { found: 9, max: 4 })
        ));
    }

    #[test]
    fn test_from_plain_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_into_io_error() {
        let err = Error::Notation(NotationError::Empty);
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
