//! Error types for the function notation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while reading `f(A,B,...) = ...` notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The input contained nothing but whitespace
    Empty,
    /// The input does not match the grammar
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Optional byte offset in the input where the error occurred
        position: Option<usize>,
    },
    /// A declared variable is not a single character
    InvalidVariable {
        /// The offending declaration
        name: Arc<str>,
    },
    /// The first declared variable is not the configured first character
    UnexpectedFirstVariable {
        /// The configured first variable
        expected: char,
        /// The variable actually declared first
        found: char,
    },
    /// Declared variables are not consecutive characters
    NotSequential {
        /// The variable before the gap
        previous: char,
        /// The variable that broke the sequence
        found: char,
    },
    /// A term uses a variable that was not declared
    UndeclaredVariable {
        /// The undeclared variable
        variable: char,
        /// Byte offset in the input
        position: usize,
    },
    /// A variable appears more than once in the same term
    RepeatedVariable {
        /// The repeated variable
        variable: char,
        /// Byte offset of the second occurrence
        position: usize,
    },
    /// A term is negated with a symbol other than the configured one
    WrongInverter {
        /// The configured negation symbol
        expected: char,
        /// The symbol found in the input
        found: char,
        /// Byte offset in the input
        position: usize,
    },
    /// The configured negation symbol is not one the grammar accepts
    UnsupportedInverter {
        /// The configured symbol
        inverter: char,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Expression is empty"),
            NotationError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse function at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(f, "Failed to parse function: {}. Input: {:?}", message, input)
                }
            }
            NotationError::InvalidVariable { name } => {
                write!(f, "Variable '{}' must be a single character", name)
            }
            NotationError::UnexpectedFirstVariable { expected, found } => write!(
                f,
                "Variables must start at '{}', found '{}'",
                expected, found
            ),
            NotationError::NotSequential { previous, found } => write!(
                f,
                "Declared variables are not sequential: '{}' follows '{}'",
                found, previous
            ),
            NotationError::UndeclaredVariable { variable, position } => write!(
                f,
                "Using undeclared variable '{}' at position {}",
                variable, position
            ),
            NotationError::RepeatedVariable { variable, position } => write!(
                f,
                "Variable '{}' repeated within a term at position {}",
                variable, position
            ),
            NotationError::WrongInverter {
                expected,
                found,
                position,
            } => write!(
                f,
                "Negation symbol '{}' at position {} does not match the configured '{}'",
                found, position, expected
            ),
            NotationError::UnsupportedInverter { inverter } => write!(
                f,
                "Unsupported negation symbol '{}', expected one of '^', '~', '!'",
                inverter
            ),
        }
    }
}

impl std::error::Error for NotationError {}

impl From<NotationError> for io::Error {
    fn from(err: NotationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_syntax_with_position() {
        let err = NotationError::InvalidSyntax {
            message: Arc::from("unexpected token"),
            input: Arc::from("f(A) = A +"),
            position: Some(10),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 10"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_invalid_syntax_without_position() {
        let err = NotationError::InvalidSyntax {
            message: Arc::from("unexpected end"),
            input: Arc::from("f(A"),
            position: None,
        };
        assert!(!err.to_string().contains("position"));
    }

    #[test]
    fn test_undeclared_variable_display() {
        let err = NotationError::UndeclaredVariable {
            variable: 'D',
            position: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains("undeclared variable 'D'"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_not_sequential_display() {
        let err = NotationError::NotSequential {
            previous: 'A',
            found: 'C',
        };
        assert!(err.to_string().contains("'C' follows 'A'"));
    }

    #[test]
    fn test_to_io_error() {
        let io_err: io::Error = NotationError::Empty.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
