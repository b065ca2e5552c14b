//! Text notation for sum-of-products functions
//!
//! Functions are written as
//!
//! ```text
//! f(A, B, C) = AB + A^C + ^B
//! ```
//!
//! - The declaration lists single-character variables, consecutive and
//!   starting at the configured first variable (`A` by default)
//! - A product is a run of variables; a negation symbol (`^` by default)
//!   negates the variable right after it
//! - Variables missing from a product are don't-care there
//! - `0` and `1` stand for the constant functions
//! - Whitespace is ignored
//!
//! This layer only translates text to and from the abstract inputs of the
//! [`Minimizer`](crate::Minimizer): a variable count and a [`Function`].

mod ast;
mod display;
mod error;
mod parser;

pub use error::NotationError;

use crate::function::Function;
use crate::minimizer::{MinimizeError, Minimizer, MinimizerConfig};
use crate::term::{Term, TriValue};
use ast::RawFunction;
use std::io::{self, BufRead};

/// Negation symbols the grammar recognizes
pub const INVERTERS: [char; 3] = ['^', '~', '!'];

/// Configuration of the notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotationConfig {
    /// Symbol negating the following variable
    pub inverter: char,
    /// Character naming variable 0; variable `i` is this character plus `i`
    pub first_variable: char,
}

impl Default for NotationConfig {
    fn default() -> Self {
        NotationConfig {
            inverter: '^',
            first_variable: 'A',
        }
    }
}

impl NotationConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of variable `index`, if it is a valid character
    pub fn variable_name(&self, index: usize) -> Option<char> {
        u32::try_from(index)
            .ok()
            .and_then(|i| (self.first_variable as u32).checked_add(i))
            .and_then(char::from_u32)
    }

    /// Index of the variable named `name`
    pub fn variable_index(&self, name: char) -> Option<usize> {
        (name as u32)
            .checked_sub(self.first_variable as u32)
            .map(|i| i as usize)
    }

    fn check_inverter(&self) -> Result<(), NotationError> {
        if INVERTERS.contains(&self.inverter) {
            Ok(())
        } else {
            Err(NotationError::UnsupportedInverter {
                inverter: self.inverter,
            })
        }
    }
}

/// A validated function read from text
#[derive(Debug, Clone)]
pub struct ParsedFunction {
    /// Name before the parenthesis (`f` in `f(A) = A`)
    pub name: String,
    /// Declared variables in order
    pub variables: Vec<char>,
    /// The function over `variables.len()` variables
    pub function: Function,
}

impl ParsedFunction {
    /// Number of declared variables
    pub fn width(&self) -> usize {
        self.variables.len()
    }

    /// Create a minimizer for this function with the default configuration
    pub fn minimizer(&self) -> Result<Minimizer, MinimizeError> {
        Minimizer::new(self.width(), self.function.clone())
    }

    /// Create a minimizer for this function with an explicit configuration
    pub fn minimizer_with_config(
        &self,
        config: MinimizerConfig,
    ) -> Result<Minimizer, MinimizeError> {
        Minimizer::with_config(self.width(), self.function.clone(), config)
    }
}

/// Parse and validate a function line
///
/// # Examples
///
/// ```
/// use quine_mccluskey::notation::{parse_function, NotationConfig};
///
/// let parsed = parse_function("f(A,B) = AB + A^B + ^AB", &NotationConfig::default()).unwrap();
/// assert_eq!(parsed.name, "f");
/// assert_eq!(parsed.variables, vec!['A', 'B']);
/// assert_eq!(parsed.function.size(), 3);
/// assert_eq!(parsed.function[1].to_string(), "10");
/// ```
///
/// # Errors
///
/// Returns a [`NotationError`] for malformed syntax, declarations that are
/// not consecutive single characters starting at the configured first
/// variable, undeclared or repeated variables, and foreign negation symbols.
pub fn parse_function(
    input: &str,
    config: &NotationConfig,
) -> Result<ParsedFunction, NotationError> {
    config.check_inverter()?;
    let raw = parser::parse_raw(input)?;
    build(raw, config)
}

/// Read the first non-blank line from `reader` and parse it
pub fn read_function<R: BufRead>(
    reader: R,
    config: &NotationConfig,
) -> io::Result<ParsedFunction> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(parse_function(&line, config)?);
        }
    }
    Err(NotationError::Empty.into())
}

/// Parse a single product token such as `A^BC` over `width` variables
///
/// Positions are character offsets into `token`. An empty token is the
/// all-don't-care term.
pub fn parse_term(
    token: &str,
    width: usize,
    config: &NotationConfig,
) -> Result<Term, NotationError> {
    config.check_inverter()?;
    let mut values = vec![TriValue::DontCare; width];
    let mut negate = None;
    for (position, c) in token.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        if INVERTERS.contains(&c) {
            if c != config.inverter {
                return Err(NotationError::WrongInverter {
                    expected: config.inverter,
                    found: c,
                    position,
                });
            }
            negate = Some(position);
            continue;
        }
        let index = match config.variable_index(c) {
            Some(i) if i < width => i,
            _ => {
                return Err(NotationError::UndeclaredVariable {
                    variable: c,
                    position,
                })
            }
        };
        if values[index].is_concrete() {
            return Err(NotationError::RepeatedVariable {
                variable: c,
                position,
            });
        }
        values[index] = TriValue::from(negate.take().is_none());
    }
    if let Some(position) = negate {
        return Err(NotationError::InvalidSyntax {
            message: "negation symbol not followed by a variable".into(),
            input: token.into(),
            position: Some(position),
        });
    }
    Ok(Term::from_values(values))
}

fn build(raw: RawFunction, config: &NotationConfig) -> Result<ParsedFunction, NotationError> {
    let mut variables = Vec::with_capacity(raw.variables.len());
    for name in &raw.variables {
        let mut chars = name.chars();
        let variable = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(NotationError::InvalidVariable {
                    name: name.as_str().into(),
                })
            }
        };
        match variables.last().copied() {
            None if variable != config.first_variable => {
                return Err(NotationError::UnexpectedFirstVariable {
                    expected: config.first_variable,
                    found: variable,
                });
            }
            Some(previous) if char::from_u32(previous as u32 + 1) != Some(variable) => {
                return Err(NotationError::NotSequential {
                    previous,
                    found: variable,
                });
            }
            _ => variables.push(variable),
        }
    }

    let width = variables.len();
    let mut terms = Vec::with_capacity(raw.terms.len());
    for literals in &raw.terms {
        let mut values = vec![TriValue::DontCare; width];
        for literal in literals {
            if let Some(found) = literal.inverter {
                if found != config.inverter {
                    return Err(NotationError::WrongInverter {
                        expected: config.inverter,
                        found,
                        position: literal.position,
                    });
                }
            }
            let index = variables
                .iter()
                .position(|&v| v == literal.variable)
                .ok_or(NotationError::UndeclaredVariable {
                    variable: literal.variable,
                    position: literal.position,
                })?;
            if values[index].is_concrete() {
                return Err(NotationError::RepeatedVariable {
                    variable: literal.variable,
                    position: literal.position,
                });
            }
            values[index] = TriValue::from(literal.inverter.is_none());
        }
        terms.push(Term::from_values(values));
    }

    Ok(ParsedFunction {
        name: raw.name,
        variables,
        function: Function::from_uniform(terms),
    })
}

#[cfg(test)]
mod tests;
