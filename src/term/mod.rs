//! Product terms over tri-state bits
//!
//! This module provides the leaf data model of the minimizer:
//! - [`TriValue`]: one position of a term (true, false or don't-care)
//! - [`Term`]: a fixed-width product term, either a canonical minterm or a
//!   merged implicant with don't-care positions
//!
//! Terms are immutable values. Bookkeeping such as "this term was combined
//! into a larger implicant" lives in the minimizer, keyed by arena index.

mod error;

pub use error::{MergeError, SizeMismatchError};

use crate::assignment::{Assignment, Assignments};
use std::fmt;

/// Value of one position in a product term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TriValue {
    /// The variable must be 0
    False,
    /// The variable must be 1
    True,
    /// The variable is absent from the product and matches both 0 and 1
    DontCare,
}

impl TriValue {
    /// Check whether a concrete input bit satisfies this position
    ///
    /// [`TriValue::DontCare`] accepts both values.
    pub fn matches(self, bit: bool) -> bool {
        match self {
            TriValue::True => bit,
            TriValue::False => !bit,
            TriValue::DontCare => true,
        }
    }

    /// Check whether this position holds a concrete value
    pub fn is_concrete(self) -> bool {
        self != TriValue::DontCare
    }

    /// Character used by the bit-string rendering of terms
    pub fn as_char(self) -> char {
        match self {
            TriValue::True => '1',
            TriValue::False => '0',
            TriValue::DontCare => 'x',
        }
    }
}

impl From<bool> for TriValue {
    fn from(value: bool) -> Self {
        if value {
            TriValue::True
        } else {
            TriValue::False
        }
    }
}

impl From<Option<bool>> for TriValue {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(b) => TriValue::from(b),
            None => TriValue::DontCare,
        }
    }
}

impl From<TriValue> for Option<bool> {
    fn from(value: TriValue) -> Self {
        match value {
            TriValue::True => Some(true),
            TriValue::False => Some(false),
            TriValue::DontCare => None,
        }
    }
}

/// A product term over a fixed number of variables
///
/// Position `i` corresponds to variable `i`, which is the most significant bit
/// of an [`Assignment`]. The derived `PartialEq` is structural: two terms are
/// equal when their positions are identical, with don't-care kept distinct
/// from true and false. For product terms this coincides with truth table
/// equivalence, which [`Term::equivalent`] checks by enumeration.
///
/// # Examples
///
/// ```
/// use quine_mccluskey::{Term, TriValue};
///
/// // A * ~B over three variables
/// let a = Term::from_values(vec![TriValue::True, TriValue::False, TriValue::DontCare]);
/// assert_eq!(a.to_string(), "10x");
/// assert_eq!(a.popcount_true(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    values: Vec<TriValue>,
}

impl Term {
    /// Create the term with every position don't-care (the constant 1 product)
    pub fn new(width: usize) -> Self {
        Term {
            values: vec![TriValue::DontCare; width],
        }
    }

    /// Create a term from explicit positions, variable 0 first
    pub fn from_values(values: impl Into<Vec<TriValue>>) -> Self {
        Term {
            values: values.into(),
        }
    }

    /// Create a term from cube notation (`Some(bit)` or `None` for don't-care)
    pub fn from_cube(cube: &[Option<bool>]) -> Self {
        Term {
            values: cube.iter().map(|&v| TriValue::from(v)).collect(),
        }
    }

    /// Create the canonical minterm for one assignment (all positions concrete)
    pub fn from_assignment(arg: &Assignment) -> Self {
        Term {
            values: arg.bits().iter().map(|&b| TriValue::from(b)).collect(),
        }
    }

    /// Number of variables
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// All positions, variable 0 first
    pub fn values(&self) -> &[TriValue] {
        &self.values
    }

    /// Value at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<TriValue> {
        self.values.get(index).copied()
    }

    /// Positions in cube notation
    pub fn to_cube(&self) -> Vec<Option<bool>> {
        self.values.iter().map(|&v| v.into()).collect()
    }

    /// Fail with [`SizeMismatchError`] unless `other` has the same width
    pub fn size_check(&self, other: usize) -> Result<(), SizeMismatchError> {
        SizeMismatchError::check(self.size(), other)
    }

    /// Evaluate the product for one assignment
    ///
    /// Returns `true` iff every concrete position equals the corresponding
    /// assignment bit; don't-care positions are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatchError`] when the assignment width differs from the
    /// term width.
    pub fn evaluate(&self, arg: &Assignment) -> Result<bool, SizeMismatchError> {
        self.size_check(arg.width())?;
        Ok(self
            .values
            .iter()
            .zip(arg.bits())
            .all(|(v, &bit)| v.matches(bit)))
    }

    /// Count the positions holding exactly `value`
    pub fn count_value(&self, value: TriValue) -> usize {
        self.values.iter().filter(|&&v| v == value).count()
    }

    /// Number of positions set to concrete true
    ///
    /// This is the bucket index of the term in the grouping table.
    pub fn popcount_true(&self) -> usize {
        self.count_value(TriValue::True)
    }

    /// Number of don't-care positions
    pub fn dont_care_count(&self) -> usize {
        self.count_value(TriValue::DontCare)
    }

    /// Check whether all positions are concrete
    pub fn is_minterm(&self) -> bool {
        self.values.iter().all(|v| v.is_concrete())
    }

    /// Number of positions whose values differ
    ///
    /// Don't-care is a value of its own here, so `1x` and `11` differ in one
    /// position.
    pub fn differing_bit_count(&self, other: &Term) -> Result<usize, SizeMismatchError> {
        self.size_check(other.size())?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Combine two terms that differ in exactly one complementary position
    ///
    /// The result equals `self` with that position replaced by don't-care, so
    /// it accepts exactly the union of the assignments accepted by the inputs.
    ///
    /// # Errors
    ///
    /// - [`MergeError::SizeMismatch`] when the widths differ
    /// - [`MergeError::Incompatible`] when the terms differ in zero or several
    ///   positions, or the single differing position is not a true/false pair
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_mccluskey::{Term, TriValue};
    ///
    /// let a = Term::from_cube(&[Some(true), Some(true)]);
    /// let b = Term::from_cube(&[Some(true), Some(false)]);
    /// let merged = a.merge(&b).unwrap();
    /// assert_eq!(merged.to_string(), "1x");
    ///
    /// // 11 and 00 differ in two positions
    /// let c = Term::from_cube(&[Some(false), Some(false)]);
    /// assert!(a.merge(&c).is_err());
    /// ```
    pub fn merge(&self, other: &Term) -> Result<Term, MergeError> {
        self.size_check(other.size())?;

        let mut differing = 0;
        let mut position = None;
        for (i, (a, b)) in self.values.iter().zip(&other.values).enumerate() {
            if a != b {
                differing += 1;
                if a.is_concrete() && b.is_concrete() {
                    position = Some(i);
                }
            }
        }

        match position {
            Some(i) if differing == 1 => {
                let mut values = self.values.clone();
                values[i] = TriValue::DontCare;
                Ok(Term { values })
            }
            _ => Err(MergeError::Incompatible { differing }),
        }
    }

    /// Structural equality, don't-care kept distinct from true and false
    ///
    /// Terms of different widths are never the same.
    pub fn is_same(&self, other: &Term) -> bool {
        self.values == other.values
    }

    /// Truth table equivalence over every assignment of the term's width
    pub fn equivalent(&self, other: &Term) -> Result<bool, SizeMismatchError> {
        self.size_check(other.size())?;
        for arg in Assignments::all(self.size()) {
            if self.evaluate(&arg)? != other.evaluate(&arg)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Check whether every assignment accepted by `other` is accepted by `self`
    pub fn covers(&self, other: &Term) -> Result<bool, SizeMismatchError> {
        self.size_check(other.size())?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| *a == TriValue::DontCare || a == b))
    }
}

/// Bit-string rendering: `1`, `0` and `x` per position, variable 0 first
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.values {
            write!(f, "{}", v.as_char())?;
        }
        Ok(())
    }
}

impl From<&Assignment> for Term {
    fn from(arg: &Assignment) -> Self {
        Term::from_assignment(arg)
    }
}

#[cfg(test)]
mod tests;
