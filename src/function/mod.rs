//! Sum-of-products functions
//!
//! A [`Function`] is an ordered list of [`Term`]s that evaluates to true when
//! any of its terms does. Term order only matters for display; equality
//! (`==`) compares truth tables.

use crate::assignment::{Assignment, Assignments};
use crate::term::{SizeMismatchError, Term};
use std::fmt;
use std::ops::Index;

/// A Boolean function in sum-of-products form
///
/// All terms share one width, enforced when terms are added. An empty
/// function is the constant 0 and evaluates to false for assignments of any
/// width.
///
/// # Examples
///
/// ```
/// use quine_mccluskey::{Assignment, Function, Term};
///
/// let mut f = Function::new();
/// f.add(Term::from_cube(&[Some(true), None])).unwrap();  // A
/// f.add(Term::from_cube(&[None, Some(true)])).unwrap();  // B
///
/// assert!(f.evaluate(&Assignment::from_value(2, 0b01)).unwrap());
/// assert!(!f.evaluate(&Assignment::from_value(2, 0b00)).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Function {
    terms: Vec<Term>,
}

impl Function {
    /// Create an empty function (constant 0)
    pub fn new() -> Self {
        Function { terms: Vec::new() }
    }

    /// Create a function from terms, checking that all share one width
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Result<Self, SizeMismatchError> {
        let mut function = Function::new();
        for term in terms {
            function.add(term)?;
        }
        Ok(function)
    }

    /// Wrap terms already known to share one width
    pub(crate) fn from_uniform(terms: Vec<Term>) -> Self {
        debug_assert!(terms.windows(2).all(|w| w[0].size() == w[1].size()));
        Function { terms }
    }

    /// Number of terms
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the function has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Width of the terms, or 0 for an empty function
    pub fn term_size(&self) -> usize {
        self.terms.first().map_or(0, Term::size)
    }

    /// The terms in insertion order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterate over the terms in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Append a term
    ///
    /// No deduplication is done; use [`Function::dedup`] when a set is needed.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatchError`] when the function is non-empty and the
    /// term width differs. The function is left unchanged.
    pub fn add(&mut self, term: Term) -> Result<(), SizeMismatchError> {
        if !self.is_empty() {
            SizeMismatchError::check(self.term_size(), term.size())?;
        }
        self.terms.push(term);
        Ok(())
    }

    /// Append every term of another function
    ///
    /// Widths are checked before anything is appended.
    pub fn add_function(&mut self, other: &Function) -> Result<(), SizeMismatchError> {
        if !self.is_empty() && !other.is_empty() {
            SizeMismatchError::check(self.term_size(), other.term_size())?;
        }
        self.terms.extend(other.terms.iter().cloned());
        Ok(())
    }

    /// Remove structurally duplicate terms, keeping the first occurrence
    pub fn dedup(&mut self) {
        let mut unique: Vec<Term> = Vec::with_capacity(self.terms.len());
        for term in self.terms.drain(..) {
            if !unique.iter().any(|t| t.is_same(&term)) {
                unique.push(term);
            }
        }
        self.terms = unique;
    }

    /// Evaluate the function for one assignment (OR over all terms)
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatchError`] when the function is non-empty and the
    /// assignment width differs from the term width.
    pub fn evaluate(&self, arg: &Assignment) -> Result<bool, SizeMismatchError> {
        for term in &self.terms {
            if term.evaluate(arg)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Output value for every assignment over `width` variables, ascending
    pub fn truth_table(&self, width: usize) -> Result<Vec<bool>, SizeMismatchError> {
        if !self.is_empty() {
            SizeMismatchError::check(self.term_size(), width)?;
        }
        Assignments::all(width)
            .map(|arg| self.evaluate(&arg))
            .collect()
    }

    /// Order-independent structural equality of the term sets
    ///
    /// Every term of each function must have a structurally identical
    /// counterpart in the other. Duplicates are ignored.
    pub fn is_same(&self, other: &Function) -> bool {
        let contained = |a: &Function, b: &Function| {
            a.terms
                .iter()
                .all(|t| b.terms.iter().any(|u| t.is_same(u)))
        };
        contained(self, other) && contained(other, self)
    }

    /// Truth table equivalence, failing on width mismatch
    ///
    /// This is the checked form of `==`. Empty functions adopt the width of
    /// the other operand.
    pub fn equivalent(&self, other: &Function) -> Result<bool, SizeMismatchError> {
        let width = match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ok(true),
            (false, true) => self.term_size(),
            (true, false) => other.term_size(),
            (false, false) => {
                SizeMismatchError::check(self.term_size(), other.term_size())?;
                self.term_size()
            }
        };
        for arg in Assignments::all(width) {
            if self.evaluate(&arg)? != other.evaluate(&arg)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Truth table equivalence over all `2^N` assignments
///
/// Functions over different widths compare unequal.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other).unwrap_or(false)
    }
}

impl Index<usize> for Function {
    type Output = Term;

    fn index(&self, index: usize) -> &Self::Output {
        &self.terms[index]
    }
}

impl<'a> IntoIterator for &'a Function {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for Function {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl From<Term> for Function {
    fn from(term: Term) -> Self {
        Function { terms: vec![term] }
    }
}

/// Bit-string rendering of the terms joined by ` + `, or `0` when empty
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
