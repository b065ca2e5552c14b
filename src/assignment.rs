//! Input assignments and their dense enumeration
//!
//! An [`Assignment`] is one fixed-width vector of concrete input bits. Bit `0`
//! is variable `0` and is the most significant bit of the assignment's numeric
//! value, so `Assignment::from_value(3, 0b100)` sets only the first variable.
//!
//! [`Assignments`] walks every assignment of a given width in ascending
//! numeric order. It drives both canonical form construction and the truth
//! table equivalence check on [`Function`](crate::Function).

use std::fmt;

/// Number of distinct assignments over `width` variables
///
/// Saturates at `u128::MAX` for widths that do not fit, which no caller can
/// enumerate anyway.
pub fn space_size(width: usize) -> u128 {
    u32::try_from(width)
        .ok()
        .and_then(|w| 1u128.checked_shl(w))
        .unwrap_or(u128::MAX)
}

/// A concrete input assignment, most significant bit first
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment {
    bits: Vec<bool>,
}

impl Assignment {
    /// Build the assignment whose numeric value is `value` over `width` bits
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_mccluskey::Assignment;
    ///
    /// let arg = Assignment::from_value(3, 0b110);
    /// assert_eq!(arg.bits(), &[true, true, false]);
    /// assert_eq!(arg.value(), 6);
    /// ```
    pub fn from_value(width: usize, value: u128) -> Self {
        let bits = (0..width)
            .map(|i| {
                let shift = width - 1 - i;
                shift < 128 && (value >> shift) & 1 == 1
            })
            .collect();
        Assignment { bits }
    }

    /// Build an assignment from explicit bits, variable 0 first
    pub fn from_bits(bits: impl Into<Vec<bool>>) -> Self {
        Assignment { bits: bits.into() }
    }

    /// Number of variables covered by this assignment
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Value of variable `index`
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// All bits, variable 0 first
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Numeric value with variable 0 as the most significant bit
    ///
    /// Bits beyond the 128th are dropped.
    pub fn value(&self) -> u128 {
        self.bits
            .iter()
            .fold(0u128, |acc, &b| (acc << 1) | u128::from(b))
    }

    /// Number of bits set to one
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl From<Vec<bool>> for Assignment {
    fn from(bits: Vec<bool>) -> Self {
        Assignment { bits }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Forward-only producer of fixed-width assignments in ascending order
///
/// The range is `begin..end`, clamped to the number of assignments that exist
/// for the width. Call [`Assignments::restart`] to walk the range again.
///
/// # Examples
///
/// ```
/// use quine_mccluskey::Assignments;
///
/// let all: Vec<String> = Assignments::all(2).map(|a| a.to_string()).collect();
/// assert_eq!(all, ["00", "01", "10", "11"]);
/// ```
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    begin: u128,
    next: u128,
    end: u128,
}

impl Assignments {
    /// Enumerate values `begin..end` over `width` bits
    pub fn new(width: usize, begin: u128, end: u128) -> Self {
        let end = end.min(space_size(width));
        let begin = begin.min(end);
        Assignments {
            width,
            begin,
            next: begin,
            end,
        }
    }

    /// Enumerate every assignment over `width` bits
    pub fn all(width: usize) -> Self {
        Assignments::new(width, 0, space_size(width))
    }

    /// Width of the produced assignments
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rewind to the first value of the range
    pub fn restart(&mut self) {
        self.next = self.begin;
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let value = self.next;
        self.next += 1;
        Some(Assignment::from_value(self.width, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
