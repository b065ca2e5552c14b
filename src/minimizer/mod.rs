//! The Quine-McCluskey minimization engine
//!
//! [`Minimizer`] takes a declared variable count and a [`Function`] and runs
//! the procedure as a sequence of stages:
//!
//! 1. [`Minimizer::make_std_spf`] builds the canonical sum of minterms
//! 2. [`Minimizer::make_min_table`] buckets the minterms by their count of
//!    true positions (level 0 of the [`GroupingTable`])
//! 3. [`Minimizer::compress_once`] combines adjacent buckets into the next level
//! 4. [`Minimizer::compress_table`] repeats step 3 until nothing merges and
//!    collects the prime implicants
//! 5. [`Minimizer::simplify`] searches the smallest covers over the primes
//!
//! Calling a stage before its prerequisites runs the missing stages first.
//! [`Minimizer::minimize`] runs everything.

mod cover;
mod error;
mod table;

pub use error::MinimizeError;
pub use table::GroupingTable;

use crate::assignment::Assignments;
use crate::function::Function;
use crate::term::{SizeMismatchError, Term};
use log::debug;

/// Configuration for the minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Largest accepted variable count; canonical form construction is `2^N`
    pub max_variables: usize,
    /// Largest prime implicant set the cover search will enumerate
    pub max_prime_implicants: Option<usize>,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            max_variables: 24,
            max_prime_implicants: None,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Progress of a [`Minimizer`] through the procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Nothing computed yet
    Created,
    /// Canonical form built
    Canonical,
    /// Level 0 of the grouping table built; compression may be in progress
    Tabulated,
    /// Compression finished and prime implicants collected
    Compressed,
    /// Minimal covers found
    Simplified,
}

/// Quine-McCluskey minimizer for one function
///
/// Owns the canonical form, the grouping table, the prime implicants and the
/// minimal covers, and exposes them read-only.
///
/// # Examples
///
/// ```
/// use quine_mccluskey::{Function, Minimizer, Term};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // A*B + A*~B + ~A*B
/// let f = Function::from_terms([
///     Term::from_cube(&[Some(true), Some(true)]),
///     Term::from_cube(&[Some(true), Some(false)]),
///     Term::from_cube(&[Some(false), Some(true)]),
/// ])?;
///
/// let mut qm = Minimizer::new(2, f)?;
/// let covers = qm.minimize()?;
///
/// assert_eq!(covers.len(), 1);
/// assert_eq!(covers[0].to_string(), "x1 + 1x"); // B + A
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Minimizer {
    config: MinimizerConfig,
    variables: usize,
    function: Function,
    canonical: Function,
    table: GroupingTable,
    prime_implicants: Vec<Term>,
    covers: Vec<Function>,
    stage: Stage,
}

impl Minimizer {
    /// Create a minimizer with the default configuration
    ///
    /// # Errors
    ///
    /// - [`MinimizeError::SizeMismatch`] if the function's terms are not
    ///   `variables` wide
    /// - [`MinimizeError::TooManyVariables`] if `variables` exceeds the default
    ///   limit
    pub fn new(variables: usize, function: Function) -> Result<Self, MinimizeError> {
        Self::with_config(variables, function, MinimizerConfig::default())
    }

    /// Create a minimizer with an explicit configuration
    pub fn with_config(
        variables: usize,
        function: Function,
        config: MinimizerConfig,
    ) -> Result<Self, MinimizeError> {
        if variables > config.max_variables {
            return Err(MinimizeError::TooManyVariables {
                requested: variables,
                max: config.max_variables,
            });
        }
        if !function.is_empty() {
            SizeMismatchError::check(variables, function.term_size())?;
        }
        Ok(Minimizer {
            config,
            variables,
            function,
            canonical: Function::new(),
            table: GroupingTable::new(variables),
            prime_implicants: Vec::new(),
            covers: Vec::new(),
            stage: Stage::Created,
        })
    }

    /// Declared variable count
    pub fn variables(&self) -> usize {
        self.variables
    }

    /// The function being minimized
    pub fn function(&self) -> &Function {
        &self.function
    }

    /// The configuration in use
    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Canonical sum of minterms (empty before [`Minimizer::make_std_spf`])
    pub fn canonical(&self) -> &Function {
        &self.canonical
    }

    /// The grouping table built so far
    pub fn table(&self) -> &GroupingTable {
        &self.table
    }

    /// Index of the last level in the grouping table
    pub fn current_level(&self) -> usize {
        self.table.level_count().saturating_sub(1)
    }

    /// Prime implicants (empty before [`Minimizer::compress_table`])
    pub fn prime_implicants(&self) -> &[Term] {
        &self.prime_implicants
    }

    /// Minimal covers (empty before [`Minimizer::simplify`])
    pub fn covers(&self) -> &[Function] {
        &self.covers
    }

    /// Build the canonical sum of products
    ///
    /// Every assignment over the declared variables for which the function is
    /// true contributes one minterm, in ascending assignment order. Rebuilds
    /// from scratch and discards every later stage.
    pub fn make_std_spf(&mut self) -> Result<&Function, MinimizeError> {
        let mut canonical = Function::new();
        for arg in Assignments::all(self.variables) {
            if self.function.evaluate(&arg)? {
                canonical.add(Term::from_assignment(&arg))?;
            }
        }
        debug!(
            "canonical form: {} minterm(s) over {} variable(s)",
            canonical.size(),
            self.variables
        );

        self.canonical = canonical;
        self.table = GroupingTable::new(self.variables);
        self.prime_implicants.clear();
        self.covers.clear();
        self.stage = Stage::Canonical;
        Ok(&self.canonical)
    }

    /// Build level 0 of the grouping table from the canonical minterms
    ///
    /// Creates `N + 1` buckets even when some stay empty. Discards any
    /// compression progress.
    pub fn make_min_table(&mut self) -> Result<&GroupingTable, MinimizeError> {
        if self.stage < Stage::Canonical {
            self.make_std_spf()?;
        }
        self.table = GroupingTable::from_minterms(self.variables, &self.canonical)?;
        self.prime_implicants.clear();
        self.covers.clear();
        self.stage = Stage::Tabulated;
        Ok(&self.table)
    }

    /// Run one combination pass at the current level
    ///
    /// Returns `true` when at least one pair merged and a new level was added,
    /// `false` once no further merges are possible.
    pub fn compress_once(&mut self) -> Result<bool, MinimizeError> {
        if self.stage < Stage::Tabulated {
            self.make_min_table()?;
        }
        let level = self.current_level();
        let merges = self.table.compress_once()?;
        if merges > 0 {
            debug!(
                "level {} -> {}: {} merge(s), {} term(s)",
                level,
                level + 1,
                merges,
                self.table.level_size(level + 1)
            );
        } else {
            debug!("level {}: no further merges", level);
        }
        Ok(merges > 0)
    }

    /// Compress until no merges remain and collect the prime implicants
    ///
    /// The prime implicants are every term, across all levels, that was never
    /// consumed by a merge, without structural duplicates. Calling this again
    /// yields the same set.
    pub fn compress_table(&mut self) -> Result<&[Term], MinimizeError> {
        while self.compress_once()? {}

        self.prime_implicants = self.table.unconsumed();
        debug!(
            "{} prime implicant(s) over {} level(s)",
            self.prime_implicants.len(),
            self.table.level_count()
        );
        if self.stage < Stage::Compressed {
            self.stage = Stage::Compressed;
        }
        Ok(&self.prime_implicants)
    }

    /// Find every minimal cover of the canonical form
    ///
    /// Subsets of the prime implicants are tried by increasing size; all
    /// covers of the smallest successful size are returned. A function with
    /// no minterms yields a single empty cover.
    ///
    /// # Errors
    ///
    /// [`MinimizeError::TooManyPrimeImplicants`] when the configured limit is
    /// exceeded. Nothing is searched in that case.
    pub fn simplify(&mut self) -> Result<&[Function], MinimizeError> {
        if self.stage < Stage::Compressed {
            self.compress_table()?;
        }
        if let Some(max) = self.config.max_prime_implicants {
            if self.prime_implicants.len() > max {
                return Err(MinimizeError::TooManyPrimeImplicants {
                    found: self.prime_implicants.len(),
                    max,
                });
            }
        }

        self.covers = cover::minimal_covers(&self.prime_implicants, &self.canonical)?;
        self.stage = Stage::Simplified;
        Ok(&self.covers)
    }

    /// Run every stage and return the minimal covers
    pub fn minimize(&mut self) -> Result<&[Function], MinimizeError> {
        self.make_std_spf()?;
        self.simplify()
    }
}
