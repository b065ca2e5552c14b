//! # Quine-McCluskey Logic Minimizer
//!
//! This crate computes every minimum sum-of-products (SOP) form of a Boolean
//! function using the Quine-McCluskey procedure.
//!
//! ## Overview
//!
//! A function over `N` variables is given as a list of product terms, each a
//! string of `0`, `1` or don't-care positions. The [`Minimizer`] runs the
//! procedure in explicit stages, each of which can be invoked and inspected
//! on its own:
//!
//! 1. **Canonical form**: expand the function into its minterms
//! 2. **Grouping table**: bucket the minterms by their number of `1` positions
//! 3. **Compression**: merge terms of adjacent buckets until nothing merges;
//!    terms never merged are the prime implicants
//! 4. **Simplification**: find every smallest set of prime implicants whose
//!    sum equals the function
//!
//! Every stage runs any missing earlier stage first, so calling
//! [`Minimizer::minimize`] directly is enough for most uses.
//!
//! ## Quick Start
//!
//! ```
//! use quine_mccluskey::{Function, Minimizer, Term};
//!
//! # fn main() -> Result<(), quine_mccluskey::Error> {
//! // f(A,B) = AB + A^B + ^AB
//! let f = Function::from_terms([
//!     Term::from_cube(&[Some(true), Some(true)]),
//!     Term::from_cube(&[Some(true), Some(false)]),
//!     Term::from_cube(&[Some(false), Some(true)]),
//! ])?;
//!
//! let mut qm = Minimizer::new(2, f)?;
//! let covers = qm.minimize()?;
//!
//! assert_eq!(covers.len(), 1);
//! assert_eq!(covers[0].to_string(), "x1 + 1x");
//! # Ok(())
//! # }
//! ```
//!
//! ## Text Notation
//!
//! The [`notation`] module reads and writes functions in a compact textual
//! form where variables are single letters and a negation symbol precedes a
//! negated variable:
//!
//! ```
//! use quine_mccluskey::notation::{parse_function, NotationConfig};
//!
//! # fn main() -> Result<(), quine_mccluskey::Error> {
//! let config = NotationConfig::default();
//! let parsed = parse_function("f(A,B,C) = ABC + AB^C + A^BC + A^B^C", &config)?;
//!
//! let mut qm = parsed.minimizer()?;
//! let covers = qm.minimize()?;
//!
//! assert_eq!(config.render_function(&covers[0]), "A");
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting Stages
//!
//! ```
//! use quine_mccluskey::{Function, Minimizer, Stage, Term};
//!
//! # fn main() -> Result<(), quine_mccluskey::Error> {
//! let f = Function::from(Term::from_cube(&[Some(true), None]));
//! let mut qm = Minimizer::new(2, f)?;
//!
//! assert_eq!(qm.make_std_spf()?.size(), 2);
//! assert_eq!(qm.stage(), Stage::Canonical);
//!
//! while qm.compress_once()? {}
//! assert_eq!(qm.table().level_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Stage progress is reported through the [`log`](https://docs.rs/log) facade
//! at `debug` and `trace` level. Install any logger to see it; the `qmc`
//! binary does so with `-v`.

pub mod assignment;
pub mod error;
pub mod function;
pub mod minimizer;
pub mod notation;
pub mod term;

// Re-export high-level public API
pub use assignment::{Assignment, Assignments};
pub use error::Error;
pub use function::Function;
pub use minimizer::{GroupingTable, MinimizeError, Minimizer, MinimizerConfig, Stage};
pub use notation::{NotationConfig, NotationError, ParsedFunction};
pub use term::{MergeError, SizeMismatchError, Term, TriValue};
