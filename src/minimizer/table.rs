//! The leveled grouping table used to discover prime implicants
//!
//! Terms live in an arena and are referred to by index. Each level is a list
//! of buckets, bucket `i` holding the terms with `i` concrete-true positions.
//! Whether a term was combined into a larger implicant is tracked in a side
//! vector parallel to the arena, so [`Term`] stays an immutable value.

use crate::function::Function;
use crate::term::{MergeError, SizeMismatchError, Term};
use log::trace;

type TermId = usize;

/// Grouping table: `level -> bucket -> terms`
///
/// Every level has `width + 1` buckets, some possibly empty.
#[derive(Debug, Clone, Default)]
pub struct GroupingTable {
    width: usize,
    arena: Vec<Term>,
    consumed: Vec<bool>,
    levels: Vec<Vec<Vec<TermId>>>,
}

impl GroupingTable {
    /// Create a table with no levels
    pub(crate) fn new(width: usize) -> Self {
        GroupingTable {
            width,
            ..Default::default()
        }
    }

    /// Create level 0 by bucketing minterms on their count of true positions
    pub(crate) fn from_minterms(
        width: usize,
        minterms: &Function,
    ) -> Result<Self, SizeMismatchError> {
        let mut table = GroupingTable::new(width);
        let mut level = vec![Vec::new(); width + 1];
        for term in minterms {
            term.size_check(width)?;
            let bucket = term.popcount_true();
            level[bucket].push(table.alloc(term.clone()));
        }
        table.levels.push(level);
        Ok(table)
    }

    fn alloc(&mut self, term: Term) -> TermId {
        self.arena.push(term);
        self.consumed.push(false);
        self.arena.len() - 1
    }

    /// Variable count of the terms in the table
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of levels built so far
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Number of buckets at `level` (0 if the level does not exist)
    pub fn bucket_count(&self, level: usize) -> usize {
        self.levels.get(level).map_or(0, Vec::len)
    }

    /// Terms of one bucket, in insertion order
    ///
    /// Missing levels or buckets yield nothing.
    pub fn bucket(&self, level: usize, bucket: usize) -> impl Iterator<Item = &Term> + '_ {
        self.bucket_ids(level, bucket)
            .iter()
            .map(move |&id| &self.arena[id])
    }

    /// Terms of one bucket paired with their consumed mark
    pub fn bucket_with_marks(
        &self,
        level: usize,
        bucket: usize,
    ) -> impl Iterator<Item = (&Term, bool)> + '_ {
        self.bucket_ids(level, bucket)
            .iter()
            .map(move |&id| (&self.arena[id], self.consumed[id]))
    }

    /// Whether the `index`-th term of a bucket was combined into a larger implicant
    pub fn is_consumed(&self, level: usize, bucket: usize, index: usize) -> Option<bool> {
        self.bucket_ids(level, bucket)
            .get(index)
            .map(|&id| self.consumed[id])
    }

    /// Total number of terms at `level`
    pub fn level_size(&self, level: usize) -> usize {
        self.levels
            .get(level)
            .map_or(0, |buckets| buckets.iter().map(Vec::len).sum())
    }

    fn bucket_ids(&self, level: usize, bucket: usize) -> &[TermId] {
        self.levels
            .get(level)
            .and_then(|buckets| buckets.get(bucket))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Run one combination pass over the last level
    ///
    /// Every term of bucket `i` is tried against every term of bucket `i + 1`.
    /// Successful merges go into the next level (deduplicated within their
    /// bucket) and mark both sources consumed. Nothing is committed unless the
    /// whole pass succeeds. Returns the number of successful merges; when it is
    /// zero no level is added.
    pub(crate) fn compress_once(&mut self) -> Result<usize, SizeMismatchError> {
        let Some(current) = self.levels.last() else {
            return Ok(0);
        };

        let mut next: Vec<Vec<Term>> = vec![Vec::new(); self.width + 1];
        let mut used: Vec<TermId> = Vec::new();
        let mut merges = 0;

        for pair in current.windows(2) {
            for &lo in &pair[0] {
                for &hi in &pair[1] {
                    let (a, b) = (&self.arena[lo], &self.arena[hi]);
                    let merged = match a.merge(b) {
                        Ok(term) => term,
                        Err(MergeError::Incompatible { .. }) => continue,
                        Err(MergeError::SizeMismatch(e)) => return Err(e),
                    };
                    trace!("compress({}, {}) = {}", a, b, merged);

                    let bucket = &mut next[merged.popcount_true()];
                    if !bucket.iter().any(|t| t.is_same(&merged)) {
                        bucket.push(merged);
                    }
                    used.push(lo);
                    used.push(hi);
                    merges += 1;
                }
            }
        }

        if merges == 0 {
            return Ok(0);
        }

        for id in used {
            self.consumed[id] = true;
        }
        let mut level = Vec::with_capacity(next.len());
        for bucket in next {
            let mut ids = Vec::with_capacity(bucket.len());
            for term in bucket {
                ids.push(self.alloc(term));
            }
            level.push(ids);
        }
        self.levels.push(level);
        Ok(merges)
    }

    /// Every term never consumed, across all levels, without structural duplicates
    pub(crate) fn unconsumed(&self) -> Vec<Term> {
        let mut primes: Vec<Term> = Vec::new();
        for buckets in &self.levels {
            for &id in buckets.iter().flatten() {
                let term = &self.arena[id];
                if !self.consumed[id] && !primes.iter().any(|t| t.is_same(term)) {
                    primes.push(term.clone());
                }
            }
        }
        primes
    }
}
