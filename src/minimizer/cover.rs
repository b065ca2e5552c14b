//! Exhaustive search for minimal covers over the prime implicants

use crate::function::Function;
use crate::term::{SizeMismatchError, Term};
use itertools::Itertools;
use log::debug;

/// Find every smallest subset of `primes` whose sum equals `target`
///
/// Subset sizes are tried in increasing order and each k-subset is visited
/// once. The search stops after the first size that yields a cover; all covers
/// of that size are returned in lexicographic order of their prime indices.
/// An empty `target` has exactly one cover, the empty function.
pub(crate) fn minimal_covers(
    primes: &[Term],
    target: &Function,
) -> Result<Vec<Function>, SizeMismatchError> {
    if target.is_empty() {
        return Ok(vec![Function::new()]);
    }

    let mut covers: Vec<Function> = Vec::new();
    for k in 1..=primes.len() {
        for subset in (0..primes.len()).combinations(k) {
            let candidate = Function::from_terms(subset.iter().map(|&i| primes[i].clone()))?;
            if !candidate.equivalent(target)? {
                continue;
            }
            if !covers.iter().any(|c| c.is_same(&candidate)) {
                covers.push(candidate);
            }
        }
        if !covers.is_empty() {
            debug!("found {} minimal cover(s) of size {}", covers.len(), k);
            break;
        }
    }
    Ok(covers)
}
