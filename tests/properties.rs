//! Property tests for the minimization procedure

use proptest::prelude::*;
use quine_mccluskey::{Assignments, Function, Minimizer, Term};

fn term_strategy(width: usize) -> impl Strategy<Value = Term> {
    prop::collection::vec(prop::option::of(any::<bool>()), width)
        .prop_map(|cube| Term::from_cube(&cube))
}

fn function_strategy(max_width: usize) -> impl Strategy<Value = (usize, Function)> {
    (1..=max_width).prop_flat_map(|width| {
        (
            Just(width),
            prop::collection::vec(term_strategy(width), 0..6)
                .prop_map(|terms| Function::from_terms(terms).unwrap()),
        )
    })
}

fn term_pair_strategy() -> impl Strategy<Value = (Term, Term)> {
    (1usize..=5).prop_flat_map(|width| (term_strategy(width), term_strategy(width)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_canonical_matches_function((width, f) in function_strategy(5)) {
        let mut qm = Minimizer::new(width, f.clone()).unwrap();
        let canonical = qm.make_std_spf().unwrap().clone();

        prop_assert!(canonical.iter().all(Term::is_minterm));
        for arg in Assignments::all(width) {
            prop_assert_eq!(
                canonical.evaluate(&arg).unwrap(),
                f.evaluate(&arg).unwrap(),
                "canonical form differs at {}",
                arg
            );
        }
    }

    #[test]
    fn proptest_merge_is_union((a, b) in term_pair_strategy()) {
        if let Ok(merged) = a.merge(&b) {
            prop_assert_eq!(merged.dont_care_count(), a.dont_care_count() + 1);
            for arg in Assignments::all(a.size()) {
                let expected = a.evaluate(&arg).unwrap() || b.evaluate(&arg).unwrap();
                prop_assert_eq!(merged.evaluate(&arg).unwrap(), expected);
            }
        }
    }

    #[test]
    fn proptest_compress_is_idempotent((width, f) in function_strategy(4)) {
        let mut qm = Minimizer::new(width, f).unwrap();
        let first = qm.compress_table().unwrap().to_vec();
        let second = qm.compress_table().unwrap().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn proptest_primes_are_implicants((width, f) in function_strategy(4)) {
        let mut qm = Minimizer::new(width, f.clone()).unwrap();
        let primes = qm.compress_table().unwrap().to_vec();

        for prime in &primes {
            for arg in Assignments::all(width) {
                if prime.evaluate(&arg).unwrap() {
                    prop_assert!(f.evaluate(&arg).unwrap(), "{} is not an implicant", prime);
                }
            }
        }
        for (i, p) in primes.iter().enumerate() {
            prop_assert!(!primes[i + 1..].iter().any(|q| q.is_same(p)));
        }
    }

    #[test]
    fn proptest_covers_are_minimal((width, f) in function_strategy(3)) {
        let mut qm = Minimizer::new(width, f.clone()).unwrap();
        let covers = qm.minimize().unwrap().to_vec();

        prop_assert!(!covers.is_empty());
        let size = covers[0].size();
        for cover in &covers {
            prop_assert_eq!(cover.size(), size);
            prop_assert!(cover.equivalent(&f).unwrap());

            for skip in 0..cover.size() {
                let reduced = Function::from_terms(
                    cover.iter().enumerate().filter(|(i, _)| *i != skip).map(|(_, t)| t.clone()),
                )
                .unwrap();
                prop_assert!(!reduced.equivalent(&f).unwrap(), "cover {} is redundant", cover);
            }
        }
    }
}
