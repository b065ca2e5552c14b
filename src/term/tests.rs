//! Tests for the term module

use super::*;

fn term(bits: &str) -> Term {
    Term::from_values(
        bits.chars()
            .map(|c| match c {
                '1' => TriValue::True,
                '0' => TriValue::False,
                _ => TriValue::DontCare,
            })
            .collect::<Vec<_>>(),
    )
}

#[test]
fn test_new_is_all_dont_care() {
    let t = Term::new(3);
    assert_eq!(t.size(), 3);
    assert_eq!(t.to_string(), "xxx");
    assert_eq!(t.dont_care_count(), 3);
    assert!(!t.is_minterm());
}

#[test]
fn test_from_assignment() {
    let t = Term::from_assignment(&Assignment::from_value(3, 0b101));
    assert_eq!(t.to_string(), "101");
    assert!(t.is_minterm());
    assert_eq!(t.popcount_true(), 2);
}

#[test]
fn test_cube_conversion() {
    let cube = [Some(true), None, Some(false)];
    let t = Term::from_cube(&cube);
    assert_eq!(t.to_string(), "1x0");
    assert_eq!(t.to_cube(), cube.to_vec());
}

#[test]
fn test_evaluate_skips_dont_care() {
    let t = term("1x0");
    assert!(t.evaluate(&Assignment::from_value(3, 0b100)).unwrap());
    assert!(t.evaluate(&Assignment::from_value(3, 0b110)).unwrap());
    assert!(!t.evaluate(&Assignment::from_value(3, 0b101)).unwrap());
    assert!(!t.evaluate(&Assignment::from_value(3, 0b000)).unwrap());
}

#[test]
fn test_evaluate_size_mismatch() {
    let t = term("10");
    let err = t.evaluate(&Assignment::from_value(3, 0)).unwrap_err();
    assert_eq!(
        err,
        SizeMismatchError {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_popcount_ignores_false_and_dont_care() {
    assert_eq!(term("1x01").popcount_true(), 2);
    assert_eq!(term("xxxx").popcount_true(), 0);
    assert_eq!(term("0000").popcount_true(), 0);
}

#[test]
fn test_differing_bit_count() {
    assert_eq!(term("10").differing_bit_count(&term("10")).unwrap(), 0);
    assert_eq!(term("1x").differing_bit_count(&term("11")).unwrap(), 1);
    assert_eq!(term("x1").differing_bit_count(&term("1x")).unwrap(), 2);
    assert!(term("1").differing_bit_count(&term("11")).is_err());
}

#[test]
fn test_merge_complementary_bit() {
    let merged = term("101").merge(&term("111")).unwrap();
    assert_eq!(merged.to_string(), "1x1");

    // Order of operands is irrelevant
    let merged = term("111").merge(&term("101")).unwrap();
    assert_eq!(merged.to_string(), "1x1");
}

#[test]
fn test_merge_with_existing_dont_care() {
    let merged = term("1x0").merge(&term("1x1")).unwrap();
    assert_eq!(merged.to_string(), "1xx");
}

#[test]
fn test_merge_identical_fails() {
    assert_eq!(
        term("10").merge(&term("10")),
        Err(MergeError::Incompatible { differing: 0 })
    );
}

#[test]
fn test_merge_two_differences_fails() {
    assert_eq!(
        term("10").merge(&term("01")),
        Err(MergeError::Incompatible { differing: 2 })
    );
}

#[test]
fn test_merge_dont_care_against_concrete_fails() {
    // Single differing position, but it is x against 1
    assert_eq!(
        term("1x").merge(&term("11")),
        Err(MergeError::Incompatible { differing: 1 })
    );
    // Dont-cares in different positions
    assert_eq!(
        term("x1").merge(&term("1x")),
        Err(MergeError::Incompatible { differing: 2 })
    );
}

#[test]
fn test_merge_size_mismatch() {
    let err = term("10").merge(&term("100")).unwrap_err();
    assert!(matches!(err, MergeError::SizeMismatch(_)));
}

#[test]
fn test_is_same_vs_equivalent() {
    assert!(term("1x").is_same(&term("1x")));
    assert!(!term("1x").is_same(&term("11")));
    assert!(!term("1x").is_same(&term("1x0")));

    assert!(term("1x").equivalent(&term("1x")).unwrap());
    assert!(!term("1x").equivalent(&term("11")).unwrap());
    assert!(term("1x").equivalent(&term("1x0")).is_err());
}

#[test]
fn test_covers() {
    assert!(term("1x").covers(&term("10")).unwrap());
    assert!(term("xx").covers(&term("1x")).unwrap());
    assert!(!term("10").covers(&term("1x")).unwrap());
}

#[test]
fn test_tri_value_conversions() {
    assert_eq!(TriValue::from(true), TriValue::True);
    assert_eq!(TriValue::from(None), TriValue::DontCare);
    assert_eq!(Option::<bool>::from(TriValue::False), Some(false));
    assert!(TriValue::DontCare.matches(true));
    assert!(TriValue::DontCare.matches(false));
    assert!(!TriValue::True.matches(false));
}
