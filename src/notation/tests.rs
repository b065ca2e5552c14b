//! Tests for the notation module

use super::*;
use std::io::Cursor;

fn parse(input: &str) -> Result<ParsedFunction, NotationError> {
    parse_function(input, &NotationConfig::default())
}

fn bits(parsed: &ParsedFunction) -> Vec<String> {
    parsed.function.iter().map(Term::to_string).collect()
}

#[test]
fn test_parse_scenario_terms() {
    let parsed = parse("f(A,B) = AB + A^B + ^AB").unwrap();
    assert_eq!(parsed.width(), 2);
    assert_eq!(bits(&parsed), vec!["11", "10", "01"]);
}

#[test]
fn test_unspecified_variables_are_dont_care() {
    let parsed = parse("g(A,B,C) = A + ^B + CA").unwrap();
    assert_eq!(bits(&parsed), vec!["1xx", "x0x", "1x1"]);
}

#[test]
fn test_constants() {
    assert!(parse("f(A,B) = 0").unwrap().function.is_empty());
    assert_eq!(bits(&parse("f(A,B) = 1").unwrap()), vec!["xx"]);
}

#[test]
fn test_custom_config() {
    let config = NotationConfig {
        inverter: '~',
        first_variable: 'a',
    };
    let parsed = parse_function("h(a,b,c) = a~b + ~c", &config).unwrap();
    assert_eq!(parsed.variables, vec!['a', 'b', 'c']);
    assert_eq!(bits(&parsed), vec!["10x", "xx0"]);
}

#[test]
fn test_wrong_inverter() {
    let err = parse("f(A,B) = A~B").unwrap_err();
    assert!(matches!(
        err,
        NotationError::WrongInverter {
            expected: '^',
            found: '~',
            ..
        }
    ));
}

#[test]
fn test_unsupported_inverter_config() {
    let config = NotationConfig {
        inverter: '-',
        ..Default::default()
    };
    assert_eq!(
        parse_function("f(A) = A", &config).unwrap_err(),
        NotationError::UnsupportedInverter { inverter: '-' }
    );
}

#[test]
fn test_undeclared_variable() {
    let err = parse("f(A,B) = AC").unwrap_err();
    assert_eq!(
        err,
        NotationError::UndeclaredVariable {
            variable: 'C',
            position: 10
        }
    );
}

#[test]
fn test_repeated_variable() {
    let err = parse("f(A,B) = A^A").unwrap_err();
    assert!(matches!(
        err,
        NotationError::RepeatedVariable { variable: 'A', .. }
    ));
}

#[test]
fn test_declaration_checks() {
    assert_eq!(
        parse("f(B,C) = B").unwrap_err(),
        NotationError::UnexpectedFirstVariable {
            expected: 'A',
            found: 'B'
        }
    );
    assert_eq!(
        parse("f(A,C) = A").unwrap_err(),
        NotationError::NotSequential {
            previous: 'A',
            found: 'C'
        }
    );
    assert!(matches!(
        parse("f(AB) = A").unwrap_err(),
        NotationError::InvalidVariable { .. }
    ));
}

#[test]
fn test_empty_and_malformed() {
    assert_eq!(parse("").unwrap_err(), NotationError::Empty);
    assert!(matches!(
        parse("A + B").unwrap_err(),
        NotationError::InvalidSyntax { .. }
    ));
}

#[test]
fn test_parse_term() {
    let config = NotationConfig::default();
    assert_eq!(parse_term("A^BC", 3, &config).unwrap().to_string(), "101");
    assert_eq!(parse_term("^C", 3, &config).unwrap().to_string(), "xx0");
    assert_eq!(parse_term("", 2, &config).unwrap().to_string(), "xx");
    assert!(matches!(
        parse_term("AD", 3, &config).unwrap_err(),
        NotationError::UndeclaredVariable {
            variable: 'D',
            position: 1
        }
    ));
    assert!(matches!(
        parse_term("AB^", 3, &config).unwrap_err(),
        NotationError::InvalidSyntax {
            position: Some(2),
            ..
        }
    ));
    assert!(matches!(
        parse_term("BB", 3, &config).unwrap_err(),
        NotationError::RepeatedVariable { .. }
    ));
}

#[test]
fn test_read_function_skips_blank_lines() {
    let input = Cursor::new("\n   \nf(A,B) = A + B\nignored");
    let parsed = read_function(input, &NotationConfig::default()).unwrap();
    assert_eq!(bits(&parsed), vec!["1x", "x1"]);

    let err = read_function(Cursor::new("\n\n"), &NotationConfig::default()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_parsed_function_minimizer() {
    let parsed = parse("f(A,B,C) = ABC + AB^C + A^BC + A^B^C").unwrap();
    let mut qm = parsed.minimizer().unwrap();
    let covers = qm.minimize().unwrap();
    assert_eq!(covers.len(), 1);
    assert_eq!(NotationConfig::default().render_function(&covers[0]), "A");
}

#[test]
fn test_variable_names() {
    let config = NotationConfig::default();
    assert_eq!(config.variable_name(0), Some('A'));
    assert_eq!(config.variable_name(3), Some('D'));
    assert_eq!(config.variable_index('C'), Some(2));
    assert_eq!(config.variable_index('0'), None);
}
