//! Error kinds, messages, rules and positions.

mod common;
use common::*;

use ossql_core::{ParseErrorKind, Rule};

#[test]
fn missing_select_elements() {
    let err = parse_err("SELECT FROM t");
    assert_eq!(err.kind, ParseErrorKind::NoViableAlternative);
    assert_eq!(err.rule, Rule::SelectElements);
    assert_eq!((err.line, err.column), (1, 8));
    assert_eq!(
        err.to_string(),
        "expected an expression, found FROM in selectElements at line 1, column 8"
    );
}

#[test]
fn missing_table_name() {
    let err = parse_err("SELECT a FROM");
    assert_eq!(err.kind, ParseErrorKind::NoViableAlternative);
    assert_eq!(err.rule, Rule::Ident);
    assert!(err.message.contains("end of input"), "{}", err.message);
}

#[test]
fn missing_where_condition() {
    let err = parse_err("SELECT a FROM t WHERE");
    assert_eq!(err.rule, Rule::ExpressionAtom);
    assert_eq!(err.expected.as_deref(), Some("an expression"));
}

#[test]
fn missing_closing_paren() {
    let err = parse_err("SELECT (a + 1 FROM t");
    assert_eq!(err.kind, ParseErrorKind::MismatchedToken);
    assert!(err.message.contains("')'"), "{}", err.message);
}

#[test]
fn trailing_comma_in_select_list() {
    let err = parse_err("SELECT a, FROM t");
    assert_eq!(err.rule, Rule::SelectElements);
}

#[test]
fn position_on_later_line() {
    let err = parse_err("SELECT a,\n  b\nFROM t\nWHERE = 1");
    assert_eq!(err.line, 4);
    assert_eq!(err.column, 7);
}

#[test]
fn lexical_error() {
    let err = parse_err("SELECT 'unterminated");
    assert_eq!(err.kind, ParseErrorKind::Lexical);
    assert!(err.message.contains("Unterminated"), "{}", err.message);
}

#[test]
fn unexpected_character() {
    let err = parse_err("SELECT a FROM t WHERE a # 1");
    assert_eq!(err.kind, ParseErrorKind::Lexical);
}

#[test]
fn keyword_cannot_be_a_column() {
    let err = parse_err("SELECT a FROM t WHERE select = 1");
    assert_eq!(err.rule, Rule::ExpressionAtom);
}

#[test]
fn missing_limit_count() {
    let err = parse_err("SELECT a FROM t LIMIT");
    assert_eq!(err.rule, Rule::DecimalLiteral);
}

#[test]
fn found_token_is_recorded() {
    let err = parse_err("SELECT a FROM t GROUP a");
    assert_eq!(err.found.map(|f| f.describe()).as_deref(), Some("a"));
}

#[test]
fn error_converts_to_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(parse_err("SELECT"));
    assert!(err.to_string().contains("selectElements"));
}
