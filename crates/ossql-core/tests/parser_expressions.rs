//! Boolean connectives, predicates and arithmetic precedence.

mod common;
use common::*;

use ossql_core::ast::{ComparisonOp, Expression, ExpressionAtom, MathOp, Predicate};

fn predicate(expr: &Expression) -> &Predicate {
    expr.as_predicate()
        .unwrap_or_else(|| panic!("expected a predicate, got {expr:?}"))
}

// ===================================================================
// Boolean connectives
// ===================================================================

#[test]
fn and_binds_tighter_than_or() {
    match parse_where("a = 1 OR b = 2 AND c = 3") {
        Expression::Or { left, right } => {
            assert_eq!(left.to_string(), "a = 1");
            assert!(matches!(*right, Expression::And { .. }));
        }
        other => panic!("expected OR, got {other:?}"),
    }
}

#[test]
fn and_is_left_associative() {
    match parse_where("a AND b AND c") {
        Expression::And { left, right } => {
            assert!(matches!(*left, Expression::And { .. }));
            assert_eq!(right.to_string(), "c");
        }
        other => panic!("expected AND, got {other:?}"),
    }
}

#[test]
fn not_applies_to_the_next_predicate() {
    match parse_where("NOT a = 1 AND b = 2") {
        Expression::And { left, .. } => match *left {
            Expression::Not(inner) => assert_eq!(inner.to_string(), "a = 1"),
            other => panic!("expected NOT, got {other:?}"),
        },
        other => panic!("expected AND, got {other:?}"),
    }
}

#[test]
fn double_not() {
    match parse_where("NOT NOT a") {
        Expression::Not(inner) => assert!(matches!(*inner, Expression::Not(_))),
        other => panic!("expected NOT, got {other:?}"),
    }
}

#[test]
fn parentheses_override_precedence() {
    match parse_where("(a = 1 OR b = 2) AND c = 3") {
        Expression::And { left, .. } => {
            assert!(matches!(
                left.as_atom(),
                Some(ExpressionAtom::Nested(inner)) if matches!(**inner, Expression::Or { .. })
            ));
        }
        other => panic!("expected AND, got {other:?}"),
    }
}

// ===================================================================
// Comparison
// ===================================================================

#[test]
fn comparison_operators() {
    let cases = [
        ("a = 1", ComparisonOp::Eq),
        ("a > 1", ComparisonOp::Gt),
        ("a < 1", ComparisonOp::Lt),
        ("a >= 1", ComparisonOp::GtEq),
        ("a <= 1", ComparisonOp::LtEq),
        ("a <> 1", ComparisonOp::LtGt),
        ("a != 1", ComparisonOp::NotEq),
    ];
    for (sql, expected) in cases {
        match predicate(&parse_where(sql)) {
            Predicate::Comparison { op, .. } => assert_eq!(*op, expected, "{sql}"),
            other => panic!("expected comparison for {sql}, got {other:?}"),
        }
    }
}

#[test]
fn two_token_operators_may_be_spaced() {
    assert_eq!(parse_where("a > = 1").to_string(), "a >= 1");
    assert_eq!(parse_where("a < > 1").to_string(), "a <> 1");
}

#[test]
fn comparison_is_right_recursive() {
    match predicate(&parse_where("a = b = c")) {
        Predicate::Comparison { left, right, .. } => {
            assert_eq!(left.to_string(), "a");
            assert!(matches!(**right, Predicate::Comparison { .. }));
        }
        other => panic!("expected comparison, got {other:?}"),
    }
}

// ===================================================================
// Other predicates
// ===================================================================

#[test]
fn is_null() {
    assert!(matches!(
        predicate(&parse_where("a IS NULL")),
        Predicate::IsNull { negated: false, .. }
    ));
    assert!(matches!(
        predicate(&parse_where("a IS NOT NULL")),
        Predicate::IsNull { negated: true, .. }
    ));
}

#[test]
fn between_simple() {
    match predicate(&parse_where("age BETWEEN 18 AND 65")) {
        Predicate::Between {
            negated, low, high, ..
        } => {
            assert!(!negated);
            assert_eq!(low.to_string(), "18");
            assert_eq!(high.to_string(), "65");
        }
        other => panic!("expected BETWEEN, got {other:?}"),
    }
}

#[test]
fn between_and_is_not_boolean_and() {
    match parse_where("a BETWEEN 1 AND 2 AND b = 3") {
        Expression::And { left, right } => {
            assert!(matches!(
                left.as_predicate(),
                Some(Predicate::Between { .. })
            ));
            assert_eq!(right.to_string(), "b = 3");
        }
        other => panic!("expected AND, got {other:?}"),
    }
}

#[test]
fn not_between() {
    assert!(matches!(
        predicate(&parse_where("a NOT BETWEEN 1 AND 2")),
        Predicate::Between { negated: true, .. }
    ));
}

#[test]
fn like_and_not_like() {
    assert!(matches!(
        predicate(&parse_where("name LIKE 'J%'")),
        Predicate::Like { negated: false, .. }
    ));
    assert!(matches!(
        predicate(&parse_where("name NOT LIKE 'J%'")),
        Predicate::Like { negated: true, .. }
    ));
}

#[test]
fn regexp() {
    assert_eq!(
        parse_where("name REGEXP '[a-z]+'").to_string(),
        "name REGEXP '[a-z]+'"
    );
}

#[test]
fn in_list() {
    match predicate(&parse_where("state IN ('CA', 'NY', 'TX')")) {
        Predicate::In { negated, list, .. } => {
            assert!(!negated);
            assert_eq!(list.len(), 3);
        }
        other => panic!("expected IN, got {other:?}"),
    }
    assert!(matches!(
        predicate(&parse_where("a NOT IN (1, 2)")),
        Predicate::In { negated: true, .. }
    ));
}

#[test]
fn in_requires_parenthesized_list() {
    parse_err("SELECT a FROM t WHERE a IN 1");
}

#[test]
fn comparison_binds_tighter_than_like() {
    match predicate(&parse_where("a LIKE b = c")) {
        Predicate::Like { right, .. } => {
            assert!(matches!(**right, Predicate::Comparison { .. }));
        }
        other => panic!("expected LIKE, got {other:?}"),
    }
}

#[test]
fn is_null_applies_to_comparison() {
    match predicate(&parse_where("a = b IS NULL")) {
        Predicate::IsNull { expr, .. } => {
            assert!(matches!(**expr, Predicate::Comparison { .. }));
        }
        other => panic!("expected IS NULL, got {other:?}"),
    }
}

// ===================================================================
// Arithmetic
// ===================================================================

#[test]
fn multiplication_binds_tighter_than_addition() {
    match parse_expr("a + b * c").as_atom() {
        Some(ExpressionAtom::Math { op, right, .. }) => {
            assert_eq!(*op, MathOp::Add);
            assert!(matches!(
                **right,
                ExpressionAtom::Math { op: MathOp::Mul, .. }
            ));
        }
        other => panic!("expected math, got {other:?}"),
    }
}

#[test]
fn subtraction_is_left_associative() {
    match parse_expr("a - b - c").as_atom() {
        Some(ExpressionAtom::Math { left, op, right }) => {
            assert_eq!(*op, MathOp::Sub);
            assert_eq!(left.to_string(), "a - b");
            assert_eq!(right.to_string(), "c");
        }
        other => panic!("expected math, got {other:?}"),
    }
}

#[test]
fn modulo_and_division() {
    assert_eq!(parse_expr("a % 2 / b").to_string(), "a % 2 / b");
}

#[test]
fn hyphenated_name_is_one_identifier() {
    let expr = parse_expr("a-b");
    assert_eq!(
        expr.as_column().map(|name| name.names()),
        Some(vec!["a-b"])
    );
}

#[test]
fn arithmetic_inside_comparison() {
    match predicate(&parse_where("price * qty > total + 1")) {
        Predicate::Comparison { left, right, .. } => {
            assert_eq!(left.to_string(), "price * qty");
            assert_eq!(right.to_string(), "total + 1");
        }
        other => panic!("expected comparison, got {other:?}"),
    }
}

#[test]
fn negative_operand() {
    assert_eq!(parse_expr("a - -1").to_string(), "a - -1");
}

// ===================================================================
// Columns
// ===================================================================

#[test]
fn qualified_and_quoted_columns() {
    assert_eq!(
        parse_expr("t.address.city").as_column().map(|n| n.names()),
        Some(vec!["t", "address", "city"])
    );
    assert_eq!(
        parse_expr("`first name`").as_column().map(|n| n.names()),
        Some(vec!["first name"])
    );
    assert_eq!(parse_expr(".address.city").to_string(), ".address.city");
}

#[test]
fn expression_in_select_list() {
    let q = parse_query("SELECT a = 1 AND b, NOT c FROM t");
    assert_eq!(q.select.elements.len(), 2);
    assert_eq!(q.select.elements[1].expr.to_string(), "NOT c");
}
