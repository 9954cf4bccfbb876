#![allow(dead_code)]

use ossql_core::ast::{Expression, QuerySpecification, Root, Statement};
use ossql_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Root {
    Parser::new(sql)
        .parse_root()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_root()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_statement(sql: &str) -> Statement {
    parse(sql)
        .statement
        .unwrap_or_else(|| panic!("Expected a statement in: {sql}"))
}

pub fn parse_query(sql: &str) -> QuerySpecification {
    match parse_statement(sql) {
        Statement::Select(q) => q,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

/// Parses `SELECT <expr>` and returns the single select element.
pub fn parse_expr(expr: &str) -> Expression {
    let mut query = parse_query(&format!("SELECT {expr}"));
    assert_eq!(query.select.elements.len(), 1, "Expected one element: {expr}");
    query.select.elements.remove(0).expr
}

/// Parses `SELECT a FROM t WHERE <condition>` and returns the condition.
pub fn parse_where(condition: &str) -> Expression {
    let query = parse_query(&format!("SELECT a FROM t WHERE {condition}"));
    query
        .from
        .and_then(|from| from.where_clause)
        .unwrap_or_else(|| panic!("Expected a WHERE clause: {condition}"))
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() can be re-parsed and yields the same
/// string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
