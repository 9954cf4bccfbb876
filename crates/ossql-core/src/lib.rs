//! # ossql-core
//!
//! A parser front end for the OpenSearch SQL dialect.
//!
//! This crate provides:
//! - A lexer with the dialect's case-insensitive keyword vocabulary
//! - A hand-written recursive descent parser with precedence climbing for
//!   boolean, predicate and arithmetic expressions
//! - An owned AST whose `Display` output is canonical SQL
//! - Relevance-search syntax: `match`, `multi_match`, `query_string`, the
//!   infix `field = match_query(...)` forms, `score` and `highlight`
//! - A [`visitor::Visitor`] for read-only traversal
//!
//! ## Parsing
//!
//! ```rust
//! use ossql_core::ast::Statement;
//!
//! let root = ossql_core::parse(
//!     "SELECT name, COUNT(*) FROM logs-* WHERE match(message, 'timeout') GROUP BY name",
//! )
//! .unwrap();
//!
//! let Some(Statement::Select(query)) = &root.statement else {
//!     panic!("expected a query");
//! };
//! assert_eq!(query.select.elements.len(), 2);
//! ```
//!
//! ## Errors
//!
//! Errors name the innermost grammar rule and the position of the offending
//! token:
//!
//! ```rust
//! let err = ossql_core::parse("SELECT FROM t").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "expected an expression, found FROM in selectElements at line 1, column 8"
//! );
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod visitor;

pub use ast::{Expression, Root, Statement};
pub use lexer::{Keyword, Lexer, Token, TokenKind};
pub use parser::{
    Batch, ParseError, ParseErrorKind, Parser, ParserOptions, Rule, DEFAULT_MAX_DEPTH,
};

/// Parses a single statement with default options.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse(sql: &str) -> Result<Root, ParseError> {
    Parser::new(sql).parse_root()
}

/// Parses a `;`-separated batch, skipping statements that fail to parse.
#[must_use]
pub fn parse_batch(sql: &str) -> Batch {
    Parser::new(sql).parse_batch()
}
