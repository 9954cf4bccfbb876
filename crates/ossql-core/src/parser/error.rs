//! Parser error types.

use std::fmt;

use super::Rule;
use crate::lexer::{Span, TokenKind};

/// The category of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseErrorKind {
    /// No alternative of the active rule matches the lookahead.
    NoViableAlternative,
    /// A specific token was required and another was found.
    MismatchedToken,
    /// The tokens matched but a semantic check on them failed (an unknown
    /// relevance option, a compound unit where only simple units are allowed).
    FailedPredicate,
    /// Rule nesting exceeded the configured maximum depth.
    RecursionLimit,
    /// The token source produced an error token.
    Lexical,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoViableAlternative => "no viable alternative",
            Self::MismatchedToken => "mismatched token",
            Self::FailedPredicate => "failed predicate",
            Self::RecursionLimit => "recursion limit",
            Self::Lexical => "lexical error",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The innermost rule active when the error was raised.
    pub rule: Rule,
    /// The error message.
    pub message: String,
    /// The location of the offending token.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: usize,
    /// 1-based column of `span.start`, in characters.
    pub column: usize,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates an error at `span`, resolving line and column against `source`.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        rule: Rule,
        message: impl Into<String>,
        span: Span,
        source: &str,
    ) -> Self {
        let (line, column) = span.location(source);
        Self {
            kind,
            rule,
            message: message.into(),
            span,
            line,
            column,
            expected: None,
            found: None,
        }
    }

    /// Creates an "expected X, found Y" error.
    ///
    /// An error token in the found position turns the error into a
    /// [`ParseErrorKind::Lexical`] one.
    #[must_use]
    pub fn unexpected(
        rule: Rule,
        expected: impl Into<String>,
        found: TokenKind,
        span: Span,
        source: &str,
    ) -> Self {
        let expected: String = expected.into();
        let (kind, message) = match &found {
            TokenKind::Error(msg) => (ParseErrorKind::Lexical, format!("{msg} in {rule}")),
            other => (
                ParseErrorKind::MismatchedToken,
                format!("expected {expected}, found {} in {rule}", other.describe()),
            ),
        };
        Self {
            expected: Some(expected),
            found: Some(found),
            ..Self::new(kind, rule, message, span, source)
        }
    }

    /// Returns the same error with a different kind. Lexical errors keep
    /// their kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ParseErrorKind) -> Self {
        if self.kind != ParseErrorKind::Lexical {
            self.kind = kind;
        }
        self
    }
}
