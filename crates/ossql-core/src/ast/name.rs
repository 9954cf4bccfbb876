//! Identifiers and qualified names.

use std::fmt;

use crate::lexer::{Keyword, Span};

/// How an identifier was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IdentKind {
    /// A bare identifier (`name`, `@timestamp`).
    Plain,
    /// A bare identifier preceded by `.` (nested-field syntax).
    DotPrefixed,
    /// A backtick-quoted identifier.
    Backtick,
    /// A keyword used in identifier position (`type`, `count`, `date`).
    Keyword(Keyword),
}

/// An identifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ident {
    /// The identifier text, without quotes or leading dot.
    pub value: String,
    /// The surface form.
    pub kind: IdentKind,
    /// The source span.
    pub span: Span,
}

impl Ident {
    /// Creates a plain identifier with an empty span.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: IdentKind::Plain,
            span: Span::default(),
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IdentKind::Plain | IdentKind::Keyword(_) => f.write_str(&self.value),
            IdentKind::DotPrefixed => write!(f, ".{}", self.value),
            IdentKind::Backtick => write!(f, "`{}`", self.value.replace('`', "``")),
        }
    }
}

/// A dot-separated name such as `table.column` or `address.city.zip`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QualifiedName {
    /// The name parts, left to right. Never empty.
    pub parts: Vec<Ident>,
}

impl QualifiedName {
    /// Creates a qualified name from its parts.
    #[must_use]
    pub const fn new(parts: Vec<Ident>) -> Self {
        Self { parts }
    }

    /// Returns the part texts, left to right.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(Ident::as_str).collect()
    }

    /// Returns the last part (the column in `table.column`).
    #[must_use]
    pub fn last(&self) -> Option<&Ident> {
        self.parts.last()
    }

    /// Returns the span covering all parts.
    #[must_use]
    pub fn span(&self) -> Span {
        match (self.parts.first(), self.parts.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::default(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// `path.*`, the argument of `nested(path.*)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AllTupleFields {
    pub path: QualifiedName,
}

impl fmt::Display for AllTupleFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.*", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ident_forms() {
        let mut ident = Ident::new("a`b");
        assert_eq!(ident.to_string(), "a`b");
        ident.kind = IdentKind::Backtick;
        assert_eq!(ident.to_string(), "`a``b`");
        ident.kind = IdentKind::DotPrefixed;
        assert_eq!(ident.to_string(), ".a`b");
    }

    #[test]
    fn display_qualified_name() {
        let name = QualifiedName::new(vec![Ident::new("t"), Ident::new("c")]);
        assert_eq!(name.to_string(), "t.c");
        assert_eq!(name.names(), vec!["t", "c"]);
        let all = AllTupleFields { path: name };
        assert_eq!(all.to_string(), "t.c.*");
    }
}
