//! SQL statement AST types.

use std::fmt;

use super::{
    comma_separated, DecimalLiteral, Expression, Ident, QualifiedName, StringLiteral,
};

/// The result of parsing one input: an optional statement and an optional
/// trailing semicolon.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Root {
    /// `None` for empty input (or a lone `;`).
    pub statement: Option<Statement>,
    pub semicolon: bool,
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stmt) = &self.statement {
            write!(f, "{stmt}")?;
        }
        if self.semicolon {
            f.write_str(";")?;
        }
        Ok(())
    }
}

/// A top-level SQL statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// `SELECT ...`
    Select(QuerySpecification),
    /// `SHOW TABLES LIKE ...`
    Show(ShowStatement),
    /// `DESCRIBE TABLES LIKE ... [COLUMNS LIKE ...]`
    Describe(DescribeStatement),
}

impl Statement {
    /// Returns true for data-manipulation statements (queries).
    #[must_use]
    pub const fn is_dml(&self) -> bool {
        matches!(self, Self::Select(_))
    }

    /// Returns true for metadata statements (`SHOW`, `DESCRIBE`).
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Show(_) | Self::Describe(_))
    }

    /// Returns the query if this is a `SELECT`.
    #[must_use]
    pub const fn as_query(&self) -> Option<&QuerySpecification> {
        match self {
            Self::Select(q) => Some(q),
            _ => None,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(q) => write!(f, "{q}"),
            Self::Show(s) => write!(f, "{s}"),
            Self::Describe(d) => write!(f, "{d}"),
        }
    }
}

/// `SELECT ... [FROM ...] [LIMIT ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuerySpecification {
    pub select: SelectClause,
    pub from: Option<FromClause>,
    pub limit: Option<LimitClause>,
}

impl fmt::Display for QuerySpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.select)?;
        if let Some(from) = &self.from {
            write!(f, " {from}")?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " {limit}")?;
        }
        Ok(())
    }
}

/// `ALL` or `DISTINCT` after `SELECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectSpec {
    All,
    Distinct,
}

impl SelectSpec {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Distinct => "DISTINCT",
        }
    }
}

/// `SELECT [ALL | DISTINCT] elements`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectClause {
    pub spec: Option<SelectSpec>,
    /// Whether the element list starts with `*`.
    pub star: bool,
    /// The elements after the optional `*`.
    pub elements: Vec<SelectElement>,
}

impl fmt::Display for SelectClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if let Some(spec) = self.spec {
            write!(f, "{} ", spec.as_str())?;
        }
        if self.star {
            f.write_str("*")?;
            if !self.elements.is_empty() {
                f.write_str(", ")?;
            }
        }
        write!(f, "{}", comma_separated(&self.elements))
    }
}

/// `expression [[AS] alias]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectElement {
    pub expr: Expression,
    pub alias: Option<Ident>,
}

impl fmt::Display for SelectElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// `FROM relation [WHERE ...] [GROUP BY ...] [HAVING ...] [ORDER BY ...]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FromClause {
    pub relation: Relation,
    pub where_clause: Option<Expression>,
    pub group_by: Vec<Expression>,
    pub having: Option<Expression>,
    pub order_by: Vec<OrderByElement>,
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {}", self.relation)?;
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", comma_separated(&self.group_by))?;
        }
        if let Some(expr) = &self.having {
            write!(f, " HAVING {expr}")?;
        }
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", comma_separated(&self.order_by))?;
        }
        Ok(())
    }
}

/// The source of rows in a `FROM` clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Relation {
    /// `table [[AS] alias]`
    Table {
        name: QualifiedName,
        alias: Option<Ident>,
    },
    /// `(query) [AS] alias`; the alias is mandatory.
    Subquery {
        query: Box<QuerySpecification>,
        alias: Ident,
    },
}

impl Relation {
    /// Returns the alias, if any.
    #[must_use]
    pub const fn alias(&self) -> Option<&Ident> {
        match self {
            Self::Table { alias, .. } => alias.as_ref(),
            Self::Subquery { alias, .. } => Some(alias),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { name, alias } => {
                write!(f, "{name}")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            Self::Subquery { query, alias } => write!(f, "({query}) AS {alias}"),
        }
    }
}

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderByElement {
    pub expr: Expression,
    /// `None` when neither `ASC` nor `DESC` was written.
    pub direction: Option<OrderDirection>,
    pub nulls: Option<NullOrdering>,
}

impl fmt::Display for OrderByElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.as_str())?;
        }
        if let Some(nulls) = self.nulls {
            write!(f, " {}", nulls.as_str())?;
        }
        Ok(())
    }
}

/// Which `LIMIT` spelling was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LimitSyntax {
    /// `LIMIT [offset,] limit`
    Comma,
    /// `LIMIT limit OFFSET offset`
    Offset,
}

/// A `LIMIT` clause. Both spellings produce the same `limit`/`offset` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LimitClause {
    pub limit: DecimalLiteral,
    pub offset: Option<DecimalLiteral>,
    pub syntax: LimitSyntax,
}

impl fmt::Display for LimitClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.offset, self.syntax) {
            (None, _) => write!(f, "LIMIT {}", self.limit),
            (Some(offset), LimitSyntax::Comma) => write!(f, "LIMIT {offset}, {}", self.limit),
            (Some(offset), LimitSyntax::Offset) => {
                write!(f, "LIMIT {} OFFSET {offset}", self.limit)
            }
        }
    }
}

/// Table or column pattern of `SHOW` / `DESCRIBE`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShowDescribePattern {
    /// A run of identifier and `%` tokens, such as `logs%` or `%`.
    CompatibleId(String),
    String(StringLiteral),
}

impl fmt::Display for ShowDescribePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompatibleId(s) => f.write_str(s),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// `SHOW TABLES LIKE pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShowStatement {
    pub table_filter: ShowDescribePattern,
}

impl fmt::Display for ShowStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHOW TABLES LIKE {}", self.table_filter)
    }
}

/// `DESCRIBE TABLES LIKE pattern [COLUMNS LIKE pattern]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DescribeStatement {
    pub table_filter: ShowDescribePattern,
    pub column_filter: Option<ShowDescribePattern>,
}

impl fmt::Display for DescribeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DESCRIBE TABLES LIKE {}", self.table_filter)?;
        if let Some(columns) = &self.column_filter {
            write!(f, " COLUMNS LIKE {columns}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_display_keeps_spelling() {
        let comma = LimitClause {
            limit: 10.into(),
            offset: Some(5.into()),
            syntax: LimitSyntax::Comma,
        };
        assert_eq!(comma.to_string(), "LIMIT 5, 10");
        let offset = LimitClause {
            syntax: LimitSyntax::Offset,
            ..comma
        };
        assert_eq!(offset.to_string(), "LIMIT 10 OFFSET 5");
    }

    #[test]
    fn test_describe_display() {
        let stmt = DescribeStatement {
            table_filter: ShowDescribePattern::CompatibleId(String::from("logs%")),
            column_filter: Some(ShowDescribePattern::String(StringLiteral::new("a%"))),
        };
        assert_eq!(
            stmt.to_string(),
            "DESCRIBE TABLES LIKE logs% COLUMNS LIKE 'a%'"
        );
    }

    #[test]
    fn test_statement_classification() {
        let show = Statement::Show(ShowStatement {
            table_filter: ShowDescribePattern::CompatibleId(String::from("%")),
        });
        assert!(show.is_admin());
        assert!(!show.is_dml());
        assert!(show.as_query().is_none());
    }
}
