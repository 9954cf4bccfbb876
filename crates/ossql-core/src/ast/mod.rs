//! Abstract Syntax Tree (AST) types for OpenSearch SQL statements.
//!
//! Every node implements [`std::fmt::Display`], rendering canonical SQL that
//! parses back to an equal tree.

mod expression;
mod function;
mod literal;
mod name;
mod relevance;
mod statement;
mod types;

use std::fmt;

pub use expression::{ComparisonOp, Expression, ExpressionAtom, MathOp, Predicate};
pub use function::{
    AggregateFunction, CaseAlternative, CaseFunction, ExtractFunction, FilteredAggregation,
    FunctionCall, GetFormatFunction, OverClause, PositionFunction, ScalarFunctionCall,
    SpecificFunction, TimestampFunction, WindowFunction, WindowFunctionClause,
};
pub use literal::{
    Constant, DatetimeKind, DatetimeLiteral, DecimalLiteral, IntervalLiteral, Sign, StringLiteral,
};
pub use name::{AllTupleFields, Ident, IdentKind, QualifiedName};
pub use relevance::{
    AlternateMultiMatchArgName, AlternateMultiMatchField, AlternateMultiMatchQuery,
    HighlightArg, HighlightArgName, HighlightFunction, RelevanceArg, RelevanceArgName,
    RelevanceArgValue, RelevanceField, RelevanceFieldAndWeight, RelevanceFieldWeight,
    RelevanceFunction, ScoreRelevanceFunction,
};
pub use statement::{
    DescribeStatement, FromClause, LimitClause, LimitSyntax, NullOrdering, OrderByElement,
    OrderDirection, QuerySpecification, Relation, Root, SelectClause, SelectElement, SelectSpec,
    ShowDescribePattern, ShowStatement, Statement,
};
pub use types::{ConvertedDataType, DateTimeUnit, GetFormatType};

/// Displays a slice as `a, b, c`.
pub(crate) struct CommaSeparated<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for CommaSeparated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

pub(crate) const fn comma_separated<T: fmt::Display>(items: &[T]) -> CommaSeparated<'_, T> {
    CommaSeparated(items)
}
