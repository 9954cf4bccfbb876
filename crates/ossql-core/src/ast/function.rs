//! Function call AST types.

use std::fmt;

use super::{
    comma_separated, AllTupleFields, ConvertedDataType, DateTimeUnit, Expression, GetFormatType,
    HighlightFunction, OrderByElement, RelevanceFunction, ScoreRelevanceFunction,
};
use crate::lexer::{FunctionCategory, Keyword};

/// A function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FunctionCall {
    /// `NESTED(path.*)`
    NestedAll(AllTupleFields),
    /// `name(args)` for a scalar function name keyword.
    Scalar(ScalarFunctionCall),
    /// `CASE ... END` or `CAST(... AS ...)`.
    Specific(SpecificFunction),
    /// `fn(...) OVER (...)`
    Window(WindowFunctionClause),
    Aggregate(AggregateFunction),
    /// `agg(...) [ORDER BY ...] FILTER (WHERE ...)`
    FilteredAggregate(FilteredAggregation),
    ScoreRelevance(ScoreRelevanceFunction),
    Relevance(RelevanceFunction),
    Highlight(HighlightFunction),
    Position(PositionFunction),
    Extract(ExtractFunction),
    GetFormat(GetFormatFunction),
    Timestamp(TimestampFunction),
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestedAll(fields) => write!(f, "NESTED({fields})"),
            Self::Scalar(call) => write!(f, "{call}"),
            Self::Specific(call) => write!(f, "{call}"),
            Self::Window(call) => write!(f, "{call}"),
            Self::Aggregate(call) => write!(f, "{call}"),
            Self::FilteredAggregate(call) => write!(f, "{call}"),
            Self::ScoreRelevance(call) => write!(f, "{call}"),
            Self::Relevance(call) => write!(f, "{call}"),
            Self::Highlight(call) => write!(f, "{call}"),
            Self::Position(call) => write!(f, "{call}"),
            Self::Extract(call) => write!(f, "{call}"),
            Self::GetFormat(call) => write!(f, "{call}"),
            Self::Timestamp(call) => write!(f, "{call}"),
        }
    }
}

/// A call to a scalar function such as `abs(x)` or `date_format(d, '%Y')`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScalarFunctionCall {
    /// The function name; always a scalar function name keyword.
    pub name: Keyword,
    pub args: Vec<Expression>,
}

impl ScalarFunctionCall {
    /// Returns the family of the function.
    #[must_use]
    pub const fn category(&self) -> Option<FunctionCategory> {
        self.name.function_category()
    }
}

impl fmt::Display for ScalarFunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, comma_separated(&self.args))
    }
}

/// `CASE` and `CAST`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SpecificFunction {
    Case(CaseFunction),
    Cast {
        expr: Box<Expression>,
        data_type: ConvertedDataType,
    },
}

impl fmt::Display for SpecificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Case(case) => write!(f, "{case}"),
            Self::Cast { expr, data_type } => write!(f, "CAST({expr} AS {data_type})"),
        }
    }
}

/// `CASE [operand] WHEN ... THEN ... [ELSE ...] END`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseFunction {
    /// The value compared against each `WHEN`; absent when every `WHEN`
    /// carries its own condition.
    pub operand: Option<Box<Expression>>,
    /// At least one alternative.
    pub alternatives: Vec<CaseAlternative>,
    pub else_result: Option<Box<Expression>>,
}

impl fmt::Display for CaseFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CASE")?;
        if let Some(operand) = &self.operand {
            write!(f, " {operand}")?;
        }
        for alt in &self.alternatives {
            write!(f, " {alt}")?;
        }
        if let Some(else_result) = &self.else_result {
            write!(f, " ELSE {else_result}")?;
        }
        f.write_str(" END")
    }
}

/// `WHEN condition THEN result`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseAlternative {
    pub condition: Expression,
    pub result: Expression,
}

impl fmt::Display for CaseAlternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WHEN {} THEN {}", self.condition, self.result)
    }
}

/// An aggregate call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AggregateFunction {
    /// `name(arg)`; `name` is an aggregation function name keyword.
    Regular { name: Keyword, arg: Box<Expression> },
    /// `COUNT(*)`
    CountStar,
    /// `COUNT(DISTINCT arg)`
    DistinctCount { arg: Box<Expression> },
}

impl AggregateFunction {
    /// Returns the aggregation function name.
    #[must_use]
    pub const fn name(&self) -> Keyword {
        match self {
            Self::Regular { name, .. } => *name,
            Self::CountStar | Self::DistinctCount { .. } => Keyword::Count,
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular { name, arg } => write!(f, "{name}({arg})"),
            Self::CountStar => f.write_str("COUNT(*)"),
            Self::DistinctCount { arg } => write!(f, "COUNT(DISTINCT {arg})"),
        }
    }
}

/// `agg(...) [ORDER BY ...] FILTER (WHERE condition)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FilteredAggregation {
    pub function: AggregateFunction,
    pub order_by: Vec<OrderByElement>,
    pub filter: Box<Expression>,
}

impl fmt::Display for FilteredAggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)?;
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", comma_separated(&self.order_by))?;
        }
        write!(f, " FILTER(WHERE {})", self.filter)
    }
}

/// `function OVER (...)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindowFunctionClause {
    pub function: WindowFunction,
    pub over: OverClause,
}

impl fmt::Display for WindowFunctionClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.function, self.over)
    }
}

/// The function part of a window call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WindowFunction {
    /// `ROW_NUMBER()`, `RANK()`, `DENSE_RANK()`.
    Ranking { name: Keyword, args: Vec<Expression> },
    Aggregate(AggregateFunction),
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranking { name, args } => write!(f, "{name}({})", comma_separated(args)),
            Self::Aggregate(agg) => write!(f, "{agg}"),
        }
    }
}

/// `OVER ([PARTITION BY ...] [ORDER BY ...])`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OverClause {
    pub partition_by: Vec<Expression>,
    pub order_by: Vec<OrderByElement>,
}

impl fmt::Display for OverClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OVER (")?;
        if !self.partition_by.is_empty() {
            write!(f, "PARTITION BY {}", comma_separated(&self.partition_by))?;
            if !self.order_by.is_empty() {
                f.write_str(" ")?;
            }
        }
        if !self.order_by.is_empty() {
            write!(f, "ORDER BY {}", comma_separated(&self.order_by))?;
        }
        f.write_str(")")
    }
}

/// `POSITION(substring IN string)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionFunction {
    pub substring: Box<Expression>,
    pub string: Box<Expression>,
}

impl fmt::Display for PositionFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POSITION({} IN {})", self.substring, self.string)
    }
}

/// `EXTRACT(part FROM source)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtractFunction {
    pub part: DateTimeUnit,
    pub source: Box<Expression>,
}

impl fmt::Display for ExtractFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EXTRACT({} FROM {})", self.part, self.source)
    }
}

/// `GET_FORMAT(type, locale)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GetFormatFunction {
    pub format_type: GetFormatType,
    pub locale: Box<Expression>,
}

impl fmt::Display for GetFormatFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET_FORMAT({}, {})", self.format_type, self.locale)
    }
}

/// `TIMESTAMPADD(unit, amount, ts)` / `TIMESTAMPDIFF(unit, start, end)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimestampFunction {
    pub name: Keyword,
    /// Always a simple unit (see [`DateTimeUnit::is_simple`]).
    pub unit: DateTimeUnit,
    pub first: Box<Expression>,
    pub second: Box<Expression>,
}

impl fmt::Display for TimestampFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.name, self.unit, self.first, self.second
        )
    }
}
