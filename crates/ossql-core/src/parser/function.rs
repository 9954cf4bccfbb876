//! Function call parsing.
//!
//! The call form is chosen from the name keyword. Two forms need a trial
//! parse: `NESTED(path.*)` shares its prefix with the scalar `NESTED(expr)`,
//! and an aggregate followed by `ORDER BY` is only a filtered aggregation if
//! a `FILTER` clause comes after the ordering.

use super::decision::Decision;
use super::{ParseError, Parser, Rule};
use crate::ast::{
    AggregateFunction, AllTupleFields, CaseAlternative, CaseFunction, ConvertedDataType,
    DateTimeUnit, Expression, ExtractFunction, FilteredAggregation, FunctionCall,
    GetFormatFunction, GetFormatType, OverClause, PositionFunction, ScalarFunctionCall,
    SpecificFunction, TimestampFunction, WindowFunction, WindowFunctionClause,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    pub(crate) fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        let _rule = self.enter(Rule::FunctionCall)?;
        let TokenKind::Keyword(name) = *self.kind() else {
            return Err(self.no_viable("a function name"));
        };

        match name {
            Keyword::Nested => {
                let all = self.speculate(Decision::NestedAllFields, Self::parse_nested_all)?;
                match all {
                    Some(fields) => Ok(FunctionCall::NestedAll(fields)),
                    None => Ok(FunctionCall::Scalar(self.parse_scalar_function_call()?)),
                }
            }
            Keyword::Case | Keyword::Cast => {
                Ok(FunctionCall::Specific(self.parse_specific_function()?))
            }
            Keyword::Highlight => Ok(FunctionCall::Highlight(self.parse_highlight_function()?)),
            Keyword::Position => Ok(FunctionCall::Position(self.parse_position_function()?)),
            Keyword::Extract => Ok(FunctionCall::Extract(self.parse_extract_function()?)),
            Keyword::GetFormat => Ok(FunctionCall::GetFormat(self.parse_get_format_function()?)),
            kw if kw.is_ranking_function_name() => {
                Ok(FunctionCall::Window(self.parse_window_function_clause()?))
            }
            kw if kw.is_aggregation_function_name() => self.parse_aggregate_call(),
            kw if kw.is_timestamp_function_name() => {
                Ok(FunctionCall::Timestamp(self.parse_timestamp_function()?))
            }
            kw if kw.is_score_relevance_function_name() => Ok(FunctionCall::ScoreRelevance(
                self.parse_score_relevance_function()?,
            )),
            kw if kw.is_no_field_relevance_function_name()
                || kw.is_single_field_relevance_function_name()
                || kw.is_multi_field_relevance_function_name() =>
            {
                Ok(FunctionCall::Relevance(self.parse_relevance_function()?))
            }
            kw if kw.is_scalar_function_name() => {
                Ok(FunctionCall::Scalar(self.parse_scalar_function_call()?))
            }
            _ => Err(self.no_viable("a function name")),
        }
    }

    /// `NESTED ( path . * )`
    fn parse_nested_all(&mut self) -> Result<AllTupleFields, ParseError> {
        let _rule = self.enter(Rule::NestedAllFunctionCall)?;
        self.expect_keyword(Keyword::Nested)?;
        self.expect(&TokenKind::LeftParen)?;
        let fields = {
            let _rule = self.enter(Rule::AllTupleFields)?;
            let path = self.parse_qualified_name()?;
            self.expect(&TokenKind::Dot)?;
            self.expect(&TokenKind::Star)?;
            AllTupleFields { path }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(fields)
    }

    fn parse_scalar_function_call(&mut self) -> Result<ScalarFunctionCall, ParseError> {
        let _rule = self.enter(Rule::ScalarFunctionCall)?;
        let name = match self.kind() {
            TokenKind::Keyword(kw) if kw.is_scalar_function_name() => *kw,
            _ => return Err(self.no_viable("a scalar function name")),
        };
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let args = self.parse_function_args()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(ScalarFunctionCall { name, args })
    }

    /// Zero or more comma-separated arguments, up to (not including) `)`.
    fn parse_function_args(&mut self) -> Result<Vec<Expression>, ParseError> {
        let _rule = self.enter(Rule::FunctionArgs)?;
        let mut args = Vec::new();
        if self.check(&TokenKind::RightParen) {
            return Ok(args);
        }
        args.push(self.parse_function_arg()?);
        while self.eat(&TokenKind::Comma) {
            args.push(self.parse_function_arg()?);
        }
        Ok(args)
    }

    pub(crate) fn parse_function_arg(&mut self) -> Result<Expression, ParseError> {
        let _rule = self.enter(Rule::FunctionArg)?;
        self.parse_expression(0)
    }

    // ===================================================================
    // CASE and CAST
    // ===================================================================

    fn parse_specific_function(&mut self) -> Result<SpecificFunction, ParseError> {
        let _rule = self.enter(Rule::SpecificFunction)?;
        if self.check_keyword(Keyword::Cast) {
            return self.parse_cast();
        }

        self.expect_keyword(Keyword::Case)?;
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        let mut alternatives = Vec::new();
        while self.check_keyword(Keyword::When) {
            alternatives.push(self.parse_case_alternative()?);
        }
        if alternatives.is_empty() {
            return Err(self.unexpected("WHEN"));
        }

        let else_result = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_function_arg()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;
        Ok(SpecificFunction::Case(CaseFunction {
            operand,
            alternatives,
            else_result,
        }))
    }

    fn parse_case_alternative(&mut self) -> Result<CaseAlternative, ParseError> {
        let _rule = self.enter(Rule::CaseFuncAlternative)?;
        self.expect_keyword(Keyword::When)?;
        let condition = self.parse_function_arg()?;
        self.expect_keyword(Keyword::Then)?;
        let result = self.parse_function_arg()?;
        Ok(CaseAlternative { condition, result })
    }

    /// `CAST ( expression AS type )`
    fn parse_cast(&mut self) -> Result<SpecificFunction, ParseError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(&TokenKind::LeftParen)?;
        let expr = Box::new(self.parse_expression(0)?);
        self.expect_keyword(Keyword::As)?;
        let data_type = {
            let _rule = self.enter(Rule::ConvertedDataType)?;
            let data_type = match self.kind() {
                TokenKind::Keyword(kw) => ConvertedDataType::from_keyword(*kw),
                _ => None,
            };
            match data_type {
                Some(data_type) => {
                    self.advance();
                    data_type
                }
                None => return Err(self.no_viable("a data type")),
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(SpecificFunction::Cast { expr, data_type })
    }

    // ===================================================================
    // Aggregates and windows
    // ===================================================================

    /// An aggregate, optionally followed by `OVER (...)` or by an optional
    /// `ORDER BY` and a `FILTER` clause.
    fn parse_aggregate_call(&mut self) -> Result<FunctionCall, ParseError> {
        let function = self.parse_aggregate_function()?;

        if self.check_keyword(Keyword::Over) {
            let over = self.parse_over_clause()?;
            return Ok(FunctionCall::Window(WindowFunctionClause {
                function: WindowFunction::Aggregate(function),
                over,
            }));
        }
        if self.check_keyword(Keyword::Filter) {
            let filter = self.parse_filter_clause()?;
            return Ok(FunctionCall::FilteredAggregate(FilteredAggregation {
                function,
                order_by: Vec::new(),
                filter,
            }));
        }
        if self.check_keyword(Keyword::Order) {
            let ordered = self.speculate(Decision::FilteredAggregation, |p| {
                let _rule = p.enter(Rule::FilteredAggregationFunctionCall)?;
                let order_by = p.parse_order_by_clause()?;
                let filter = p.parse_filter_clause()?;
                Ok((order_by, filter))
            })?;
            if let Some((order_by, filter)) = ordered {
                return Ok(FunctionCall::FilteredAggregate(FilteredAggregation {
                    function,
                    order_by,
                    filter,
                }));
            }
        }
        Ok(FunctionCall::Aggregate(function))
    }

    fn parse_aggregate_function(&mut self) -> Result<AggregateFunction, ParseError> {
        let _rule = self.enter(Rule::AggregateFunction)?;
        let name = match self.kind() {
            TokenKind::Keyword(kw) if kw.is_aggregation_function_name() => *kw,
            _ => return Err(self.no_viable("an aggregate function")),
        };
        self.advance();
        self.expect(&TokenKind::LeftParen)?;

        let function = if name == Keyword::Count && self.eat(&TokenKind::Star) {
            AggregateFunction::CountStar
        } else if name == Keyword::Count && self.eat_keyword(Keyword::Distinct) {
            AggregateFunction::DistinctCount {
                arg: Box::new(self.parse_function_arg()?),
            }
        } else {
            AggregateFunction::Regular {
                name,
                arg: Box::new(self.parse_function_arg()?),
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(function)
    }

    /// `FILTER ( WHERE expression )`
    fn parse_filter_clause(&mut self) -> Result<Box<Expression>, ParseError> {
        let _rule = self.enter(Rule::FilterClause)?;
        self.expect_keyword(Keyword::Filter)?;
        self.expect(&TokenKind::LeftParen)?;
        self.expect_keyword(Keyword::Where)?;
        let condition = self.parse_expression(0)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Box::new(condition))
    }

    fn parse_window_function_clause(&mut self) -> Result<WindowFunctionClause, ParseError> {
        let _rule = self.enter(Rule::WindowFunctionClause)?;
        let function = self.parse_window_function()?;
        let over = self.parse_over_clause()?;
        Ok(WindowFunctionClause { function, over })
    }

    fn parse_window_function(&mut self) -> Result<WindowFunction, ParseError> {
        let _rule = self.enter(Rule::WindowFunction)?;
        match self.kind() {
            TokenKind::Keyword(kw) if kw.is_ranking_function_name() => {
                let name = *kw;
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let args = self.parse_function_args()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(WindowFunction::Ranking { name, args })
            }
            _ => Ok(WindowFunction::Aggregate(self.parse_aggregate_function()?)),
        }
    }

    /// `OVER ( [PARTITION BY expressions] [ORDER BY ...] )`
    fn parse_over_clause(&mut self) -> Result<OverClause, ParseError> {
        let _rule = self.enter(Rule::OverClause)?;
        self.expect_keyword(Keyword::Over)?;
        self.expect(&TokenKind::LeftParen)?;
        let partition_by = if self.check_keyword(Keyword::Partition) {
            let _rule = self.enter(Rule::PartitionByClause)?;
            self.expect_keyword(Keyword::Partition)?;
            self.expect_keyword(Keyword::By)?;
            self.parse_expressions()?
        } else {
            Vec::new()
        };
        let order_by = if self.check_keyword(Keyword::Order) {
            self.parse_order_by_clause()?
        } else {
            Vec::new()
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(OverClause {
            partition_by,
            order_by,
        })
    }

    // ===================================================================
    // POSITION, EXTRACT, GET_FORMAT, TIMESTAMPADD/DIFF
    // ===================================================================

    /// `POSITION ( substring IN string )`
    fn parse_position_function(&mut self) -> Result<PositionFunction, ParseError> {
        let _rule = self.enter(Rule::PositionFunction)?;
        self.expect_keyword(Keyword::Position)?;
        self.expect(&TokenKind::LeftParen)?;
        let substring = Box::new(self.parse_function_arg()?);
        self.expect_keyword(Keyword::In)?;
        let string = Box::new(self.parse_function_arg()?);
        self.expect(&TokenKind::RightParen)?;
        Ok(PositionFunction { substring, string })
    }

    /// `EXTRACT ( part FROM source )`
    fn parse_extract_function(&mut self) -> Result<ExtractFunction, ParseError> {
        let _rule = self.enter(Rule::ExtractFunction)?;
        self.expect_keyword(Keyword::Extract)?;
        self.expect(&TokenKind::LeftParen)?;
        let part = {
            let _rule = self.enter(Rule::DatetimePart)?;
            self.parse_date_time_unit()?
        };
        self.expect_keyword(Keyword::From)?;
        let source = Box::new(self.parse_function_arg()?);
        self.expect(&TokenKind::RightParen)?;
        Ok(ExtractFunction { part, source })
    }

    /// `GET_FORMAT ( DATE | TIME | TIMESTAMP | DATETIME , locale )`
    fn parse_get_format_function(&mut self) -> Result<GetFormatFunction, ParseError> {
        let _rule = self.enter(Rule::GetFormatFunction)?;
        self.expect_keyword(Keyword::GetFormat)?;
        self.expect(&TokenKind::LeftParen)?;
        let format_type = {
            let _rule = self.enter(Rule::GetFormatType)?;
            let format_type = match self.kind() {
                TokenKind::Keyword(kw) => GetFormatType::from_keyword(*kw),
                _ => None,
            };
            match format_type {
                Some(format_type) => {
                    self.advance();
                    format_type
                }
                None => return Err(self.no_viable("DATE, TIME, DATETIME or TIMESTAMP")),
            }
        };
        self.expect(&TokenKind::Comma)?;
        let locale = Box::new(self.parse_function_arg()?);
        self.expect(&TokenKind::RightParen)?;
        Ok(GetFormatFunction {
            format_type,
            locale,
        })
    }

    /// `TIMESTAMPADD | TIMESTAMPDIFF ( simple_unit , arg , arg )`
    fn parse_timestamp_function(&mut self) -> Result<TimestampFunction, ParseError> {
        let _rule = self.enter(Rule::TimestampFunction)?;
        let name = match self.kind() {
            TokenKind::Keyword(kw) if kw.is_timestamp_function_name() => *kw,
            _ => return Err(self.no_viable("TIMESTAMPADD or TIMESTAMPDIFF")),
        };
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let unit = {
            let _rule = self.enter(Rule::SimpleDateTimePart)?;
            let span = self.current().span;
            let unit = self.parse_date_time_unit()?;
            if !unit.is_simple() {
                return Err(self.failed_predicate(
                    format!("{unit} is not a simple date-time unit"),
                    span,
                ));
            }
            unit
        };
        self.expect(&TokenKind::Comma)?;
        let first = Box::new(self.parse_function_arg()?);
        self.expect(&TokenKind::Comma)?;
        let second = Box::new(self.parse_function_arg()?);
        self.expect(&TokenKind::RightParen)?;
        Ok(TimestampFunction {
            name,
            unit,
            first,
            second,
        })
    }

    pub(crate) fn parse_date_time_unit(&mut self) -> Result<DateTimeUnit, ParseError> {
        let unit = match self.kind() {
            TokenKind::Keyword(kw) => DateTimeUnit::from_keyword(*kw),
            _ => None,
        };
        match unit {
            Some(unit) => {
                self.advance();
                Ok(unit)
            }
            None => Err(self.no_viable("a date-time unit")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        AggregateFunction, DateTimeUnit, Expression, FunctionCall, SpecificFunction,
        Statement, WindowFunction,
    };
    use crate::parser::{ParseErrorKind, Parser};

    fn call(sql: &str) -> FunctionCall {
        let root = Parser::new(&format!("SELECT {sql}"))
            .parse_root()
            .unwrap();
        let Some(Statement::Select(mut q)) = root.statement else {
            panic!("expected SELECT");
        };
        let expr: Expression = q.select.elements.remove(0).expr;
        expr.as_function().cloned().expect("function call")
    }

    #[test]
    fn test_nested_all_versus_scalar() {
        assert!(matches!(call("nested(a.b.*)"), FunctionCall::NestedAll(_)));
        assert!(matches!(call("nested(a.b)"), FunctionCall::Scalar(_)));
    }

    #[test]
    fn test_case_forms() {
        for sql in [
            "CASE a WHEN 1 THEN 'x' ELSE 'y' END",
            "CASE WHEN a > 1 THEN 'x' END",
        ] {
            assert!(matches!(
                call(sql),
                FunctionCall::Specific(SpecificFunction::Case(_))
            ));
        }
        assert!(Parser::new("SELECT CASE a END").parse_root().is_err());
    }

    #[test]
    fn test_count_forms() {
        assert!(matches!(
            call("COUNT(*)"),
            FunctionCall::Aggregate(AggregateFunction::CountStar)
        ));
        assert!(matches!(
            call("count(DISTINCT a)"),
            FunctionCall::Aggregate(AggregateFunction::DistinctCount { .. })
        ));
    }

    #[test]
    fn test_filtered_aggregation() {
        match call("AVG(a) ORDER BY b FILTER(WHERE c > 0)") {
            FunctionCall::FilteredAggregate(agg) => assert_eq!(agg.order_by.len(), 1),
            other => panic!("expected filtered aggregate, got {other:?}"),
        }
        assert!(matches!(
            call("SUM(a) FILTER(WHERE c > 0)"),
            FunctionCall::FilteredAggregate(_)
        ));
    }

    #[test]
    fn test_window_functions() {
        match call("ROW_NUMBER() OVER (PARTITION BY a ORDER BY b DESC)") {
            FunctionCall::Window(w) => {
                assert!(matches!(w.function, WindowFunction::Ranking { .. }));
                assert_eq!(w.over.partition_by.len(), 1);
            }
            other => panic!("expected window, got {other:?}"),
        }
        assert!(matches!(
            call("MAX(a) OVER ()"),
            FunctionCall::Window(_)
        ));
    }

    #[test]
    fn test_timestamp_rejects_compound_unit() {
        assert!(matches!(
            call("TIMESTAMPADD(DAY, 1, a)"),
            FunctionCall::Timestamp(ref t) if t.unit == DateTimeUnit::Day
        ));
        let err = Parser::new("SELECT TIMESTAMPDIFF(DAY_HOUR, a, b)")
            .parse_root()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::FailedPredicate);
    }

    #[test]
    fn test_extract_position_get_format() {
        assert!(matches!(
            call("EXTRACT(YEAR_MONTH FROM a)"),
            FunctionCall::Extract(_)
        ));
        assert!(matches!(
            call("POSITION('a' IN b)"),
            FunctionCall::Position(_)
        ));
        assert!(matches!(
            call("GET_FORMAT(DATE, 'USA')"),
            FunctionCall::GetFormat(_)
        ));
    }
}
