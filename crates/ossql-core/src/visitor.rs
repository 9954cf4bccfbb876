//! Read-only traversal of parsed trees.
//!
//! Implement [`Visitor`] and override the methods for the nodes of interest.
//! Every default method on a node with children calls the matching `walk_*`
//! function, which visits those children; an override that still wants the
//! children visited calls the `walk_*` function itself. Clause hooks that wrap
//! a bare expression (`WHERE`, `HAVING`, `CAST`) default to
//! [`Visitor::visit_expression`].
//!
//! ```rust
//! use ossql_core::ast::QualifiedName;
//! use ossql_core::visitor::{Visitor, walk_root};
//!
//! #[derive(Default)]
//! struct Columns(Vec<String>);
//!
//! impl Visitor for Columns {
//!     fn visit_column(&mut self, name: &QualifiedName) {
//!         self.0.push(name.to_string());
//!     }
//! }
//!
//! let root = ossql_core::parse("SELECT a, b + 1 FROM t WHERE c > 0").unwrap();
//! let mut columns = Columns::default();
//! walk_root(&mut columns, &root);
//! assert_eq!(columns.0, ["a", "b", "c"]);
//! ```

use crate::ast::{
    AggregateFunction, AllTupleFields, AlternateMultiMatchField, AlternateMultiMatchQuery,
    CaseAlternative, CaseFunction, Constant, DatetimeLiteral, DecimalLiteral, DescribeStatement,
    Expression, ExpressionAtom, ExtractFunction, FilteredAggregation, FromClause, FunctionCall,
    GetFormatFunction, HighlightArg, HighlightFunction, Ident, IntervalLiteral, LimitClause,
    OrderByElement, OverClause, PositionFunction, Predicate, QualifiedName, QuerySpecification,
    Relation, RelevanceArg, RelevanceArgValue, RelevanceField, RelevanceFieldAndWeight,
    RelevanceFunction, Root, ScalarFunctionCall, ScoreRelevanceFunction, SelectClause,
    SelectElement, ShowDescribePattern, ShowStatement, SpecificFunction, Statement,
    StringLiteral, TimestampFunction, WindowFunction, WindowFunctionClause,
};

/// A visitor over the parse tree. All methods default to walking children.
pub trait Visitor {
    // ===================================================================
    // Statements and clauses
    // ===================================================================

    fn visit_root(&mut self, root: &Root) {
        walk_root(self, root);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        walk_statement(self, statement);
    }

    fn visit_show(&mut self, show: &ShowStatement) {
        walk_show(self, show);
    }

    fn visit_describe(&mut self, describe: &DescribeStatement) {
        walk_describe(self, describe);
    }

    /// Table or column pattern of `SHOW` / `DESCRIBE`.
    fn visit_show_describe_pattern(&mut self, pattern: &ShowDescribePattern) {
        walk_show_describe_pattern(self, pattern);
    }

    fn visit_query(&mut self, query: &QuerySpecification) {
        walk_query(self, query);
    }

    fn visit_select_clause(&mut self, select: &SelectClause) {
        walk_select_clause(self, select);
    }

    fn visit_select_element(&mut self, element: &SelectElement) {
        walk_select_element(self, element);
    }

    /// Called for select element, table and subquery aliases.
    fn visit_alias(&mut self, _alias: &Ident) {}

    fn visit_from_clause(&mut self, from: &FromClause) {
        walk_from_clause(self, from);
    }

    fn visit_relation(&mut self, relation: &Relation) {
        walk_relation(self, relation);
    }

    fn visit_table(&mut self, _name: &QualifiedName) {}

    /// The default visits the condition.
    fn visit_where_clause(&mut self, condition: &Expression) {
        self.visit_expression(condition);
    }

    fn visit_group_by(&mut self, exprs: &[Expression]) {
        walk_group_by(self, exprs);
    }

    fn visit_having_clause(&mut self, condition: &Expression) {
        self.visit_expression(condition);
    }

    fn visit_order_by_element(&mut self, element: &OrderByElement) {
        walk_order_by_element(self, element);
    }

    fn visit_limit_clause(&mut self, limit: &LimitClause) {
        walk_limit_clause(self, limit);
    }

    // ===================================================================
    // Expressions and literals
    // ===================================================================

    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    fn visit_predicate(&mut self, predicate: &Predicate) {
        walk_predicate(self, predicate);
    }

    fn visit_expression_atom(&mut self, atom: &ExpressionAtom) {
        walk_expression_atom(self, atom);
    }

    fn visit_column(&mut self, _name: &QualifiedName) {}

    fn visit_constant(&mut self, constant: &Constant) {
        walk_constant(self, constant);
    }

    fn visit_string_literal(&mut self, _literal: &StringLiteral) {}

    fn visit_decimal_literal(&mut self, _literal: &DecimalLiteral) {}

    fn visit_datetime_literal(&mut self, literal: &DatetimeLiteral) {
        walk_datetime_literal(self, literal);
    }

    fn visit_interval_literal(&mut self, interval: &IntervalLiteral) {
        walk_interval_literal(self, interval);
    }

    // ===================================================================
    // Function calls
    // ===================================================================

    fn visit_function_call(&mut self, call: &FunctionCall) {
        walk_function_call(self, call);
    }

    /// `NESTED(path.*)`
    fn visit_nested_all_fields(&mut self, fields: &AllTupleFields) {
        walk_nested_all_fields(self, fields);
    }

    fn visit_scalar_function(&mut self, call: &ScalarFunctionCall) {
        walk_scalar_function(self, call);
    }

    fn visit_case(&mut self, case: &CaseFunction) {
        walk_case(self, case);
    }

    fn visit_case_alternative(&mut self, alternative: &CaseAlternative) {
        walk_case_alternative(self, alternative);
    }

    /// `CAST(expr AS type)`
    fn visit_cast(&mut self, expr: &Expression) {
        self.visit_expression(expr);
    }

    fn visit_window_function_clause(&mut self, window: &WindowFunctionClause) {
        walk_window_function_clause(self, window);
    }

    fn visit_window_function(&mut self, function: &WindowFunction) {
        walk_window_function(self, function);
    }

    fn visit_over_clause(&mut self, over: &OverClause) {
        walk_over_clause(self, over);
    }

    fn visit_aggregate(&mut self, aggregate: &AggregateFunction) {
        walk_aggregate(self, aggregate);
    }

    fn visit_filtered_aggregate(&mut self, filtered: &FilteredAggregation) {
        walk_filtered_aggregate(self, filtered);
    }

    fn visit_position(&mut self, position: &PositionFunction) {
        walk_position(self, position);
    }

    fn visit_extract(&mut self, extract: &ExtractFunction) {
        walk_extract(self, extract);
    }

    fn visit_get_format(&mut self, get_format: &GetFormatFunction) {
        walk_get_format(self, get_format);
    }

    /// `TIMESTAMPADD` / `TIMESTAMPDIFF`
    fn visit_timestamp_function(&mut self, timestamp: &TimestampFunction) {
        walk_timestamp_function(self, timestamp);
    }

    // ===================================================================
    // Relevance search
    // ===================================================================

    fn visit_relevance_function(&mut self, function: &RelevanceFunction) {
        walk_relevance_function(self, function);
    }

    fn visit_score_relevance(&mut self, score: &ScoreRelevanceFunction) {
        walk_score_relevance(self, score);
    }

    /// Called for relevance and highlight target fields.
    fn visit_relevance_field(&mut self, _field: &RelevanceField) {}

    fn visit_relevance_field_and_weight(&mut self, weighted: &RelevanceFieldAndWeight) {
        walk_relevance_field_and_weight(self, weighted);
    }

    /// The query or field value of a relevance function.
    fn visit_relevance_arg_value(&mut self, value: &RelevanceArgValue) {
        walk_relevance_arg_value(self, value);
    }

    /// An `option = value` pair.
    fn visit_relevance_arg(&mut self, arg: &RelevanceArg) {
        walk_relevance_arg(self, arg);
    }

    fn visit_highlight(&mut self, highlight: &HighlightFunction) {
        walk_highlight(self, highlight);
    }

    fn visit_highlight_arg(&mut self, arg: &HighlightArg) {
        walk_highlight_arg(self, arg);
    }
}

pub fn walk_root<V: Visitor + ?Sized>(visitor: &mut V, root: &Root) {
    if let Some(statement) = &root.statement {
        visitor.visit_statement(statement);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Select(query) => visitor.visit_query(query),
        Statement::Show(show) => visitor.visit_show(show),
        Statement::Describe(describe) => visitor.visit_describe(describe),
    }
}

pub fn walk_show<V: Visitor + ?Sized>(visitor: &mut V, show: &ShowStatement) {
    visitor.visit_show_describe_pattern(&show.table_filter);
}

pub fn walk_describe<V: Visitor + ?Sized>(visitor: &mut V, describe: &DescribeStatement) {
    visitor.visit_show_describe_pattern(&describe.table_filter);
    if let Some(column_filter) = &describe.column_filter {
        visitor.visit_show_describe_pattern(column_filter);
    }
}

pub fn walk_show_describe_pattern<V: Visitor + ?Sized>(
    visitor: &mut V,
    pattern: &ShowDescribePattern,
) {
    if let ShowDescribePattern::String(literal) = pattern {
        visitor.visit_string_literal(literal);
    }
}

pub fn walk_query<V: Visitor + ?Sized>(visitor: &mut V, query: &QuerySpecification) {
    visitor.visit_select_clause(&query.select);
    if let Some(from) = &query.from {
        visitor.visit_from_clause(from);
    }
    if let Some(limit) = &query.limit {
        visitor.visit_limit_clause(limit);
    }
}

pub fn walk_select_clause<V: Visitor + ?Sized>(visitor: &mut V, select: &SelectClause) {
    for element in &select.elements {
        visitor.visit_select_element(element);
    }
}

pub fn walk_select_element<V: Visitor + ?Sized>(visitor: &mut V, element: &SelectElement) {
    visitor.visit_expression(&element.expr);
    if let Some(alias) = &element.alias {
        visitor.visit_alias(alias);
    }
}

pub fn walk_from_clause<V: Visitor + ?Sized>(visitor: &mut V, from: &FromClause) {
    visitor.visit_relation(&from.relation);
    if let Some(condition) = &from.where_clause {
        visitor.visit_where_clause(condition);
    }
    if !from.group_by.is_empty() {
        visitor.visit_group_by(&from.group_by);
    }
    if let Some(condition) = &from.having {
        visitor.visit_having_clause(condition);
    }
    for element in &from.order_by {
        visitor.visit_order_by_element(element);
    }
}

pub fn walk_relation<V: Visitor + ?Sized>(visitor: &mut V, relation: &Relation) {
    match relation {
        Relation::Table { name, alias } => {
            visitor.visit_table(name);
            if let Some(alias) = alias {
                visitor.visit_alias(alias);
            }
        }
        Relation::Subquery { query, alias } => {
            visitor.visit_query(query);
            visitor.visit_alias(alias);
        }
    }
}

pub fn walk_order_by_element<V: Visitor + ?Sized>(visitor: &mut V, element: &OrderByElement) {
    visitor.visit_expression(&element.expr);
}

pub fn walk_limit_clause<V: Visitor + ?Sized>(visitor: &mut V, limit: &LimitClause) {
    if let Some(offset) = &limit.offset {
        visitor.visit_decimal_literal(offset);
    }
    visitor.visit_decimal_literal(&limit.limit);
}

pub fn walk_expression<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Not(inner) => visitor.visit_expression(inner),
        Expression::And { left, right } | Expression::Or { left, right } => {
            visitor.visit_expression(left);
            visitor.visit_expression(right);
        }
        Expression::Predicate(predicate) => visitor.visit_predicate(predicate),
    }
}

pub fn walk_predicate<V: Visitor + ?Sized>(visitor: &mut V, predicate: &Predicate) {
    match predicate {
        Predicate::Atom(atom) => visitor.visit_expression_atom(atom),
        Predicate::Comparison { left, right, .. }
        | Predicate::Like { left, right, .. }
        | Predicate::Regexp { left, right } => {
            visitor.visit_predicate(left);
            visitor.visit_predicate(right);
        }
        Predicate::Between {
            expr, low, high, ..
        } => {
            visitor.visit_predicate(expr);
            visitor.visit_predicate(low);
            visitor.visit_predicate(high);
        }
        Predicate::IsNull { expr, .. } => visitor.visit_predicate(expr),
        Predicate::In { expr, list, .. } => {
            visitor.visit_predicate(expr);
            for item in list {
                visitor.visit_expression(item);
            }
        }
    }
}

pub fn walk_expression_atom<V: Visitor + ?Sized>(visitor: &mut V, atom: &ExpressionAtom) {
    match atom {
        ExpressionAtom::Constant(constant) => visitor.visit_constant(constant),
        ExpressionAtom::Column(name) => visitor.visit_column(name),
        ExpressionAtom::Function(call) => visitor.visit_function_call(call),
        ExpressionAtom::Nested(expr) => visitor.visit_expression(expr),
        ExpressionAtom::Math { left, right, .. } => {
            visitor.visit_expression_atom(left);
            visitor.visit_expression_atom(right);
        }
    }
}

pub fn walk_constant<V: Visitor + ?Sized>(visitor: &mut V, constant: &Constant) {
    match constant {
        Constant::String(literal) => visitor.visit_string_literal(literal),
        Constant::Decimal { value, .. } => visitor.visit_decimal_literal(value),
        Constant::Datetime(literal) => visitor.visit_datetime_literal(literal),
        Constant::Interval(interval) => visitor.visit_interval_literal(interval),
        Constant::Real { .. } | Constant::Boolean(_) | Constant::Null => {}
    }
}

pub fn walk_function_call<V: Visitor + ?Sized>(visitor: &mut V, call: &FunctionCall) {
    match call {
        FunctionCall::NestedAll(fields) => visitor.visit_nested_all_fields(fields),
        FunctionCall::Scalar(scalar) => visitor.visit_scalar_function(scalar),
        FunctionCall::Specific(SpecificFunction::Case(case)) => visitor.visit_case(case),
        FunctionCall::Specific(SpecificFunction::Cast { expr, .. }) => visitor.visit_cast(expr),
        FunctionCall::Window(window) => visitor.visit_window_function_clause(window),
        FunctionCall::Aggregate(aggregate) => visitor.visit_aggregate(aggregate),
        FunctionCall::FilteredAggregate(filtered) => visitor.visit_filtered_aggregate(filtered),
        FunctionCall::ScoreRelevance(score) => visitor.visit_score_relevance(score),
        FunctionCall::Relevance(function) => visitor.visit_relevance_function(function),
        FunctionCall::Highlight(highlight) => visitor.visit_highlight(highlight),
        FunctionCall::Position(position) => visitor.visit_position(position),
        FunctionCall::Extract(extract) => visitor.visit_extract(extract),
        FunctionCall::GetFormat(get_format) => visitor.visit_get_format(get_format),
        FunctionCall::Timestamp(timestamp) => visitor.visit_timestamp_function(timestamp),
    }
}

pub fn walk_case<V: Visitor + ?Sized>(visitor: &mut V, case: &CaseFunction) {
    if let Some(operand) = &case.operand {
        visitor.visit_expression(operand);
    }
    for alternative in &case.alternatives {
        visitor.visit_case_alternative(alternative);
    }
    if let Some(else_result) = &case.else_result {
        visitor.visit_expression(else_result);
    }
}

pub fn walk_window_function<V: Visitor + ?Sized>(visitor: &mut V, function: &WindowFunction) {
    match function {
        WindowFunction::Ranking { args, .. } => {
            for arg in args {
                visitor.visit_expression(arg);
            }
        }
        WindowFunction::Aggregate(aggregate) => visitor.visit_aggregate(aggregate),
    }
}

pub fn walk_over_clause<V: Visitor + ?Sized>(visitor: &mut V, over: &OverClause) {
    for expr in &over.partition_by {
        visitor.visit_expression(expr);
    }
    for element in &over.order_by {
        visitor.visit_order_by_element(element);
    }
}

pub fn walk_aggregate<V: Visitor + ?Sized>(visitor: &mut V, aggregate: &AggregateFunction) {
    match aggregate {
        AggregateFunction::Regular { arg, .. } | AggregateFunction::DistinctCount { arg } => {
            visitor.visit_expression(arg);
        }
        AggregateFunction::CountStar => {}
    }
}

pub fn walk_filtered_aggregate<V: Visitor + ?Sized>(
    visitor: &mut V,
    filtered: &FilteredAggregation,
) {
    visitor.visit_aggregate(&filtered.function);
    for element in &filtered.order_by {
        visitor.visit_order_by_element(element);
    }
    visitor.visit_expression(&filtered.filter);
}

/// Visits the target fields, the query value and the options of a
/// relevance function.
pub fn walk_relevance_function<V: Visitor + ?Sized>(visitor: &mut V, function: &RelevanceFunction) {
    match function {
        RelevanceFunction::NoField { query, .. } => visitor.visit_relevance_arg_value(query),
        RelevanceFunction::SingleField { field, query, .. }
        | RelevanceFunction::AltSingleField { field, query, .. }
        | RelevanceFunction::AltMultiField { field, query, .. } => {
            visitor.visit_relevance_field(field);
            visitor.visit_relevance_arg_value(query);
        }
        RelevanceFunction::MultiField { fields, query, .. } => {
            for weighted in fields {
                visitor.visit_relevance_field_and_weight(weighted);
            }
            visitor.visit_relevance_arg_value(query);
        }
        RelevanceFunction::MultiFieldNamed { query, field, .. } => {
            walk_alternate_query(visitor, query);
            walk_alternate_field(visitor, field);
        }
    }
    for arg in function.args() {
        visitor.visit_relevance_arg(arg);
    }
}

fn walk_alternate_query<V: Visitor + ?Sized>(visitor: &mut V, query: &AlternateMultiMatchQuery) {
    visitor.visit_relevance_arg_value(&query.value);
}

fn walk_alternate_field<V: Visitor + ?Sized>(visitor: &mut V, field: &AlternateMultiMatchField) {
    visitor.visit_relevance_arg_value(&field.value);
}

/// Constant values are visited; bare names are option words such as
/// `standard`, not columns.
pub fn walk_relevance_arg_value<V: Visitor + ?Sized>(visitor: &mut V, value: &RelevanceArgValue) {
    if let RelevanceArgValue::Constant(constant) = value {
        visitor.visit_constant(constant);
    }
}

pub fn walk_highlight<V: Visitor + ?Sized>(visitor: &mut V, highlight: &HighlightFunction) {
    visitor.visit_relevance_field(&highlight.field);
    for arg in &highlight.args {
        visitor.visit_highlight_arg(arg);
    }
}

pub fn walk_group_by<V: Visitor + ?Sized>(visitor: &mut V, exprs: &[Expression]) {
    for expr in exprs {
        visitor.visit_expression(expr);
    }
}

pub fn walk_datetime_literal<V: Visitor + ?Sized>(visitor: &mut V, literal: &DatetimeLiteral) {
    visitor.visit_string_literal(&literal.value);
}

pub fn walk_interval_literal<V: Visitor + ?Sized>(visitor: &mut V, interval: &IntervalLiteral) {
    visitor.visit_expression(&interval.value);
}

pub fn walk_nested_all_fields<V: Visitor + ?Sized>(visitor: &mut V, fields: &AllTupleFields) {
    visitor.visit_column(&fields.path);
}

pub fn walk_scalar_function<V: Visitor + ?Sized>(visitor: &mut V, call: &ScalarFunctionCall) {
    for arg in &call.args {
        visitor.visit_expression(arg);
    }
}

pub fn walk_case_alternative<V: Visitor + ?Sized>(visitor: &mut V, alternative: &CaseAlternative) {
    visitor.visit_expression(&alternative.condition);
    visitor.visit_expression(&alternative.result);
}

pub fn walk_window_function_clause<V: Visitor + ?Sized>(
    visitor: &mut V,
    window: &WindowFunctionClause,
) {
    visitor.visit_window_function(&window.function);
    visitor.visit_over_clause(&window.over);
}

pub fn walk_position<V: Visitor + ?Sized>(visitor: &mut V, position: &PositionFunction) {
    visitor.visit_expression(&position.substring);
    visitor.visit_expression(&position.string);
}

pub fn walk_extract<V: Visitor + ?Sized>(visitor: &mut V, extract: &ExtractFunction) {
    visitor.visit_expression(&extract.source);
}

pub fn walk_get_format<V: Visitor + ?Sized>(visitor: &mut V, get_format: &GetFormatFunction) {
    visitor.visit_expression(&get_format.locale);
}

pub fn walk_timestamp_function<V: Visitor + ?Sized>(
    visitor: &mut V,
    timestamp: &TimestampFunction,
) {
    visitor.visit_expression(&timestamp.first);
    visitor.visit_expression(&timestamp.second);
}

pub fn walk_score_relevance<V: Visitor + ?Sized>(visitor: &mut V, score: &ScoreRelevanceFunction) {
    visitor.visit_relevance_function(&score.function);
}

pub fn walk_relevance_field_and_weight<V: Visitor + ?Sized>(
    visitor: &mut V,
    weighted: &RelevanceFieldAndWeight,
) {
    visitor.visit_relevance_field(&weighted.field);
}

pub fn walk_relevance_arg<V: Visitor + ?Sized>(visitor: &mut V, arg: &RelevanceArg) {
    visitor.visit_relevance_arg_value(&arg.value);
}

pub fn walk_highlight_arg<V: Visitor + ?Sized>(visitor: &mut V, arg: &HighlightArg) {
    visitor.visit_string_literal(&arg.value);
}
