//! Function calls: scalar, CASE/CAST, aggregates, windows, filtered
//! aggregation, NESTED and the datetime helpers.

mod common;
use common::*;

use ossql_core::ast::{
    AggregateFunction, ConvertedDataType, DateTimeUnit, FunctionCall, GetFormatType,
    SpecificFunction, WindowFunction,
};
use ossql_core::{Keyword, ParseErrorKind};

fn call(sql: &str) -> FunctionCall {
    parse_expr(sql)
        .as_function()
        .cloned()
        .unwrap_or_else(|| panic!("expected a function call: {sql}"))
}

// ===================================================================
// Scalar functions
// ===================================================================

#[test]
fn scalar_function_with_args() {
    match call("substring(name, 1, 3)") {
        FunctionCall::Scalar(f) => {
            assert_eq!(f.name, Keyword::Substring);
            assert_eq!(f.args.len(), 3);
        }
        other => panic!("expected scalar call, got {other:?}"),
    }
}

#[test]
fn scalar_function_without_args() {
    match call("now()") {
        FunctionCall::Scalar(f) => assert!(f.args.is_empty()),
        other => panic!("expected scalar call, got {other:?}"),
    }
}

#[test]
fn nested_scalar_calls() {
    assert_eq!(
        call("upper(concat(first, ' ', last))").to_string(),
        "UPPER(CONCAT(first, ' ', last))"
    );
}

#[test]
fn function_name_without_parens_is_a_column() {
    assert_eq!(
        parse_expr("year").as_column().map(|n| n.names()),
        Some(vec!["year"])
    );
}

// ===================================================================
// CASE / CAST
// ===================================================================

#[test]
fn searched_case() {
    match call("CASE WHEN a > 1 THEN 'big' WHEN a > 0 THEN 'small' ELSE 'none' END") {
        FunctionCall::Specific(SpecificFunction::Case(case)) => {
            assert!(case.operand.is_none());
            assert_eq!(case.alternatives.len(), 2);
            assert!(case.else_result.is_some());
        }
        other => panic!("expected CASE, got {other:?}"),
    }
}

#[test]
fn simple_case() {
    match call("CASE status WHEN 1 THEN 'on' END") {
        FunctionCall::Specific(SpecificFunction::Case(case)) => {
            assert_eq!(
                case.operand.map(|o| o.to_string()).as_deref(),
                Some("status")
            );
            assert!(case.else_result.is_none());
        }
        other => panic!("expected CASE, got {other:?}"),
    }
}

#[test]
fn case_requires_when() {
    parse_err("SELECT CASE a ELSE 1 END");
}

#[test]
fn cast() {
    match call("CAST(age AS DOUBLE)") {
        FunctionCall::Specific(SpecificFunction::Cast { data_type, .. }) => {
            assert_eq!(data_type, ConvertedDataType::Double);
        }
        other => panic!("expected CAST, got {other:?}"),
    }
    parse_err("SELECT CAST(age AS VARCHAR)");
}

// ===================================================================
// Aggregates
// ===================================================================

#[test]
fn aggregate_forms() {
    assert!(matches!(
        call("COUNT(*)"),
        FunctionCall::Aggregate(AggregateFunction::CountStar)
    ));
    assert!(matches!(
        call("COUNT(DISTINCT state)"),
        FunctionCall::Aggregate(AggregateFunction::DistinctCount { .. })
    ));
    match call("avg(balance)") {
        FunctionCall::Aggregate(agg) => assert_eq!(agg.name(), Keyword::Avg),
        other => panic!("expected aggregate, got {other:?}"),
    }
}

#[test]
fn aggregate_over_expression() {
    assert_eq!(call("SUM(price * qty)").to_string(), "SUM(price * qty)");
}

#[test]
fn filtered_aggregation() {
    match call("COUNT(*) FILTER(WHERE age > 30)") {
        FunctionCall::FilteredAggregate(f) => {
            assert!(f.order_by.is_empty());
            assert_eq!(f.filter.to_string(), "age > 30");
        }
        other => panic!("expected filtered aggregate, got {other:?}"),
    }
}

#[test]
fn filtered_aggregation_with_order_by() {
    match call("MAX(a) ORDER BY b DESC FILTER(WHERE c = 1)") {
        FunctionCall::FilteredAggregate(f) => assert_eq!(f.order_by.len(), 1),
        other => panic!("expected filtered aggregate, got {other:?}"),
    }
}

#[test]
fn aggregate_followed_by_query_order_by() {
    let q = parse_query("SELECT a FROM t GROUP BY a HAVING AVG(b) ORDER BY a");
    let from = q.from.expect("from clause");
    assert!(matches!(
        from.having.as_ref().and_then(|h| h.as_function()),
        Some(FunctionCall::Aggregate(_))
    ));
    assert_eq!(from.order_by.len(), 1);
}

// ===================================================================
// Window functions
// ===================================================================

#[test]
fn ranking_window() {
    match call("ROW_NUMBER() OVER (PARTITION BY dept ORDER BY salary DESC)") {
        FunctionCall::Window(w) => {
            assert!(matches!(
                w.function,
                WindowFunction::Ranking {
                    name: Keyword::RowNumber,
                    ..
                }
            ));
            assert_eq!(w.over.partition_by.len(), 1);
            assert_eq!(w.over.order_by.len(), 1);
        }
        other => panic!("expected window, got {other:?}"),
    }
}

#[test]
fn aggregate_window() {
    match call("SUM(amount) OVER (ORDER BY day)") {
        FunctionCall::Window(w) => {
            assert!(matches!(w.function, WindowFunction::Aggregate(_)));
            assert!(w.over.partition_by.is_empty());
        }
        other => panic!("expected window, got {other:?}"),
    }
}

#[test]
fn ranking_requires_over() {
    parse_err("SELECT RANK() FROM t");
}

// ===================================================================
// NESTED
// ===================================================================

#[test]
fn nested_all_fields() {
    match call("nested(message.info.*)") {
        FunctionCall::NestedAll(fields) => {
            assert_eq!(fields.path.names(), vec!["message", "info"]);
        }
        other => panic!("expected NESTED(path.*), got {other:?}"),
    }
    assert_eq!(
        call("nested(message.info.*)").to_string(),
        "NESTED(message.info.*)"
    );
}

#[test]
fn nested_scalar() {
    assert!(matches!(
        call("nested(message.info)"),
        FunctionCall::Scalar(_)
    ));
    assert!(matches!(
        call("nested(message.info, message)"),
        FunctionCall::Scalar(_)
    ));
}

// ===================================================================
// POSITION / EXTRACT / GET_FORMAT / TIMESTAMPADD
// ===================================================================

#[test]
fn position() {
    match call("POSITION('world' IN greeting)") {
        FunctionCall::Position(p) => {
            assert_eq!(p.substring.to_string(), "'world'");
            assert_eq!(p.string.to_string(), "greeting");
        }
        other => panic!("expected POSITION, got {other:?}"),
    }
}

#[test]
fn extract() {
    match call("EXTRACT(YEAR FROM created)") {
        FunctionCall::Extract(e) => assert_eq!(e.part, DateTimeUnit::Year),
        other => panic!("expected EXTRACT, got {other:?}"),
    }
    assert_eq!(
        call("extract(day_second from created)").to_string(),
        "EXTRACT(DAY_SECOND FROM created)"
    );
}

#[test]
fn get_format() {
    match call("GET_FORMAT(TIMESTAMP, 'ISO')") {
        FunctionCall::GetFormat(g) => assert_eq!(g.format_type, GetFormatType::Timestamp),
        other => panic!("expected GET_FORMAT, got {other:?}"),
    }
}

#[test]
fn timestamp_add_and_diff() {
    assert_eq!(
        call("timestampadd(MINUTE, 15, created)").to_string(),
        "TIMESTAMPADD(MINUTE, 15, created)"
    );
    assert!(matches!(
        call("TIMESTAMPDIFF(SECOND, a, b)"),
        FunctionCall::Timestamp(_)
    ));
}

#[test]
fn timestamp_rejects_compound_unit() {
    let err = parse_err("SELECT TIMESTAMPADD(MINUTE_SECOND, 1, a)");
    assert_eq!(err.kind, ParseErrorKind::FailedPredicate);
    assert!(
        err.message.contains("MINUTE_SECOND is not a simple date-time unit"),
        "{}",
        err.message
    );
}
