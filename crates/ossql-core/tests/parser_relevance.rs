//! Relevance search: prefix and infix relevance functions, `score` and
//! `highlight`.

mod common;
use common::*;

use ossql_core::ast::{
    AlternateMultiMatchArgName, Expression, FunctionCall, RelevanceArgName, RelevanceArgValue,
    RelevanceField, RelevanceFieldWeight, RelevanceFunction,
};
use ossql_core::{Keyword, ParseErrorKind};

fn relevance_of(expr: &Expression) -> RelevanceFunction {
    match expr.as_function() {
        Some(FunctionCall::Relevance(f)) => f.clone(),
        other => panic!("expected relevance function, got {other:?}"),
    }
}

fn relevance(condition: &str) -> RelevanceFunction {
    relevance_of(&parse_where(condition))
}

// ===================================================================
// Prefix forms
// ===================================================================

#[test]
fn no_field_query() {
    match relevance("query('message:timeout AND level:error', default_operator='AND')") {
        RelevanceFunction::NoField { name, args, .. } => {
            assert_eq!(name, Keyword::Query);
            assert_eq!(args.len(), 1);
        }
        other => panic!("expected query(), got {other:?}"),
    }
}

#[test]
fn single_field_match() {
    match relevance("match(message, 'connection timeout', operator='AND', fuzziness=2)") {
        RelevanceFunction::SingleField {
            name,
            field,
            query,
            args,
        } => {
            assert_eq!(name, Keyword::Match);
            assert!(matches!(field, RelevanceField::Name(_)));
            assert_eq!(query.to_string(), "'connection timeout'");
            let names: Vec<_> = args.iter().map(|a| a.name.to_string()).collect();
            assert_eq!(names, vec!["OPERATOR", "FUZZINESS"]);
        }
        other => panic!("expected match(), got {other:?}"),
    }
}

#[test]
fn single_field_names_are_interchangeable() {
    for name in [
        "match_phrase",
        "matchphrase",
        "match_query",
        "matchquery",
        "match_bool_prefix",
        "match_phrase_prefix",
        "wildcard_query",
        "wildcardquery",
    ] {
        let f = relevance(&format!("{name}(title, 'q')"));
        assert!(
            matches!(f, RelevanceFunction::SingleField { .. }),
            "{name}: {f:?}"
        );
    }
}

#[test]
fn wildcard_query() {
    match relevance("wildcard_query(host, 'web-*', boost=2)") {
        RelevanceFunction::SingleField { name, query, .. } => {
            assert_eq!(name, Keyword::WildcardQuery);
            assert_eq!(query.to_string(), "'web-*'");
        }
        other => panic!("expected wildcard_query(), got {other:?}"),
    }
    round_trip("SELECT a FROM t WHERE WILDCARD_QUERY(a, 'x*')");
}

#[test]
fn regexp_query_is_an_ordinary_name() {
    assert_eq!(
        parse_expr("regexp_query").as_column().map(|n| n.names()),
        Some(vec!["regexp_query"])
    );
}

#[test]
fn quoted_field_name() {
    match relevance("match('address.city', 'Seattle')") {
        RelevanceFunction::SingleField {
            field: RelevanceField::String(s),
            ..
        } => assert_eq!(s.value, "address.city"),
        other => panic!("expected quoted field, got {other:?}"),
    }
}

#[test]
fn multi_field_with_weights() {
    match relevance("multi_match([title ^ 2, 'body' 1.5, tags], 'search terms', type='best_fields')") {
        RelevanceFunction::MultiField { fields, args, .. } => {
            assert_eq!(fields.len(), 3);
            assert_eq!(fields[0].weight, Some(RelevanceFieldWeight::Decimal(2.into())));
            assert!(fields[0].caret);
            assert_eq!(fields[1].weight, Some(RelevanceFieldWeight::Real(1.5)));
            assert!(!fields[1].caret);
            assert_eq!(fields[2].weight, None);
            assert_eq!(args[0].name, RelevanceArgName::Option(Keyword::Type));
        }
        other => panic!("expected multi_match(), got {other:?}"),
    }
}

#[test]
fn query_string_and_simple_query_string() {
    for name in ["query_string", "simple_query_string"] {
        let f = relevance(&format!("{name}(['title', body], 'a* OR b')"));
        assert!(
            matches!(f, RelevanceFunction::MultiField { .. }),
            "{name}: {f:?}"
        );
    }
}

#[test]
fn multi_match_named_arguments() {
    match relevance("multi_match(query='q', fields=['title'], tie_breaker=0.3)") {
        RelevanceFunction::MultiFieldNamed {
            query, field, args, ..
        } => {
            assert_eq!(query.name, AlternateMultiMatchArgName::Query);
            assert_eq!(field.name, AlternateMultiMatchArgName::Fields);
            assert!(field.bracketed);
            assert_eq!(args.len(), 1);
        }
        other => panic!("expected named multi_match(), got {other:?}"),
    }
}

#[test]
fn quoted_option_name() {
    let f = relevance("match(a, 'x', 'boost'=2)");
    assert!(matches!(f.args()[0].name, RelevanceArgName::Quoted(_)));
}

#[test]
fn option_value_may_be_a_name() {
    let f = relevance("match(a, 'x', analyzer=standard)");
    assert!(matches!(f.args()[0].value, RelevanceArgValue::Name(_)));
}

#[test]
fn unknown_option_is_rejected() {
    let err = parse_err("SELECT a FROM t WHERE match(a, 'x', colour='red')");
    assert_eq!(err.kind, ParseErrorKind::FailedPredicate);
    assert_eq!(err.rule.as_str(), "relevanceArgName");
    assert!(
        err.message.contains("unknown relevance option 'colour'"),
        "{}",
        err.message
    );
}

// ===================================================================
// Infix forms
// ===================================================================

#[test]
fn alt_single_field() {
    match relevance("message = match_query('timeout', boost=2.0)") {
        RelevanceFunction::AltSingleField { field, name, .. } => {
            assert_eq!(field.to_string(), "message");
            assert_eq!(name, Keyword::MatchQuery);
        }
        other => panic!("expected infix match_query, got {other:?}"),
    }
}

#[test]
fn alt_single_field_with_qualified_field() {
    let f = relevance("address.city = match_phrase('New York')");
    assert!(matches!(f, RelevanceFunction::AltSingleField { .. }));
    assert_eq!(f.to_string(), "address.city = MATCH_PHRASE('New York')");
}

#[test]
fn alt_multi_field() {
    assert!(matches!(
        relevance("'title' = multi_match('x', analyzer=standard)"),
        RelevanceFunction::AltMultiField { .. }
    ));
}

#[test]
fn alt_form_inside_boolean_expression() {
    match parse_where("age > 30 AND message = match_query('x')") {
        Expression::And { right, .. } => {
            assert!(matches!(
                relevance_of(&right),
                RelevanceFunction::AltSingleField { .. }
            ));
        }
        other => panic!("expected AND, got {other:?}"),
    }
}

#[test]
fn equality_with_plain_function_is_a_comparison() {
    let expr = parse_where("message = upper('x')");
    assert!(expr.as_function().is_none());
    assert_eq!(expr.to_string(), "message = UPPER('x')");
}

// ===================================================================
// SCORE / HIGHLIGHT
// ===================================================================

#[test]
fn score_wraps_relevance_function() {
    let expr = parse_where("score(match(message, 'x'), 2.5)");
    match expr.as_function() {
        Some(FunctionCall::ScoreRelevance(score)) => {
            assert_eq!(score.name, Keyword::Score);
            assert_eq!(score.weight, Some(RelevanceFieldWeight::Real(2.5)));
            assert!(matches!(
                *score.function,
                RelevanceFunction::SingleField { .. }
            ));
        }
        other => panic!("expected score(), got {other:?}"),
    }
}

#[test]
fn score_query_without_weight() {
    let expr = parse_where("score_query(message = match_query('x'))");
    match expr.as_function() {
        Some(FunctionCall::ScoreRelevance(score)) => {
            assert!(score.weight.is_none());
            assert!(matches!(
                *score.function,
                RelevanceFunction::AltSingleField { .. }
            ));
        }
        other => panic!("expected score_query(), got {other:?}"),
    }
}

#[test]
fn highlight_in_select_list() {
    let q = parse_query("SELECT highlight(message, pre_tags='<em>', post_tags='</em>') FROM logs");
    match q.select.elements[0].expr.as_function() {
        Some(FunctionCall::Highlight(h)) => assert_eq!(h.args.len(), 2),
        other => panic!("expected highlight(), got {other:?}"),
    }
}

#[test]
fn highlight_rejects_other_options() {
    parse_err("SELECT highlight(message, boost=2) FROM logs");
}

// ===================================================================
// Rendering
// ===================================================================

#[test]
fn relevance_functions_render_canonically() {
    let cases = [
        (
            "match(message, 'x', operator='AND')",
            "MATCH(message, 'x', OPERATOR = 'AND')",
        ),
        (
            "multi_match([a ^ 2, b], 'x')",
            "MULTI_MATCH([a ^ 2, b], 'x')",
        ),
        (
            "multi_match(query='x', fields='a')",
            "MULTI_MATCH(QUERY = 'x', FIELDS = 'a')",
        ),
        ("a = matchquery('x')", "a = MATCHQUERY('x')"),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_where(input).to_string(), expected, "{input}");
    }
}
