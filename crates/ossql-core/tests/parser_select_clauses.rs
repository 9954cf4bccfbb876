//! Query clauses: select list, FROM, WHERE, GROUP BY, HAVING, ORDER BY and
//! LIMIT.

mod common;
use common::*;

use ossql_core::ast::{
    LimitSyntax, NullOrdering, OrderDirection, Relation, SelectSpec, Statement,
};

// ===================================================================
// Select list
// ===================================================================

#[test]
fn select_star() {
    let q = parse_query("SELECT * FROM accounts");
    assert!(q.select.star);
    assert!(q.select.elements.is_empty());
}

#[test]
fn select_star_followed_by_elements() {
    let q = parse_query("SELECT *, age + 1 AS next FROM accounts");
    assert!(q.select.star);
    assert_eq!(q.select.elements.len(), 1);
    assert_eq!(q.to_string(), "SELECT *, age + 1 AS next FROM accounts");
}

#[test]
fn select_without_from() {
    let q = parse_query("SELECT 1, 'a', abs(-2)");
    assert!(q.from.is_none());
    assert_eq!(q.select.elements.len(), 3);
}

#[test]
fn select_distinct_and_all() {
    assert_eq!(
        parse_query("SELECT DISTINCT a FROM t").select.spec,
        Some(SelectSpec::Distinct)
    );
    assert_eq!(
        parse_query("SELECT ALL a FROM t").select.spec,
        Some(SelectSpec::All)
    );
    assert_eq!(parse_query("SELECT a FROM t").select.spec, None);
}

#[test]
fn select_aliases() {
    let q = parse_query("SELECT a AS x, b y, c FROM t");
    let aliases: Vec<_> = q
        .select
        .elements
        .iter()
        .map(|e| e.alias.as_ref().map(|a| a.value.clone()))
        .collect();
    assert_eq!(
        aliases,
        vec![Some("x".to_string()), Some("y".to_string()), None]
    );
}

#[test]
fn select_keyword_alias_keeps_spelling() {
    let q = parse_query("SELECT a AS Type FROM t");
    assert_eq!(q.to_string(), "SELECT a AS Type FROM t");
}

// ===================================================================
// FROM
// ===================================================================

#[test]
fn from_index_pattern() {
    let q = parse_query("SELECT * FROM logs-2024-*");
    let Some(from) = q.from else {
        panic!("expected FROM");
    };
    match from.relation {
        Relation::Table { name, alias } => {
            assert_eq!(name.names(), vec!["logs-2024-*"]);
            assert!(alias.is_none());
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn from_backtick_index_with_alias() {
    let q = parse_query("SELECT l.msg FROM `logs 2024` AS l");
    let relation = q.from.map(|f| f.relation);
    assert_eq!(
        relation.as_ref().and_then(Relation::alias).map(|a| a.value.as_str()),
        Some("l")
    );
    assert_eq!(
        relation.map(|r| r.to_string()).as_deref(),
        Some("`logs 2024` AS l")
    );
}

#[test]
fn from_subquery_requires_alias() {
    let q = parse_query("SELECT s.a FROM (SELECT a FROM t WHERE a > 1) s");
    match q.from.map(|f| f.relation) {
        Some(Relation::Subquery { query, alias }) => {
            assert_eq!(alias.value, "s");
            assert!(query.from.is_some());
        }
        other => panic!("expected subquery, got {other:?}"),
    }

    let err = parse_err("SELECT a FROM (SELECT a FROM t)");
    assert_eq!(err.rule.as_str(), "alias");
}

// ===================================================================
// WHERE / GROUP BY / HAVING
// ===================================================================

#[test]
fn where_clause() {
    let cond = parse_where("age > 30 AND state = 'CA'");
    assert_eq!(cond.to_string(), "age > 30 AND state = 'CA'");
}

#[test]
fn group_by_and_having() {
    let q = parse_query("SELECT state, COUNT(*) FROM t GROUP BY state, city HAVING COUNT(*) > 10");
    let from = q.from.expect("from clause");
    assert_eq!(from.group_by.len(), 2);
    assert_eq!(
        from.having.map(|h| h.to_string()).as_deref(),
        Some("COUNT(*) > 10")
    );
}

#[test]
fn having_without_group_by() {
    let q = parse_query("SELECT AVG(age) FROM t HAVING AVG(age) > 20");
    let from = q.from.expect("from clause");
    assert!(from.group_by.is_empty());
    assert!(from.having.is_some());
}

// ===================================================================
// ORDER BY
// ===================================================================

#[test]
fn order_by_directions_and_nulls() {
    let q = parse_query("SELECT a FROM t ORDER BY a ASC NULLS FIRST, b DESC, c NULLS LAST, d");
    let order = q.from.expect("from clause").order_by;
    let shape: Vec<_> = order.iter().map(|e| (e.direction, e.nulls)).collect();
    assert_eq!(
        shape,
        vec![
            (Some(OrderDirection::Asc), Some(NullOrdering::First)),
            (Some(OrderDirection::Desc), None),
            (None, Some(NullOrdering::Last)),
            (None, None),
        ]
    );
}

#[test]
fn order_by_nulls_requires_first_or_last() {
    let err = parse_err("SELECT a FROM t ORDER BY a NULLS");
    assert!(err.message.contains("FIRST or LAST"), "{}", err.message);
}

// ===================================================================
// LIMIT
// ===================================================================

#[test]
fn limit_only() {
    let limit = parse_query("SELECT a FROM t LIMIT 10").limit.expect("limit");
    assert_eq!(limit.limit.to_u64(), Some(10));
    assert_eq!(limit.offset, None);
}

#[test]
fn limit_comma_form() {
    let limit = parse_query("SELECT a FROM t LIMIT 5, 10").limit.expect("limit");
    assert_eq!(limit.limit.to_u64(), Some(10));
    assert_eq!(limit.offset.and_then(|o| o.to_u64()), Some(5));
    assert_eq!(limit.syntax, LimitSyntax::Comma);
}

#[test]
fn limit_offset_form() {
    let limit = parse_query("SELECT a FROM t LIMIT 10 OFFSET 5").limit.expect("limit");
    assert_eq!(limit.limit.to_u64(), Some(10));
    assert_eq!(limit.offset.and_then(|o| o.to_u64()), Some(5));
    assert_eq!(limit.syntax, LimitSyntax::Offset);
}

#[test]
fn limit_without_from() {
    let q = parse_query("SELECT 1 LIMIT 1");
    assert!(q.from.is_none());
    assert!(q.limit.is_some());
}

// ===================================================================
// Clause order
// ===================================================================

#[test]
fn full_query_renders_canonically() {
    let sql = "select distinct state, count(*) as c from accounts a where age >= 18 \
               group by state having count(*) > 1 order by c desc limit 10";
    let Statement::Select(q) = parse_statement(sql) else {
        panic!("expected SELECT");
    };
    assert_eq!(
        q.to_string(),
        "SELECT DISTINCT state, COUNT(*) AS c FROM accounts AS a WHERE age >= 18 \
         GROUP BY state HAVING COUNT(*) > 1 ORDER BY c DESC LIMIT 10"
    );
}

#[test]
fn clauses_out_of_order_fail() {
    let err = parse_err("SELECT a FROM t ORDER BY a WHERE a > 1");
    assert_eq!(err.rule.as_str(), "root");
    assert!(err.message.contains("WHERE"), "{}", err.message);
}
