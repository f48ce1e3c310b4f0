use serde_json::json;

use crate::model::{ConditionNode, Dimension, Error, Page, QueryModel, SortOrder};

#[test]
fn full_model_from_json() {
    let m = QueryModel::from_json(
        r#"{
            "table": "sales",
            "schema": "dw",
            "rows": ["region", { "field": "year", "values": [2023, 2024] }],
            "cols": [{ "field": "amount", "alias": "total" }],
            "condition": {
                "operator": "or",
                "conditions": [
                    { "field": "amount", "operator": ">=", "value": 100 },
                    { "field": "channel", "operator": "is null" }
                ]
            },
            "sort": [{ "field": "region", "order": "desc" }, { "field": "year" }],
            "page": { "page": 2, "size": 50 }
        }"#,
    )
    .unwrap();

    assert_eq!(m.table, "sales");
    assert_eq!(m.schema.as_deref(), Some("dw"));
    assert_eq!(m.rows[0], Dimension::new("region"));
    assert_eq!(m.rows[1].values, vec![json!(2023), json!(2024)]);
    assert_eq!(m.cols[0].alias.as_deref(), Some("total"));
    assert_eq!(m.sort[0].order, SortOrder::Desc);
    assert_eq!(m.sort[1].order, SortOrder::Asc);
    assert_eq!(m.page, Some(Page { page: 2, size: 50 }));

    match &m.condition {
        Some(ConditionNode::Compound { conditions, .. }) => {
            assert_eq!(conditions.len(), 2);
            assert_eq!(
                conditions[1],
                ConditionNode::simple("channel", "is null", None)
            );
        }
        other => panic!("expected compound condition, got {other:?}"),
    }

    let (sql, params) = m.render(&Default::default()).unwrap();
    assert_eq!(
        sql,
        "SELECT region, year, amount AS total FROM sales WHERE year IN (?, ?) AND (amount >= ? OR channel IS NULL) ORDER BY region DESC, year ASC LIMIT ? OFFSET ?"
    );
    assert_eq!(params.len(), 5);
}

#[test]
fn empty_object_is_default_model() {
    let m = QueryModel::from_json("{}").unwrap();
    assert_eq!(m, QueryModel::default());
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(QueryModel::from_json("{"), Err(Error::Json(_))));
    assert!(matches!(
        QueryModel::from_json(r#"{ "sort": [{ "field": "a", "order": "sideways" }] }"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn compound_without_conditions_key_is_empty() {
    let m = QueryModel::from_json(r#"{ "table": "t", "condition": { "operator": "and" } }"#)
        .unwrap();
    assert_eq!(m.condition, Some(ConditionNode::compound("and")));
    assert!(matches!(
        m.build_select_statement(),
        Err(Error::EmptyCondition { operator: "and" })
    ));
}

#[test]
fn simple_node_is_not_taken_for_compound() {
    let m = QueryModel::from_json(
        r#"{ "table": "t", "condition": { "field": "a", "operator": "=", "value": 1 } }"#,
    )
    .unwrap();
    assert_eq!(m.condition, Some(ConditionNode::simple("a", "=", json!(1))));
}

#[test]
fn explicit_null_value_matches_member_filter() {
    let m = QueryModel::from_json(
        r#"{ "table": "t", "rows": ["x"], "condition": { "field": "x", "operator": "=", "value": null } }"#,
    )
    .unwrap();
    assert_eq!(
        m.condition,
        Some(ConditionNode::simple("x", "=", Some(serde_json::Value::Null)))
    );
    assert_eq!(
        m.render(&Default::default()).unwrap().0,
        "SELECT x FROM t WHERE x IS NULL"
    );

    // без ключа `value` по-прежнему ошибка
    let m = QueryModel::from_json(
        r#"{ "table": "t", "condition": { "field": "x", "operator": "=" } }"#,
    )
    .unwrap();
    assert!(matches!(
        m.build_select_statement(),
        Err(Error::InvalidValue { ref field, .. }) if field == "x"
    ));
}

#[test]
fn repeated_dimensions_from_json_are_projected_once() {
    let m = QueryModel::from_json(r#"{ "table": "t", "rows": ["a", "a"], "cols": ["a"] }"#)
        .unwrap();
    assert_eq!(m.render(&Default::default()).unwrap().0, "SELECT a FROM t");
}
