use crate::table::{IndexHintKind, IndexHintScope, TableKind, table};

#[test]
fn hints_accumulate_in_order() {
    let t = table("users")
        .use_index(["a", "b"])
        .force_index_for_join(["c"])
        .ignore_index_for_group_by(["d"]);

    let TableKind::Base(b) = t.kind() else {
        panic!("expected Base");
    };
    let got: Vec<_> = b
        .hints
        .iter()
        .map(|h| (h.kind, h.scope, h.names.to_vec()))
        .collect();
    assert_eq!(
        got,
        vec![
            (IndexHintKind::Use, IndexHintScope::Any, vec!["a".to_string(), "b".to_string()]),
            (IndexHintKind::Force, IndexHintScope::Join, vec!["c".to_string()]),
            (IndexHintKind::Ignore, IndexHintScope::GroupBy, vec!["d".to_string()]),
        ]
    );
}

#[test]
fn hints_are_per_instance() {
    let plain = table("users");
    let hinted = plain.use_index_for_order_by(["idx"]);
    let TableKind::Base(b) = plain.kind() else {
        panic!("expected Base");
    };
    assert!(b.hints.is_empty());
    let TableKind::Base(b) = hinted.kind() else {
        panic!("expected Base");
    };
    assert_eq!(b.hints.len(), 1);
}

#[test]
fn scope_keywords() {
    assert!(IndexHintScope::Any.keyword().is_none());
    assert_eq!(
        IndexHintScope::OrderBy.keyword().map(|k| k.as_str()),
        Some("for order by")
    );
    assert_eq!(IndexHintKind::Force.keyword().as_str(), "force index");
}
