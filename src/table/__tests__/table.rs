use crate::expression::Expression;
use crate::query_builder::select;
use crate::table::{JoinHint, JoinType, Table, TableKind, TableRef, table};

#[test]
fn base_table_exposes_alias_or_name() {
    let t = table("users");
    assert_eq!(t.exposed_name(), Some("users"));
    let u = t.r#as("u");
    assert_eq!(u.exposed_name(), Some("u"));
    // оригинал не меняется
    assert_eq!(t.alias(), None);
}

#[test]
fn with_schema_keeps_schema_separately() {
    let t = Table::with_schema("public", "users");
    match t.kind() {
        TableKind::Base(b) => {
            assert_eq!(b.schema.as_deref(), Some("public"));
            assert_eq!(b.name, "users");
        }
        other => panic!("expected Base, got {other:?}"),
    }
}

#[test]
fn field_binds_to_aliased_ref() {
    let u = table("users").r#as("u");
    let f = u.field("id");
    assert_eq!(
        f.table(),
        Some(&TableRef {
            name: "users".into(),
            alias: Some("u".into()),
        })
    );
    assert_eq!(f.table().map(TableRef::exposed), Some("u"));
}

#[test]
fn join_builds_new_node_and_shares_sides() {
    let a = table("a");
    let b = table("b");
    let j = a.join(&b, JoinType::Inner, JoinHint::Merge);
    match j.kind() {
        TableKind::Join(jt) => {
            assert_eq!(jt.left, a);
            assert_eq!(jt.right, b);
            assert_eq!(jt.join_type, JoinType::Inner);
            assert_eq!(jt.join_hint, Some(JoinHint::Merge));
            assert!(jt.condition.is_none());
        }
        other => panic!("expected Join, got {other:?}"),
    }

    let with_on = j.on(a.field("id").eq(b.field("a_id")));
    assert!(matches!(with_on.kind(), TableKind::Join(jt) if jt.condition.is_some()));
    // исходное соединение без условия
    assert!(matches!(j.kind(), TableKind::Join(jt) if jt.condition.is_none()));
    assert_eq!(j.exposed_name(), None);
}

#[test]
fn join_type_prefixes() {
    assert_eq!(JoinType::SelfJoin.prefix(true).as_str(), "inner");
    assert_eq!(JoinType::SelfJoin.prefix(false).as_str(), "cross");
    assert_eq!(JoinType::FullOuter.prefix(true).as_str(), "full outer");
    assert!(JoinType::RightOuter.requires_condition());
    assert!(!JoinType::Cross.requires_condition());
}

#[test]
fn asterisk_variants() {
    let a = table("a");
    assert_eq!(a.asterisk(), Expression::Asterisk(Some(TableRef::named("a"))));
    let j = a.cross_join(&table("b"));
    assert_eq!(j.asterisk(), Expression::Asterisk(None));
}

#[test]
fn derived_table_takes_select_alias() {
    let users = table("users");
    let d = select([users.field("id")]).from(&users).r#as("sub").as_table();
    assert_eq!(d.exposed_name(), Some("sub"));
    assert_eq!(d.r#as("other").alias(), Some("other"));

    let anonymous = select([users.field("id")]).from(&users).as_table();
    assert_eq!(anonymous.exposed_name(), None);
}

#[test]
fn operations_on_wrong_kind_are_recorded() {
    let j = table("a").cross_join(&table("b"));
    assert_eq!(j.r#as("x").rejected(), &["as"]);
    assert_eq!(j.use_index(["i"]).rejected(), &["index hint"]);
    assert_eq!(table("a").on(crate::expression::col("x").eq(1)).rejected(), &["on"]);
    assert!(j.rejected().is_empty());
}
