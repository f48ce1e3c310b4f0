use crate::expression::{Condition, Operator, col};

fn a() -> Condition {
    col("a").eq(1)
}
fn b() -> Condition {
    col("b").eq(2)
}
fn c() -> Condition {
    col("c").eq(3)
}

#[test]
fn and_chain_is_left_nested() {
    // a.and(b).and(c) = Logical(Logical(a, b), c)
    match a().and(b()).and(c()) {
        Condition::Logical(outer) => {
            assert_eq!(outer.operator, Operator::And);
            assert_eq!(*outer.right, c());
            match &*outer.left {
                Condition::Logical(inner) => {
                    assert_eq!(*inner.left, a());
                    assert_eq!(*inner.right, b());
                }
                other => panic!("expected nested Logical, got {other:?}"),
            }
        }
        other => panic!("expected Logical, got {other:?}"),
    }
}

#[test]
fn composition_does_not_change_operands() {
    let left = a();
    let combined = left.clone().or(b());
    assert_eq!(left, a());
    assert_ne!(combined, left);
}

#[test]
fn with_appends_to_group_and_ands_otherwise() {
    let g = Condition::any([a()]).with(b());
    assert_eq!(
        g,
        Condition::Group {
            operator: Operator::Or,
            conditions: vec![a(), b()],
        }
    );
    assert_eq!(a().with(b()), a().and(b()));
}

#[test]
fn not_wraps() {
    assert!(matches!(a().not(), Condition::Not(inner) if *inner == a()));
}

#[test]
fn conditions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Condition>();
    assert_send_sync::<crate::table::Table>();
    assert_send_sync::<crate::query_builder::Select>();
}
