use crate::expression::{Expression, asterisk, col, count_all, placeholder, val};
use crate::param::Param;
use crate::table::{Field, TableRef};

#[test]
fn col_without_dot_is_unbound() {
    assert_eq!(col("name"), Expression::Column(Field::new("name")));
}

#[test]
fn col_with_dot_binds_table() {
    match col("users.id") {
        Expression::Column(f) => {
            assert_eq!(f.name(), "id");
            assert_eq!(f.table(), Some(&TableRef::named("users")));
        }
        other => panic!("expected Column, got {other:?}"),
    }
}

#[test]
fn val_and_placeholder() {
    assert_eq!(val(5), Expression::Literal(Param::I32(5)));
    assert_eq!(val("x"), Expression::Literal(Param::Str("x".into())));
    assert_eq!(placeholder(None), Expression::Placeholder(None));
    assert_eq!(
        placeholder(Some("id")),
        Expression::Placeholder(Some("id".into()))
    );
}

#[test]
fn asterisk_helpers() {
    assert_eq!(asterisk(), Expression::Asterisk(None));
    assert!(matches!(
        count_all(),
        Expression::Aggregate { ref arg, distinct: false, .. } if **arg == Expression::Asterisk(None)
    ));
}

#[test]
fn vectors_and_arrays_become_lists() {
    let e: Expression = vec![1, 2].into();
    assert_eq!(
        e,
        Expression::List(vec![val(1), val(2)])
    );
    let e: Expression = ["a", "b"].into();
    assert!(matches!(e, Expression::List(ref items) if items.len() == 2));
}
