use crate::expression::{Aggregate, Expression, col};

#[test]
fn expression_shortcuts_wrap_argument() {
    let e = col("amount").sum();
    match e {
        Expression::Aggregate {
            func,
            arg,
            distinct,
        } => {
            assert_eq!(func, Aggregate::Sum);
            assert_eq!(*arg, col("amount"));
            assert!(!distinct);
        }
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn distinct_marks_aggregate_even_through_alias() {
    let e = col("id").count().r#as("n").distinct();
    match e {
        Expression::Aliased { expr, alias } => {
            assert_eq!(alias, "n");
            assert!(matches!(*expr, Expression::Aggregate { distinct: true, .. }));
        }
        other => panic!("expected Aliased, got {other:?}"),
    }

    // на не-агрегате ничего не меняется
    assert_eq!(col("id").distinct(), col("id"));
}

#[test]
fn of_distinct_matches_shortcut() {
    assert_eq!(Aggregate::Max.of_distinct(col("x")), col("x").max().distinct());
}
