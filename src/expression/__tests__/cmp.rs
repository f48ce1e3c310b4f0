use crate::expression::{Comparator, Comparison, Condition, Expression, col, val};

fn comparison(c: Condition) -> Comparison {
    match c {
        Condition::Comparison(c) => c,
        other => panic!("expected Comparison, got {other:?}"),
    }
}

#[test]
fn binary_comparators_keep_right_operand() {
    let c = comparison(col("age").ge(18));
    assert_eq!(c.left, col("age"));
    assert_eq!(c.comparator, Comparator::Ge);
    assert_eq!(c.right, Some(val(18)));
}

#[test]
fn unary_comparators_ignore_right_operand() {
    let c = Comparison::new(col("x"), Comparator::IsNotNull, 1);
    assert_eq!(c.right, None);
    assert!(Comparator::IsNull.is_unary());
    assert!(!Comparator::Like.is_unary());
}

#[test]
fn between_builds_two_item_list() {
    let c = comparison(col("n").between(1, 10));
    assert_eq!(c.comparator, Comparator::Between);
    assert_eq!(c.right, Some(Expression::List(vec![val(1), val(10)])));
}

#[test]
fn keywords_are_canonical_lowercase() {
    assert_eq!(Comparator::Ne.keyword().as_str(), "<>");
    assert_eq!(Comparator::NotIn.keyword().as_str(), "not in");
    assert_eq!(Comparator::NotILike.keyword().as_str(), "not ilike");
    assert_eq!(Comparator::IsNotNull.keyword().as_str(), "is not null");
}

#[test]
fn field_methods_delegate_to_expression() {
    let users = crate::table::table("users");
    let from_field = comparison(users.field("id").is_in(vec![1, 2]));
    assert_eq!(from_field.comparator, Comparator::In);
    assert!(matches!(from_field.left, Expression::Column(_)));
}
