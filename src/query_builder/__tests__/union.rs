use std::sync::Arc;

use crate::expression::col;
use crate::query_builder::{CombineOperator, Select, except, intersect, select, union, union_all};

fn q(name: &str) -> Select {
    select([col("id")]).from(&crate::table::table(name))
}

#[test]
fn combine_appends_in_order() {
    let s = q("a").union(q("b")).except_all(q("c"));
    let ops: Vec<_> = s.combine.iter().map(|(op, _)| *op).collect();
    assert_eq!(ops, vec![CombineOperator::Union, CombineOperator::ExceptAll]);
    assert_eq!(*s.combine[1].1, q("c"));
}

#[test]
fn free_functions_match_methods() {
    assert_eq!(union(q("a"), q("b")), q("a").union(q("b")));
    assert_eq!(union_all(q("a"), q("b")), q("a").union_all(q("b")));
    assert_eq!(except(q("a"), q("b")), q("a").except(q("b")));
    assert_eq!(intersect(q("a"), q("b")), q("a").intersect(q("b")));
}

#[test]
fn combined_branches_are_shared_on_clone() {
    let s = q("a").intersect(q("b"));
    let copy = s.clone();
    assert!(Arc::ptr_eq(&s.combine[0].1, &copy.combine[0].1));
}

#[test]
fn keywords() {
    assert_eq!(CombineOperator::UnionAll.keyword().as_str(), "union all");
    assert_eq!(CombineOperator::IntersectAll.keyword().as_str(), "intersect all");
}
