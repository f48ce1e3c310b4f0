use std::sync::Arc;

use crate::query_builder::Select;
use crate::renderer::Keyword;

/// Операция над результатами двух запросов.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombineOperator {
    Union,
    UnionAll,
    Except,
    ExceptAll,
    Intersect,
    IntersectAll,
}

impl CombineOperator {
    pub const fn keyword(self) -> Keyword {
        match self {
            CombineOperator::Union => Keyword::new("union"),
            CombineOperator::UnionAll => Keyword::new("union all"),
            CombineOperator::Except => Keyword::new("except"),
            CombineOperator::ExceptAll => Keyword::new("except all"),
            CombineOperator::Intersect => Keyword::new("intersect"),
            CombineOperator::IntersectAll => Keyword::new("intersect all"),
        }
    }
}

impl Select {
    /// `(self) <op> (rhs)`; цепочки остаются плоскими: `(a) UNION (b) EXCEPT (c)`
    pub fn combine(mut self, op: CombineOperator, rhs: Select) -> Self {
        self.combine.push((op, Arc::new(rhs)));
        self
    }

    /// UNION (по умолчанию: DISTINCT)
    pub fn union(self, rhs: Select) -> Self {
        self.combine(CombineOperator::Union, rhs)
    }

    /// UNION ALL
    pub fn union_all(self, rhs: Select) -> Self {
        self.combine(CombineOperator::UnionAll, rhs)
    }

    pub fn except(self, rhs: Select) -> Self {
        self.combine(CombineOperator::Except, rhs)
    }

    pub fn except_all(self, rhs: Select) -> Self {
        self.combine(CombineOperator::ExceptAll, rhs)
    }

    pub fn intersect(self, rhs: Select) -> Self {
        self.combine(CombineOperator::Intersect, rhs)
    }

    pub fn intersect_all(self, rhs: Select) -> Self {
        self.combine(CombineOperator::IntersectAll, rhs)
    }
}

pub fn union(left: Select, right: Select) -> Select {
    left.union(right)
}

pub fn union_all(left: Select, right: Select) -> Select {
    left.union_all(right)
}

pub fn except(left: Select, right: Select) -> Select {
    left.except(right)
}

pub fn intersect(left: Select, right: Select) -> Select {
    left.intersect(right)
}
