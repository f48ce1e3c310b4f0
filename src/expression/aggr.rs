use crate::renderer::Keyword;

use super::Expression;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Count,
    Max,
    Min,
    Sum,
    Avg,
}

impl Aggregate {
    pub const fn keyword(self) -> Keyword {
        match self {
            Aggregate::Count => Keyword::new("count"),
            Aggregate::Max => Keyword::new("max"),
            Aggregate::Min => Keyword::new("min"),
            Aggregate::Sum => Keyword::new("sum"),
            Aggregate::Avg => Keyword::new("avg"),
        }
    }

    /// FUNC(arg)
    pub fn of<E: Into<Expression>>(self, arg: E) -> Expression {
        Expression::Aggregate {
            func: self,
            arg: Box::new(arg.into()),
            distinct: false,
        }
    }

    /// FUNC(DISTINCT arg)
    pub fn of_distinct<E: Into<Expression>>(self, arg: E) -> Expression {
        Expression::Aggregate {
            func: self,
            arg: Box::new(arg.into()),
            distinct: true,
        }
    }
}

impl Expression {
    /// COUNT(expr)
    pub fn count(self) -> Self {
        Aggregate::Count.of(self)
    }
    pub fn max(self) -> Self {
        Aggregate::Max.of(self)
    }
    pub fn min(self) -> Self {
        Aggregate::Min.of(self)
    }
    pub fn sum(self) -> Self {
        Aggregate::Sum.of(self)
    }
    pub fn avg(self) -> Self {
        Aggregate::Avg.of(self)
    }

    /// Делает агрегат DISTINCT: `col("id").count().distinct()` -> `COUNT(DISTINCT id)`.
    /// На остальных выражениях ничего не меняет.
    pub fn distinct(self) -> Self {
        match self {
            Expression::Aggregate { func, arg, .. } => Expression::Aggregate {
                func,
                arg,
                distinct: true,
            },
            Expression::Aliased { expr, alias } => Expression::Aliased {
                expr: Box::new(expr.distinct()),
                alias,
            },
            other => other,
        }
    }
}
