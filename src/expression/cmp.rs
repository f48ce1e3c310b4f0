use super::{Condition, Expression};
use crate::renderer::Keyword;

/// Оператор сравнения для предикатов.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    In,
    NotIn,
    Like,
    NotLike,
    /// ILIKE (регистронезависимый LIKE)
    ILike,
    NotILike,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
}

impl Comparator {
    pub const fn keyword(self) -> Keyword {
        match self {
            Comparator::Eq => Keyword::new("="),
            Comparator::Ne => Keyword::new("<>"),
            Comparator::Lt => Keyword::new("<"),
            Comparator::Gt => Keyword::new(">"),
            Comparator::Le => Keyword::new("<="),
            Comparator::Ge => Keyword::new(">="),
            Comparator::In => Keyword::new("in"),
            Comparator::NotIn => Keyword::new("not in"),
            Comparator::Like => Keyword::new("like"),
            Comparator::NotLike => Keyword::new("not like"),
            Comparator::ILike => Keyword::new("ilike"),
            Comparator::NotILike => Keyword::new("not ilike"),
            Comparator::Between => Keyword::new("between"),
            Comparator::NotBetween => Keyword::new("not between"),
            Comparator::IsNull => Keyword::new("is null"),
            Comparator::IsNotNull => Keyword::new("is not null"),
        }
    }

    /// IS NULL / IS NOT NULL не используют правый операнд
    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(self, Comparator::IsNull | Comparator::IsNotNull)
    }
}

/// Листовой предикат: `left <op> right`.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub left: Expression,
    pub comparator: Comparator,
    pub right: Option<Expression>,
}

impl Comparison {
    pub fn new<L, R>(left: L, comparator: Comparator, right: R) -> Self
    where
        L: Into<Expression>,
        R: Into<Expression>,
    {
        let right = if comparator.is_unary() {
            None
        } else {
            Some(right.into())
        };
        Self {
            left: left.into(),
            comparator,
            right,
        }
    }

    pub fn unary<L: Into<Expression>>(left: L, comparator: Comparator) -> Self {
        Self {
            left: left.into(),
            comparator,
            right: None,
        }
    }
}

impl From<Comparison> for Condition {
    fn from(c: Comparison) -> Self {
        Condition::Comparison(c)
    }
}

fn bin(left: Expression, op: Comparator, right: Expression) -> Condition {
    Condition::Comparison(Comparison {
        left,
        comparator: op,
        right: Some(right),
    })
}

impl Expression {
    pub fn eq<R: Into<Expression>>(self, rhs: R) -> Condition {
        bin(self, Comparator::Eq, rhs.into())
    }
    pub fn ne<R: Into<Expression>>(self, rhs: R) -> Condition {
        bin(self, Comparator::Ne, rhs.into())
    }
    pub fn lt<R: Into<Expression>>(self, rhs: R) -> Condition {
        bin(self, Comparator::Lt, rhs.into())
    }
    pub fn gt<R: Into<Expression>>(self, rhs: R) -> Condition {
        bin(self, Comparator::Gt, rhs.into())
    }
    pub fn le<R: Into<Expression>>(self, rhs: R) -> Condition {
        bin(self, Comparator::Le, rhs.into())
    }
    pub fn ge<R: Into<Expression>>(self, rhs: R) -> Condition {
        bin(self, Comparator::Ge, rhs.into())
    }

    /// `IN ( ... )`: список или подзапрос
    pub fn is_in<R: Into<Expression>>(self, items: R) -> Condition {
        bin(self, Comparator::In, items.into())
    }
    pub fn not_in<R: Into<Expression>>(self, items: R) -> Condition {
        bin(self, Comparator::NotIn, items.into())
    }

    pub fn like<R: Into<Expression>>(self, pattern: R) -> Condition {
        bin(self, Comparator::Like, pattern.into())
    }
    pub fn not_like<R: Into<Expression>>(self, pattern: R) -> Condition {
        bin(self, Comparator::NotLike, pattern.into())
    }
    pub fn ilike<R: Into<Expression>>(self, pattern: R) -> Condition {
        bin(self, Comparator::ILike, pattern.into())
    }
    pub fn not_ilike<R: Into<Expression>>(self, pattern: R) -> Condition {
        bin(self, Comparator::NotILike, pattern.into())
    }

    pub fn between<A, B>(self, low: A, high: B) -> Condition
    where
        A: Into<Expression>,
        B: Into<Expression>,
    {
        bin(
            self,
            Comparator::Between,
            Expression::List(vec![low.into(), high.into()]),
        )
    }
    pub fn not_between<A, B>(self, low: A, high: B) -> Condition
    where
        A: Into<Expression>,
        B: Into<Expression>,
    {
        bin(
            self,
            Comparator::NotBetween,
            Expression::List(vec![low.into(), high.into()]),
        )
    }

    pub fn is_null(self) -> Condition {
        Condition::Comparison(Comparison::unary(self, Comparator::IsNull))
    }
    pub fn is_not_null(self) -> Condition {
        Condition::Comparison(Comparison::unary(self, Comparator::IsNotNull))
    }
}
