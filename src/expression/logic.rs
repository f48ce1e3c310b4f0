use std::sync::Arc;

use super::{Comparator, Comparison, Expression};
use crate::renderer::Keyword;

/// Логическая связка условий.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    pub const fn keyword(self) -> Keyword {
        match self {
            Operator::And => Keyword::new("and"),
            Operator::Or => Keyword::new("or"),
        }
    }
}

/// Узел дерева условий: `left <op> right`. Поддеревья разделяются, а не копируются.
#[derive(Clone, Debug, PartialEq)]
pub struct Logical {
    pub left: Arc<Condition>,
    pub right: Arc<Condition>,
    pub operator: Operator,
}

/// Условие (предикат) для WHERE / HAVING / ON.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Comparison(Comparison),
    Logical(Logical),
    /// N-арная связка. Пустая группа: ошибка рендера.
    Group {
        operator: Operator,
        conditions: Vec<Condition>,
    },
    Not(Arc<Condition>),
}

impl Condition {
    /// `left <cmp> right`; для IS NULL / IS NOT NULL правый операнд отбрасывается
    pub fn compare<L, R>(left: L, comparator: Comparator, right: R) -> Self
    where
        L: Into<Expression>,
        R: Into<Expression>,
    {
        Condition::Comparison(Comparison::new(left, comparator, right))
    }

    fn logical(self, operator: Operator, rhs: Condition) -> Condition {
        Condition::Logical(Logical {
            left: Arc::new(self),
            right: Arc::new(rhs),
            operator,
        })
    }

    /// `a.and(b).and(c)` строит `Logical(Logical(a, b), c)`
    pub fn and(self, rhs: Condition) -> Condition {
        self.logical(Operator::And, rhs)
    }

    pub fn or(self, rhs: Condition) -> Condition {
        self.logical(Operator::Or, rhs)
    }

    pub fn not(self) -> Condition {
        Condition::Not(Arc::new(self))
    }

    /// Группа AND из произвольного числа условий
    pub fn all<I>(conditions: I) -> Condition
    where
        I: IntoIterator<Item = Condition>,
    {
        Condition::Group {
            operator: Operator::And,
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Группа OR из произвольного числа условий
    pub fn any<I>(conditions: I) -> Condition
    where
        I: IntoIterator<Item = Condition>,
    {
        Condition::Group {
            operator: Operator::Or,
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Добавляет условие в группу; для остальных узлов то же, что `and`
    pub fn with(self, item: Condition) -> Condition {
        match self {
            Condition::Group {
                operator,
                mut conditions,
            } => {
                conditions.push(item);
                Condition::Group {
                    operator,
                    conditions,
                }
            }
            other => other.and(item),
        }
    }
}
