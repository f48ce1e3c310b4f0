use super::Table;
use crate::expression::Condition;
use crate::renderer::Keyword;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JoinType {
    /// Таблица соединяется сама с собой (второй экземпляр должен иметь алиас)
    SelfJoin,
    Inner,
    Left,
    LeftOuter,
    Right,
    RightOuter,
    Full,
    FullOuter,
    Cross,
}

impl JoinType {
    pub const fn keyword(self) -> Keyword {
        match self {
            JoinType::SelfJoin => Keyword::new("self join"),
            JoinType::Inner => Keyword::new("inner join"),
            JoinType::Left => Keyword::new("left join"),
            JoinType::LeftOuter => Keyword::new("left outer join"),
            JoinType::Right => Keyword::new("right join"),
            JoinType::RightOuter => Keyword::new("right outer join"),
            JoinType::Full => Keyword::new("full join"),
            JoinType::FullOuter => Keyword::new("full outer join"),
            JoinType::Cross => Keyword::new("cross join"),
        }
    }

    /// Часть перед JOIN; подсказка соединения печатается между ними.
    ///
    /// SELF JOIN не существует в SQL: с условием это INNER, без него CROSS.
    pub const fn prefix(self, has_condition: bool) -> Keyword {
        match self {
            JoinType::SelfJoin if has_condition => Keyword::new("inner"),
            JoinType::SelfJoin | JoinType::Cross => Keyword::new("cross"),
            JoinType::Inner => Keyword::new("inner"),
            JoinType::Left => Keyword::new("left"),
            JoinType::LeftOuter => Keyword::new("left outer"),
            JoinType::Right => Keyword::new("right"),
            JoinType::RightOuter => Keyword::new("right outer"),
            JoinType::Full => Keyword::new("full"),
            JoinType::FullOuter => Keyword::new("full outer"),
        }
    }

    #[inline]
    pub const fn requires_condition(self) -> bool {
        !matches!(self, JoinType::SelfJoin | JoinType::Cross)
    }
}

/// Подсказка оптимизатору для соединения (T-SQL: INNER HASH JOIN).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JoinHint {
    Hash,
    Loop,
    Merge,
    Remote,
}

impl JoinHint {
    pub const fn keyword(self) -> Keyword {
        match self {
            JoinHint::Hash => Keyword::new("hash"),
            JoinHint::Loop => Keyword::new("loop"),
            JoinHint::Merge => Keyword::new("merge"),
            JoinHint::Remote => Keyword::new("remote"),
        }
    }
}

/// Две соединённые таблицы и, возможно, условие.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinTable {
    pub left: Table,
    pub right: Table,
    pub join_type: JoinType,
    pub join_hint: Option<JoinHint>,
    pub condition: Option<Condition>,
}
