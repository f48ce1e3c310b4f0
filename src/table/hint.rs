use smallvec::SmallVec;

use crate::renderer::Keyword;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexHintKind {
    Use,
    Ignore,
    Force,
}

impl IndexHintKind {
    pub const fn keyword(self) -> Keyword {
        match self {
            IndexHintKind::Use => Keyword::new("use index"),
            IndexHintKind::Ignore => Keyword::new("ignore index"),
            IndexHintKind::Force => Keyword::new("force index"),
        }
    }
}

/// К какой части запроса относится подсказка.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndexHintScope {
    /// Без уточнения: печатается всегда
    #[default]
    Any,
    Join,
    OrderBy,
    GroupBy,
}

impl IndexHintScope {
    pub const fn keyword(self) -> Option<Keyword> {
        match self {
            IndexHintScope::Any => None,
            IndexHintScope::Join => Some(Keyword::new("for join")),
            IndexHintScope::OrderBy => Some(Keyword::new("for order by")),
            IndexHintScope::GroupBy => Some(Keyword::new("for group by")),
        }
    }
}

/// USE / IGNORE / FORCE INDEX [FOR ...] (names)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexHint {
    pub kind: IndexHintKind,
    pub scope: IndexHintScope,
    pub names: SmallVec<[String; 2]>,
}

impl IndexHint {
    pub fn new<I, S>(kind: IndexHintKind, scope: IndexHintScope, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            scope,
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}
