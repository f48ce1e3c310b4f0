use std::{borrow::Cow, fmt::Display, str::FromStr};

use serde::Deserialize;

use super::Error;

/// Ключевое слово SQL в каноническом (нижнем) регистре.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keyword(&'static str);

impl Keyword {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Текст ключевого слова в заданном регистре
    pub fn render(&self, case: KeywordCase) -> Cow<'static, str> {
        match case {
            KeywordCase::AsIs => Cow::Borrowed(self.0),
            KeywordCase::Lower => Cow::Owned(self.0.to_lowercase()),
            KeywordCase::Upper => Cow::Owned(self.0.to_uppercase()),
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Регистр, в котором печатаются ключевые слова.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum KeywordCase {
    #[default]
    AsIs,
    Lower,
    Upper,
}

impl Display for KeywordCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordCase::AsIs => write!(f, "asis"),
            KeywordCase::Lower => write!(f, "lower"),
            KeywordCase::Upper => write!(f, "upper"),
        }
    }
}

impl FromStr for KeywordCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asis" | "as_is" | "as-is" => Ok(KeywordCase::AsIs),
            "lower" => Ok(KeywordCase::Lower),
            "upper" => Ok(KeywordCase::Upper),
            _ => Err(Error::UnknownRenderStyle(s.to_string().into())),
        }
    }
}

impl TryFrom<String> for KeywordCase {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Числовые коды: 0 как есть, 1 нижний, 2 верхний.
impl TryFrom<i32> for KeywordCase {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(KeywordCase::AsIs),
            1 => Ok(KeywordCase::Lower),
            2 => Ok(KeywordCase::Upper),
            other => Err(Error::UnknownRenderStyle(other.to_string().into())),
        }
    }
}

pub(crate) const SELECT: Keyword = Keyword::new("select");
pub(crate) const DISTINCT: Keyword = Keyword::new("distinct");
pub(crate) const FROM: Keyword = Keyword::new("from");
pub(crate) const WHERE: Keyword = Keyword::new("where");
pub(crate) const GROUP_BY: Keyword = Keyword::new("group by");
pub(crate) const HAVING: Keyword = Keyword::new("having");
pub(crate) const ORDER_BY: Keyword = Keyword::new("order by");
pub(crate) const LIMIT: Keyword = Keyword::new("limit");
pub(crate) const OFFSET: Keyword = Keyword::new("offset");
pub(crate) const AS: Keyword = Keyword::new("as");
pub(crate) const ON: Keyword = Keyword::new("on");
pub(crate) const JOIN: Keyword = Keyword::new("join");
pub(crate) const NOT: Keyword = Keyword::new("not");
pub(crate) const AND: Keyword = Keyword::new("and");
pub(crate) const ASC: Keyword = Keyword::new("asc");
pub(crate) const DESC: Keyword = Keyword::new("desc");
pub(crate) const NULLS_FIRST: Keyword = Keyword::new("nulls first");
pub(crate) const NULLS_LAST: Keyword = Keyword::new("nulls last");
