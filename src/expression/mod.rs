mod __tests__;
use std::sync::Arc;

use crate::param::Param;
use crate::query_builder::Select;
use crate::table::{Field, TableRef};

pub mod aggr;
pub mod alias;
pub mod cmp;
pub mod helpers;
pub mod logic;

pub use aggr::Aggregate;
pub use cmp::{Comparator, Comparison};
pub use helpers::{asterisk, col, count_all, placeholder, val};
pub use logic::{Condition, Logical, Operator};

/// Листовое значение запроса.
///
/// Литералы никогда не попадают в текст SQL: рендер заменяет их плейсхолдером
/// и складывает значение в список параметров.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Literal(Param),
    Column(Field),
    /// Плейсхолдер без значения, опционально именованный
    Placeholder(Option<String>),
    /// `*` или `t.*`
    Asterisk(Option<TableRef>),
    Aggregate {
        func: Aggregate,
        arg: Box<Expression>,
        distinct: bool,
    },
    /// Операнд для IN / BETWEEN
    List(Vec<Expression>),
    Subquery(Arc<Select>),
    /// Алиас учитывается только в проекции
    Aliased {
        expr: Box<Expression>,
        alias: String,
    },
}

impl Expression {
    /// Выражение без алиаса
    pub fn unaliased(&self) -> &Expression {
        match self {
            Expression::Aliased { expr, .. } => expr.unaliased(),
            other => other,
        }
    }
}

macro_rules! literal_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Expression {
                fn from(v: $t) -> Self {
                    Expression::Literal(Param::from(v))
                }
            }
        )*
    };
}

literal_from!(i8, i16, i32, i64, u32, f32, f64, bool, String, &String);

impl From<&str> for Expression {
    fn from(v: &str) -> Self {
        Expression::Literal(Param::from(v))
    }
}

impl From<Param> for Expression {
    fn from(p: Param) -> Self {
        Expression::Literal(p)
    }
}

impl From<Field> for Expression {
    fn from(f: Field) -> Self {
        Expression::Column(f)
    }
}

impl From<&Field> for Expression {
    fn from(f: &Field) -> Self {
        Expression::Column(f.clone())
    }
}

impl From<Select> for Expression {
    fn from(s: Select) -> Self {
        Expression::Subquery(Arc::new(s))
    }
}

impl<T: Into<Expression>> From<Vec<T>> for Expression {
    fn from(items: Vec<T>) -> Self {
        Expression::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Expression>, const N: usize> From<[T; N]> for Expression {
    fn from(items: [T; N]) -> Self {
        Expression::List(items.into_iter().map(Into::into).collect())
    }
}
