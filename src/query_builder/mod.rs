use std::sync::Arc;

use crate::expression::{Condition, Expression};
use crate::param::Param;
use crate::renderer::{self, RenderStyle};
use crate::table::{GroupField, OrderField, Table};

mod __tests__;
mod group_by;
mod limit;
mod order_by;
mod queryable;
mod union;

pub use queryable::Queryable;
pub use union::{CombineOperator, except, intersect, union, union_all};

/// SELECT-запрос.
///
/// Каждый сеттер возвращает новый `Select`; поддеревья (таблицы, условия, подзапросы)
/// разделяются между копиями через `Arc`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Select {
    pub(crate) distinct: bool,
    pub(crate) projection: Vec<Expression>,
    pub(crate) source: Option<Table>,
    pub(crate) predicate: Option<Condition>,
    pub(crate) having: Option<Condition>,
    pub(crate) group_by: Vec<GroupField>,
    pub(crate) order_by: Vec<OrderField>,
    pub(crate) limit: Option<Expression>,
    pub(crate) offset: Option<Expression>,
    pub(crate) alias: Option<String>,
    pub(crate) combine: Vec<(CombineOperator, Arc<Select>)>,
}

/// SELECT <items>; пустая проекция печатается как `*`
pub fn select<I, E>(items: I) -> Select
where
    I: IntoIterator<Item = E>,
    E: Into<Expression>,
{
    Select::new().columns(items)
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменяет проекцию
    pub fn columns<I, E>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        self.projection = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Источник: таблица или дерево соединений
    pub fn from(mut self, t: &Table) -> Self {
        self.source = Some(t.clone());
        self
    }

    /// WHERE; заменяет прежний предикат (для конъюнкции: `a.and(b)` заранее)
    pub fn r#where(mut self, c: Condition) -> Self {
        self.predicate = Some(c);
        self
    }

    /// HAVING; заменяет прежний
    pub fn having(mut self, c: Condition) -> Self {
        self.having = Some(c);
        self
    }

    /// Алиас для использования запроса как подзапроса во FROM
    pub fn r#as<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Подзапрос как таблица для FROM / JOIN
    pub fn as_table(self) -> Table {
        Table::derived(self)
    }

    #[inline]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    #[inline]
    pub fn source(&self) -> Option<&Table> {
        self.source.as_ref()
    }

    #[inline]
    pub fn predicate(&self) -> Option<&Condition> {
        self.predicate.as_ref()
    }

    #[inline]
    pub fn projection(&self) -> &[Expression] {
        &self.projection
    }

    /// Рендер в SQL + параметры
    pub fn render(&self, style: &RenderStyle) -> renderer::Result<(String, Vec<Param>)> {
        renderer::render(self, style)
    }
}
