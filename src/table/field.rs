use super::TableRef;
use crate::expression::{Condition, Expression};

/// Колонка таблицы.
///
/// Ссылка на таблицу: только ключ для поиска (имя + алиас), владения нет.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    table: Option<TableRef>,
    name: String,
    alias: Option<String>,
}

impl Field {
    /// Колонка без привязки к таблице
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            table: None,
            name: name.into(),
            alias: None,
        }
    }

    pub fn bound<S: Into<String>>(table: TableRef, name: S) -> Self {
        Self {
            table: Some(table),
            name: name.into(),
            alias: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn table(&self) -> Option<&TableRef> {
        self.table.as_ref()
    }

    #[inline]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Копия поля с алиасом для проекции
    pub fn r#as<S: Into<String>>(&self, alias: S) -> Field {
        Field {
            alias: Some(alias.into()),
            ..self.clone()
        }
    }

    #[inline]
    fn expr(&self) -> Expression {
        Expression::Column(self.clone())
    }

    pub fn eq<R: Into<Expression>>(&self, rhs: R) -> Condition {
        self.expr().eq(rhs)
    }
    pub fn ne<R: Into<Expression>>(&self, rhs: R) -> Condition {
        self.expr().ne(rhs)
    }
    pub fn lt<R: Into<Expression>>(&self, rhs: R) -> Condition {
        self.expr().lt(rhs)
    }
    pub fn gt<R: Into<Expression>>(&self, rhs: R) -> Condition {
        self.expr().gt(rhs)
    }
    pub fn le<R: Into<Expression>>(&self, rhs: R) -> Condition {
        self.expr().le(rhs)
    }
    pub fn ge<R: Into<Expression>>(&self, rhs: R) -> Condition {
        self.expr().ge(rhs)
    }
    pub fn is_in<R: Into<Expression>>(&self, items: R) -> Condition {
        self.expr().is_in(items)
    }
    pub fn not_in<R: Into<Expression>>(&self, items: R) -> Condition {
        self.expr().not_in(items)
    }
    pub fn like<R: Into<Expression>>(&self, pattern: R) -> Condition {
        self.expr().like(pattern)
    }
    pub fn not_like<R: Into<Expression>>(&self, pattern: R) -> Condition {
        self.expr().not_like(pattern)
    }
    pub fn ilike<R: Into<Expression>>(&self, pattern: R) -> Condition {
        self.expr().ilike(pattern)
    }
    pub fn not_ilike<R: Into<Expression>>(&self, pattern: R) -> Condition {
        self.expr().not_ilike(pattern)
    }
    pub fn between<A: Into<Expression>, B: Into<Expression>>(&self, low: A, high: B) -> Condition {
        self.expr().between(low, high)
    }
    pub fn not_between<A: Into<Expression>, B: Into<Expression>>(
        &self,
        low: A,
        high: B,
    ) -> Condition {
        self.expr().not_between(low, high)
    }
    pub fn is_null(&self) -> Condition {
        self.expr().is_null()
    }
    pub fn is_not_null(&self) -> Condition {
        self.expr().is_not_null()
    }

    /// ORDER BY field ASC
    pub fn asc(&self) -> OrderField {
        OrderField::new(self.clone())
    }

    /// ORDER BY field DESC
    pub fn desc(&self) -> OrderField {
        OrderField::new(self.clone()).desc()
    }

    pub fn group(&self) -> GroupField {
        GroupField {
            field: self.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NullsOrder {
    #[default]
    Unspecified,
    First,
    Last,
}

/// Поле для ORDER BY.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderField {
    pub field: Field,
    pub direction: SortDirection,
    pub nulls: NullsOrder,
}

impl OrderField {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
            nulls: NullsOrder::Unspecified,
        }
    }

    pub fn asc(mut self) -> Self {
        self.direction = SortDirection::Asc;
        self
    }

    pub fn desc(mut self) -> Self {
        self.direction = SortDirection::Desc;
        self
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = NullsOrder::First;
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = NullsOrder::Last;
        self
    }
}

impl From<Field> for OrderField {
    fn from(f: Field) -> Self {
        OrderField::new(f)
    }
}

impl From<&Field> for OrderField {
    fn from(f: &Field) -> Self {
        OrderField::new(f.clone())
    }
}

/// Поле для GROUP BY, без модификаторов.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupField {
    pub field: Field,
}

impl From<Field> for GroupField {
    fn from(field: Field) -> Self {
        GroupField { field }
    }
}

impl From<&Field> for GroupField {
    fn from(f: &Field) -> Self {
        GroupField { field: f.clone() }
    }
}
