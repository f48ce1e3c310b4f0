mod __tests__;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::expression::{Condition, Expression};
use crate::query_builder::Select;

pub mod field;
pub mod hint;
pub mod join;

pub use field::{Field, GroupField, NullsOrder, OrderField, SortDirection};
pub use hint::{IndexHint, IndexHintKind, IndexHintScope};
pub use join::{JoinHint, JoinTable, JoinType};

/// Ключ для поиска таблицы из поля: имя + алиас.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Имя, под которым таблица видна в запросе
    #[inline]
    pub fn exposed(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Обычная таблица (опционально со схемой и алиасом).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseTable {
    pub name: String,
    pub schema: Option<String>,
    pub alias: Option<String>,
    pub hints: Vec<IndexHint>,
    /// Известные колонки; если заданы, рендер проверяет поля по ним
    pub columns: Option<Vec<String>>,
}

impl BaseTable {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn table_ref(&self) -> TableRef {
        TableRef {
            name: self.name.clone(),
            alias: self.alias.clone(),
        }
    }
}

/// Подзапрос во FROM: (SELECT ...) AS alias
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedTable {
    pub select: Arc<Select>,
    pub alias: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableKind {
    Base(BaseTable),
    Join(JoinTable),
    Derived(DerivedTable),
}

/// Дешёвый в клонировании дескриптор таблицы.
///
/// Все методы возвращают новое значение; исходная таблица и её поддеревья не меняются,
/// поэтому одну и ту же таблицу можно использовать в нескольких запросах.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    kind: Arc<TableKind>,
    /// Операции, неприменимые к этому виду таблицы; ошибка всплывает при рендере
    rejected: SmallVec<[&'static str; 1]>,
}

/// Таблица по имени
pub fn table<S: Into<String>>(name: S) -> Table {
    Table::new(name)
}

impl From<BaseTable> for Table {
    fn from(b: BaseTable) -> Self {
        Table::from_kind(TableKind::Base(b))
    }
}

impl From<JoinTable> for Table {
    fn from(j: JoinTable) -> Self {
        Table::from_kind(TableKind::Join(j))
    }
}

impl Table {
    fn from_kind(kind: TableKind) -> Self {
        Self {
            kind: Arc::new(kind),
            rejected: SmallVec::new(),
        }
    }

    pub fn new<S: Into<String>>(name: S) -> Self {
        BaseTable::new(name).into()
    }

    /// schema.name
    pub fn with_schema<S: Into<String>, N: Into<String>>(schema: S, name: N) -> Self {
        BaseTable {
            schema: Some(schema.into()),
            ..BaseTable::new(name)
        }
        .into()
    }

    /// Подзапрос как источник; алиас берётся из `Select::r#as`
    pub fn derived(select: Select) -> Self {
        let alias = select.alias().map(str::to_string);
        Table::from_kind(TableKind::Derived(DerivedTable {
            select: Arc::new(select),
            alias,
        }))
    }

    #[inline]
    pub fn kind(&self) -> &TableKind {
        &self.kind
    }

    #[inline]
    pub(crate) fn rejected(&self) -> &[&'static str] {
        &self.rejected
    }

    fn reject(&self, operation: &'static str) -> Table {
        let mut t = self.clone();
        t.rejected.push(operation);
        t
    }

    /// Имя, под которым таблица видна в запросе (у соединения его нет)
    pub fn exposed_name(&self) -> Option<&str> {
        match self.kind() {
            TableKind::Base(b) => Some(b.alias.as_deref().unwrap_or(&b.name)),
            TableKind::Derived(d) => d.alias.as_deref(),
            TableKind::Join(_) => None,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self.kind() {
            TableKind::Base(b) => b.alias.as_deref(),
            TableKind::Derived(d) => d.alias.as_deref(),
            TableKind::Join(_) => None,
        }
    }

    fn table_ref(&self) -> Option<TableRef> {
        match self.kind() {
            TableKind::Base(b) => Some(b.table_ref()),
            TableKind::Derived(d) => d.alias.as_ref().map(TableRef::named),
            TableKind::Join(j) => j.left.table_ref(),
        }
    }

    /// Поле этой таблицы. У соединения поле привязывается к самой левой таблице.
    pub fn field<S: Into<String>>(&self, name: S) -> Field {
        match self.table_ref() {
            Some(r) => Field::bound(r, name),
            None => Field::new(name),
        }
    }

    /// Копия таблицы с алиасом
    pub fn r#as<S: Into<String>>(&self, alias: S) -> Table {
        let alias = alias.into();
        let kind = match self.kind() {
            TableKind::Base(b) => TableKind::Base(BaseTable {
                alias: Some(alias),
                ..b.clone()
            }),
            TableKind::Derived(d) => TableKind::Derived(DerivedTable {
                alias: Some(alias),
                ..d.clone()
            }),
            TableKind::Join(_) => return self.reject("as"),
        };
        Table {
            kind: Arc::new(kind),
            rejected: self.rejected.clone(),
        }
    }

    /// `t.*` для SELECT. У соединения: просто `*`.
    pub fn asterisk(&self) -> Expression {
        match self.kind() {
            TableKind::Join(_) => Expression::Asterisk(None),
            _ => Expression::Asterisk(self.table_ref()),
        }
    }

    /// Известные колонки таблицы: поля вне списка дают `UnknownColumn` при рендере
    pub fn with_columns<I, S>(&self, columns: I) -> Table
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.kind() {
            TableKind::Base(b) => Table {
                kind: Arc::new(TableKind::Base(BaseTable {
                    columns: Some(columns.into_iter().map(Into::into).collect()),
                    ..b.clone()
                })),
                rejected: self.rejected.clone(),
            },
            _ => self.reject("with_columns"),
        }
    }

    /// Соединение без условия; условие добавляется через `on`
    pub fn join<H>(&self, other: &Table, join_type: JoinType, join_hint: H) -> Table
    where
        H: Into<Option<JoinHint>>,
    {
        JoinTable {
            left: self.clone(),
            right: other.clone(),
            join_type,
            join_hint: join_hint.into(),
            condition: None,
        }
        .into()
    }

    /// Условие для последнего соединения (заменяет прежнее)
    pub fn on(&self, condition: Condition) -> Table {
        match self.kind() {
            TableKind::Join(j) => Table {
                kind: Arc::new(TableKind::Join(JoinTable {
                    condition: Some(condition),
                    ..j.clone()
                })),
                rejected: self.rejected.clone(),
            },
            _ => self.reject("on"),
        }
    }

    pub fn inner_join(&self, other: &Table, condition: Condition) -> Table {
        self.join(other, JoinType::Inner, None).on(condition)
    }

    pub fn left_join(&self, other: &Table, condition: Condition) -> Table {
        self.join(other, JoinType::Left, None).on(condition)
    }

    pub fn right_join(&self, other: &Table, condition: Condition) -> Table {
        self.join(other, JoinType::Right, None).on(condition)
    }

    pub fn full_join(&self, other: &Table, condition: Condition) -> Table {
        self.join(other, JoinType::Full, None).on(condition)
    }

    pub fn cross_join(&self, other: &Table) -> Table {
        self.join(other, JoinType::Cross, None)
    }

    fn with_hint<I, S>(&self, kind: IndexHintKind, scope: IndexHintScope, names: I) -> Table
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.kind() {
            TableKind::Base(b) => {
                let mut b = b.clone();
                // подсказки накапливаются
                b.hints.push(IndexHint::new(kind, scope, names));
                Table {
                    kind: Arc::new(TableKind::Base(b)),
                    rejected: self.rejected.clone(),
                }
            }
            _ => self.reject("index hint"),
        }
    }

    /// table.use_index(["index1", "index2"])
    pub fn use_index<I: IntoIterator<Item = S>, S: Into<String>>(&self, names: I) -> Table {
        self.with_hint(IndexHintKind::Use, IndexHintScope::Any, names)
    }
    pub fn use_index_for_join<I: IntoIterator<Item = S>, S: Into<String>>(&self, names: I) -> Table {
        self.with_hint(IndexHintKind::Use, IndexHintScope::Join, names)
    }
    pub fn use_index_for_order_by<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Use, IndexHintScope::OrderBy, names)
    }
    pub fn use_index_for_group_by<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Use, IndexHintScope::GroupBy, names)
    }

    pub fn ignore_index<I: IntoIterator<Item = S>, S: Into<String>>(&self, names: I) -> Table {
        self.with_hint(IndexHintKind::Ignore, IndexHintScope::Any, names)
    }
    pub fn ignore_index_for_join<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Ignore, IndexHintScope::Join, names)
    }
    pub fn ignore_index_for_order_by<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Ignore, IndexHintScope::OrderBy, names)
    }
    pub fn ignore_index_for_group_by<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Ignore, IndexHintScope::GroupBy, names)
    }

    pub fn force_index<I: IntoIterator<Item = S>, S: Into<String>>(&self, names: I) -> Table {
        self.with_hint(IndexHintKind::Force, IndexHintScope::Any, names)
    }
    pub fn force_index_for_join<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Force, IndexHintScope::Join, names)
    }
    pub fn force_index_for_order_by<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Force, IndexHintScope::OrderBy, names)
    }
    pub fn force_index_for_group_by<I: IntoIterator<Item = S>, S: Into<String>>(
        &self,
        names: I,
    ) -> Table {
        self.with_hint(IndexHintKind::Force, IndexHintScope::GroupBy, names)
    }
}
