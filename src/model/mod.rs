//! Декларативное описание запроса (строки/колонки, условие, сортировка, страница),
//! которое компилируется в [`Select`].
//!
//! ```json
//! {
//!   "table": "sales",
//!   "rows": ["region", { "field": "year", "values": [2023, 2024] }],
//!   "cols": [{ "field": "amount", "alias": "total" }],
//!   "condition": { "field": "amount", "operator": ">=", "value": 100 },
//!   "sort": [{ "field": "region", "order": "desc" }],
//!   "page": { "page": 2, "size": 50 }
//! }
//! ```
mod __tests__;
mod condition;
mod error;

pub use condition::ConditionNode;
pub use error::{Error, Result};

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::expression::{Comparator, Comparison, Condition, Expression};
use crate::param::Param;
use crate::query_builder::Select;
use crate::renderer::RenderStyle;
use crate::table::{OrderField, Table};
use condition::scalar_param;

/// Измерение: поле в проекции и, если заданы `values`, фильтр по ним.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "DimensionRepr")]
pub struct Dimension {
    pub field: String,
    pub values: Vec<Value>,
    pub alias: Option<String>,
}

// "region" или { "field": "region", ... }
#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Name(String),
    Full {
        field: String,
        #[serde(default)]
        values: Vec<Value>,
        #[serde(default)]
        alias: Option<String>,
    },
}

impl From<DimensionRepr> for Dimension {
    fn from(r: DimensionRepr) -> Self {
        match r {
            DimensionRepr::Name(field) => Dimension::new(field),
            DimensionRepr::Full {
                field,
                values,
                alias,
            } => Dimension {
                field,
                values,
                alias,
            },
        }
    }
}

impl Dimension {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            values: Vec::new(),
            alias: None,
        }
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    fn projection(&self, source: &Table) -> Expression {
        let field = source.field(&self.field);
        match &self.alias {
            Some(alias) => field.r#as(alias).into(),
            None => field.into(),
        }
    }

    /// `field = v` для одного значения, `field IN (...)` для нескольких
    fn member_filter(&self, source: &Table) -> Result<Option<Condition>> {
        let field = source.field(&self.field);
        let mut params = self
            .values
            .iter()
            .map(|v| scalar_param(&self.field, v))
            .collect::<Result<Vec<Param>>>()?;

        let cond = match params.len() {
            0 => return Ok(None),
            1 => match params.pop() {
                Some(Param::Null) => Comparison::unary(field, Comparator::IsNull).into(),
                Some(p) => field.eq(p),
                None => return Ok(None),
            },
            _ => field.is_in(params.into_iter().map(Expression::from).collect::<Vec<_>>()),
        };
        Ok(Some(cond))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

/// Страница с 1; `size == 0`: без пагинации
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub page: u64,
    pub size: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryModel {
    pub table: String,
    pub schema: Option<String>,
    pub rows: Vec<Dimension>,
    pub cols: Vec<Dimension>,
    pub condition: Option<ConditionNode>,
    pub sort: Vec<Sort>,
    pub page: Option<Page>,
}

impl QueryModel {
    pub fn new<S: Into<String>>(table: S) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    fn source(&self) -> Result<Table> {
        if self.table.is_empty() {
            return Err(Error::MissingTable);
        }
        Ok(match &self.schema {
            Some(schema) => Table::with_schema(schema, &self.table),
            None => Table::new(&self.table),
        })
    }

    /// Компиляция модели в SELECT.
    ///
    /// Проекция: сначала `rows`, затем `cols`. Фильтры по значениям измерений
    /// идут в WHERE перед явным условием, всё через AND.
    /// Измерения с одним и тем же `field` учитываются один раз, первое побеждает.
    pub fn build_select_statement(&self) -> Result<Select> {
        let source = self.source()?;
        let dims = self.dimensions();

        let mut filters = Vec::new();
        for dim in &dims {
            if let Some(f) = dim.member_filter(&source)? {
                filters.push(f);
            }
        }
        if let Some(node) = &self.condition {
            filters.push(node.compile(&source)?);
        }
        let filter_count = filters.len();

        let mut select = Select::new()
            .columns(dims.iter().map(|d| d.projection(&source)))
            .from(&source);
        if !filters.is_empty() {
            select = select.r#where(Condition::all(filters));
        }
        if !self.sort.is_empty() {
            select = select.order_by(self.sort.iter().map(|s| {
                let field = source.field(&s.field);
                match s.order {
                    SortOrder::Asc => OrderField::new(field).asc(),
                    SortOrder::Desc => OrderField::new(field).desc(),
                }
            }));
        }
        if let Some(page) = self.page {
            select = select.page_by(page.page, page.size);
        }

        debug!(table = %self.table, filters = filter_count, sort = self.sort.len(), "query model compiled");
        Ok(select)
    }

    /// `rows` и `cols` как множества: без повторов, в порядке появления
    fn dimensions(&self) -> Vec<&Dimension> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .chain(&self.cols)
            .filter(|d| seen.insert(d.field.as_str()))
            .collect()
    }

    /// Компиляция + рендер
    pub fn render(&self, style: &RenderStyle) -> Result<(String, Vec<Param>)> {
        Ok(self.build_select_statement()?.render(style)?)
    }
}
