//! Построитель SELECT-запросов: выражения, условия, таблицы и соединения
//! собираются в неизменяемое дерево, которое рендерится в SQL + список параметров.
//!
//! ```
//! use selectkit::{col, select, Table, renderer::RenderStyle};
//!
//! let users = Table::with_schema("public", "users");
//! let q = select([col("name")])
//!     .from(&users)
//!     .r#where(users.field("age").ge(18));
//!
//! let (sql, params) = q.render(&RenderStyle::default()).unwrap();
//! assert_eq!(sql, "SELECT name FROM users WHERE age >= ?");
//! assert_eq!(params.len(), 1);
//! ```
mod __tests__;
pub mod expression;
pub mod model;
pub mod param;
pub mod query_builder;
pub mod renderer;
pub mod table;

pub use expression::helpers::*;
pub use expression::{Comparator, Condition, Expression, Operator};
pub use model::{ConditionNode, QueryModel};
pub use param::Param;
pub use query_builder::{CombineOperator, Queryable, Select, except, intersect, select, union, union_all};
pub use renderer::{KeywordCase, PlaceholderStyle, RenderStyle, render};
pub use table::{Field, JoinHint, JoinType, Table, table};
