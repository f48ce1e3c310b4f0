use std::borrow::Cow;

use crate::renderer;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Модель без таблицы-источника
    #[error("Query model has no source table")]
    MissingTable,

    #[error("Unknown operator: `{0}`")]
    UnknownOperator(String),

    /// Значение не подходит для оператора (объект, массив не той длины и т.п.)
    #[error("Invalid value for field `{field}`: {reason}")]
    InvalidValue {
        field: String,
        reason: Cow<'static, str>,
    },

    #[error("Compound `{operator}` condition has no children")]
    EmptyCondition { operator: &'static str },

    #[error(transparent)]
    Render(#[from] renderer::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
