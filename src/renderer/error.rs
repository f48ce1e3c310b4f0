use std::borrow::Cow;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown render style: {0}")]
    UnknownRenderStyle(Cow<'static, str>),

    /// Пустой AND/OR не имеет SQL-формы
    #[error("Compound `{operator}` condition has no children")]
    EmptyCondition { operator: &'static str },

    #[error("Table `{table}` is joined with itself without a distinguishing alias")]
    AmbiguousSelfJoin { table: String },

    #[error("`{join_type}` with `{table}` requires a join condition")]
    MissingJoinCondition {
        join_type: &'static str,
        table: String,
    },

    #[error("Field `{table}.{column}` refers to a table that is not part of the FROM clause")]
    UnresolvedFieldReference { table: String, column: String },

    #[error("Table `{table}` has no column `{column}`")]
    UnknownColumn { table: String, column: String },

    #[error("Invalid operand for `{comparator}`: {reason}")]
    InvalidOperand {
        comparator: &'static str,
        reason: Cow<'static, str>,
    },

    #[error("`{operation}` is not supported on {target}")]
    UnsupportedOperation {
        operation: &'static str,
        target: &'static str,
    },
}
