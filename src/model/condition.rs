use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Error, Result};
use crate::expression::{Comparator, Comparison, Condition, Expression, Operator};
use crate::param::Param;
use crate::table::Table;

/// Условие декларативной модели.
///
/// В JSON различается по форме: объект с `field` это простое условие,
/// остальное составное (`conditions` можно опустить).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConditionNode {
    // порядок важен: составное с пустым списком подошло бы любому объекту
    Simple {
        field: String,
        operator: String,
        /// `None`: ключа нет, `Some(Null)`: явный `null`
        #[serde(default, deserialize_with = "present")]
        value: Option<Value>,
    },
    Compound {
        operator: String,
        #[serde(default)]
        conditions: Vec<ConditionNode>,
    },
}

fn present<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

impl ConditionNode {
    pub fn simple<F, O, V>(field: F, operator: O, value: V) -> Self
    where
        F: Into<String>,
        O: Into<String>,
        V: Into<Option<Value>>,
    {
        ConditionNode::Simple {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Пустое составное условие; дети добавляются через `with_condition`
    pub fn compound<O: Into<String>>(operator: O) -> Self {
        ConditionNode::Compound {
            operator: operator.into(),
            conditions: Vec::new(),
        }
    }

    /// Добавляет ребёнка. Простое условие превращается в `and` из себя и `item`.
    pub fn with_condition(self, item: ConditionNode) -> Self {
        match self {
            ConditionNode::Compound {
                operator,
                mut conditions,
            } => {
                conditions.push(item);
                ConditionNode::Compound {
                    operator,
                    conditions,
                }
            }
            simple => ConditionNode::Compound {
                operator: "and".to_string(),
                conditions: vec![simple, item],
            },
        }
    }

    /// Компиляция в дерево условий; поля привязываются к `source`
    pub fn compile(&self, source: &Table) -> Result<Condition> {
        match self {
            ConditionNode::Compound {
                operator,
                conditions,
            } => {
                let op = parse_logical(operator)?;
                let mut children = conditions.iter().map(|c| c.compile(source));
                let Some(first) = children.next() else {
                    return Err(Error::EmptyCondition {
                        operator: op.keyword().as_str(),
                    });
                };
                children.try_fold(first?, |acc, next| {
                    let next = next?;
                    Ok(match op {
                        Operator::And => acc.and(next),
                        Operator::Or => acc.or(next),
                    })
                })
            }
            ConditionNode::Simple {
                field,
                operator,
                value,
            } => compile_simple(source, field, operator, value.as_ref()),
        }
    }
}

fn compile_simple(
    source: &Table,
    name: &str,
    operator: &str,
    value: Option<&Value>,
) -> Result<Condition> {
    let cmp = parse_comparator(operator)?;
    let field = source.field(name);
    if cmp.is_unary() {
        return Ok(Comparison::unary(field, cmp).into());
    }

    let Some(value) = value else {
        return Err(invalid(name, "missing value"));
    };
    // `= null` / `<> null` ведут себя как фильтр по измерению
    if value.is_null() {
        return match cmp {
            Comparator::Eq => Ok(Comparison::unary(field, Comparator::IsNull).into()),
            Comparator::Ne => Ok(Comparison::unary(field, Comparator::IsNotNull).into()),
            _ => Err(invalid(name, "null is only allowed with = and <>")),
        };
    }

    let right = match cmp {
        Comparator::In | Comparator::NotIn => match value {
            Value::Array(items) if items.is_empty() => {
                return Err(invalid(name, "expected a non-empty array"));
            }
            Value::Array(items) => list(name, items)?,
            // одиночное значение: IN (?)
            scalar => Expression::List(vec![scalar_param(name, scalar)?.into()]),
        },
        Comparator::Between | Comparator::NotBetween => match value {
            Value::Array(items) if items.len() == 2 => list(name, items)?,
            _ => return Err(invalid(name, "expected an array of two bounds")),
        },
        _ => scalar_param(name, value)?.into(),
    };
    Ok(Condition::compare(field, cmp, right))
}

fn invalid(field: &str, reason: &'static str) -> Error {
    Error::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

pub(super) fn scalar_param(field: &str, value: &Value) -> Result<Param> {
    Param::try_from(value.clone()).map_err(|rejected| {
        let reason = match rejected {
            Value::Array(_) => "arrays are not allowed here",
            Value::Object(_) => "objects are not allowed here",
            _ => "unsupported value",
        };
        invalid(field, reason)
    })
}

fn list(field: &str, items: &[Value]) -> Result<Expression> {
    items
        .iter()
        .map(|v| scalar_param(field, v).map(Expression::from))
        .collect::<Result<Vec<_>>>()
        .map(Expression::List)
}

/// "not_in", "Not In", "NOT-IN" → "not in"
fn normalize(op: &str) -> String {
    op.to_ascii_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn parse_logical(op: &str) -> Result<Operator> {
    match normalize(op).as_str() {
        "and" | "&&" => Ok(Operator::And),
        "or" | "||" => Ok(Operator::Or),
        _ => Err(Error::UnknownOperator(op.to_string())),
    }
}

pub(crate) fn parse_comparator(op: &str) -> Result<Comparator> {
    let cmp = match normalize(op).as_str() {
        "eq" | "=" | "==" => Comparator::Eq,
        "ne" | "neq" | "<>" | "!=" => Comparator::Ne,
        "lt" | "<" => Comparator::Lt,
        "gt" | ">" => Comparator::Gt,
        "le" | "lte" | "<=" => Comparator::Le,
        "ge" | "gte" | ">=" => Comparator::Ge,
        "in" => Comparator::In,
        "not in" | "nin" => Comparator::NotIn,
        "like" => Comparator::Like,
        "not like" => Comparator::NotLike,
        "ilike" => Comparator::ILike,
        "not ilike" => Comparator::NotILike,
        "between" => Comparator::Between,
        "not between" => Comparator::NotBetween,
        "is null" | "null" => Comparator::IsNull,
        "is not null" | "not null" => Comparator::IsNotNull,
        _ => return Err(Error::UnknownOperator(op.to_string())),
    };
    Ok(cmp)
}
