use super::{Aggregate, Expression};
use crate::param::Param;
use crate::table::{Field, TableRef};

/// Колонка: col("name") или col("users.id").
///
/// Точка отделяет имя (или алиас) таблицы; такая колонка проверяется при рендере
/// так же, как поле, полученное через `Table::field`.
pub fn col(name: &str) -> Expression {
    match name.split_once('.') {
        Some((table, column)) => {
            Expression::Column(Field::bound(TableRef::named(table), column))
        }
        None => Expression::Column(Field::new(name)),
    }
}

/// Параметр с bind'ом, значение уходит в params
pub fn val<T: Into<Param>>(v: T) -> Expression {
    Expression::Literal(v.into())
}

/// Явный плейсхолдер, значение подставит исполнитель
pub fn placeholder(name: Option<&str>) -> Expression {
    Expression::Placeholder(name.map(str::to_string))
}

/// SELECT *
pub fn asterisk() -> Expression {
    Expression::Asterisk(None)
}

/// COUNT(*)
pub fn count_all() -> Expression {
    Aggregate::Count.of(asterisk())
}
