use std::cell::RefCell;

use crate::param::Param;
use crate::renderer::{self, RenderStyle};
use crate::{Queryable, Table, col, select};

#[test]
fn readme_example_renders() {
    let users = Table::with_schema("public", "users");
    let q = select([col("name")])
        .from(&users)
        .r#where(users.field("age").ge(18));

    let (sql, params) = q.render(&RenderStyle::default()).unwrap();
    assert_eq!(sql, "SELECT name FROM users WHERE age >= ?");
    assert_eq!(params, vec![Param::I32(18)]);
}

/// Исполнитель, который просто запоминает, что ему прислали
#[derive(Default)]
struct Recorder {
    seen: RefCell<Vec<(String, Vec<Param>)>>,
}

#[derive(Debug)]
enum RecorderError {
    Render(renderer::Error),
}

impl From<renderer::Error> for RecorderError {
    fn from(e: renderer::Error) -> Self {
        RecorderError::Render(e)
    }
}

impl Queryable for Recorder {
    type Output = usize;
    type Error = RecorderError;

    fn execute_query(&self, sql: &str, params: &[Param]) -> Result<usize, RecorderError> {
        self.seen.borrow_mut().push((sql.to_string(), params.to_vec()));
        Ok(params.len())
    }
}

#[test]
fn execute_forwards_rendered_sql() {
    let users = Table::new("users");
    let q = select([users.field("id")]).from(&users).r#where(users.field("id").eq(1));

    let rec = Recorder::default();
    let n = q.execute(&RenderStyle::default(), &rec).unwrap();
    assert_eq!(n, 1);

    let seen = rec.seen.borrow();
    assert_eq!(seen[0].0, "SELECT id FROM users WHERE id = ?");
    assert_eq!(seen[0].1, vec![Param::I32(1)]);
}

#[test]
fn execute_does_not_reach_executor_on_render_error() {
    let a = Table::new("a");
    let b = Table::new("b");
    // INNER без ON
    let q = select([a.field("id")]).from(&a.join(&b, crate::JoinType::Inner, None));

    let rec = Recorder::default();
    let err = q.execute(&RenderStyle::default(), &rec).unwrap_err();
    assert!(matches!(
        err,
        RecorderError::Render(renderer::Error::MissingJoinCondition { .. })
    ));
    assert!(rec.seen.borrow().is_empty());
}
