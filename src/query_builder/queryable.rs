use crate::param::Param;
use crate::query_builder::Select;
use crate::renderer::{self, RenderStyle};

/// Исполнитель запросов. Получает только готовый SQL и параметры.
pub trait Queryable {
    type Output;
    type Error: From<renderer::Error>;

    fn execute_query(&self, sql: &str, params: &[Param]) -> Result<Self::Output, Self::Error>;
}

impl Select {
    /// Рендерит запрос и передаёт его исполнителю
    pub fn execute<Q: Queryable>(&self, style: &RenderStyle, q: &Q) -> Result<Q::Output, Q::Error> {
        let (sql, params) = self.render(style)?;
        q.execute_query(&sql, &params)
    }
}
