use crate::expression::Expression;
use crate::param::Param;
use crate::query_builder::Select;

fn count_param(n: u64) -> Expression {
    Expression::Literal(Param::I64(i64::try_from(n).unwrap_or(i64::MAX)))
}

impl Select {
    /// LIMIT <n>
    #[inline]
    pub fn limit<E: Into<Expression>>(mut self, n: E) -> Self {
        self.limit = Some(n.into());
        self
    }

    /// OFFSET <n>
    #[inline]
    pub fn offset<E: Into<Expression>>(mut self, n: E) -> Self {
        self.offset = Some(n.into());
        self
    }

    /// Страница с 1. page < 1 считается первой; page_size == 0: без пагинации.
    pub fn page_by(self, page: u64, page_size: u64) -> Self {
        if page_size == 0 {
            return self;
        }
        let page = page.max(1);
        let skip = (page - 1).saturating_mul(page_size);
        self.limit(count_param(page_size)).offset(count_param(skip))
    }
}
