use crate::query_builder::Select;
use crate::table::OrderField;

impl Select {
    /// ORDER BY <f1>, <f2>, ...
    ///
    /// Принимает `OrderField` или `Field` (тогда ASC). Заменяет прежний список.
    pub fn order_by<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<OrderField>,
    {
        self.order_by = fields.into_iter().map(Into::into).collect();
        self
    }
}
