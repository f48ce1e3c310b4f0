use crate::query_builder::Select;
use crate::table::GroupField;

impl Select {
    /// Задаёт GROUP BY (заменяет прежний список).
    pub fn group_by<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<GroupField>,
    {
        self.group_by = fields.into_iter().map(Into::into).collect();
        self
    }
}
