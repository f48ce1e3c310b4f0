use super::Expression;

impl Expression {
    /// Псевдоним в проекции: .r#as("max_id")
    pub fn r#as<S: Into<String>>(self, alias: S) -> Self {
        let expr = match self {
            // повторный алиас заменяет предыдущий
            Expression::Aliased { expr, .. } => expr,
            other => Box::new(other),
        };
        Expression::Aliased {
            expr,
            alias: alias.into(),
        }
    }

    /// Синоним
    pub fn alias<S: Into<String>>(self, alias: S) -> Self {
        self.r#as(alias)
    }
}
