use serde::Deserialize;

use super::keyword::KeywordCase;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// ? (MySQL/SQLite/MSSQL через драйвер)
    #[default]
    Question,
    /// $1, $2, $3... (Postgres)
    Numbered,
}

/// Настройки печати SQL. Передаются в каждый вызов рендера, глобального состояния нет.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Регистр ключевых слов
    pub case_style: KeywordCase,

    /// Квотить ли таблицы/колонки/алиасы
    pub delimiter_required: bool,
    /// Открывающий (и по умолчанию закрывающий) ограничитель
    pub delimiter: String,
    /// Закрывающий ограничитель для несимметричных пар: [name]
    pub closing_delimiter: Option<String>,

    pub placeholders: PlaceholderStyle,

    /// Печатать schema.table во FROM
    pub qualify_schema: bool,

    /// Добавлять ли "AS" перед алиасом таблицы
    pub emit_as_for_table_alias: bool,
}

impl RenderStyle {
    /// Закрывающий ограничитель с учётом несимметричных пар
    #[inline]
    pub fn closing(&self) -> &str {
        self.closing_delimiter.as_deref().unwrap_or(&self.delimiter)
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            case_style: KeywordCase::Upper,
            delimiter_required: false,
            delimiter: "\"".to_string(),
            closing_delimiter: None,
            placeholders: PlaceholderStyle::Question,
            qualify_schema: false,
            emit_as_for_table_alias: true,
        }
    }
}
