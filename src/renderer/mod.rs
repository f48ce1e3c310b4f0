mod __tests__;
mod condition;
mod config;
mod error;
mod ident;
mod keyword;
mod scope;
mod select;
mod table;
mod writer;

pub use config::{PlaceholderStyle, RenderStyle};
pub use error::{Error, Result};
pub use ident::{quote_ident, quote_path};
pub use keyword::{Keyword, KeywordCase};

use tracing::{debug, trace};

use crate::param::Param;
use crate::query_builder::Select;
use select::{Ctx, render_select};

/// Рендер SELECT в строку SQL и список параметров (в порядке плейсхолдеров).
///
/// Запрос не меняется: повторный вызов с тем же стилем даёт тот же результат.
pub fn render(select: &Select, style: &RenderStyle) -> Result<(String, Vec<Param>)> {
    trace!(case = %style.case_style, placeholders = ?style.placeholders, "rendering select");

    let mut cx = Ctx::new(style);
    render_select(&mut cx, select)?;
    let (sql, params) = cx.finish();

    debug!(sql_len = sql.len(), params = params.len(), "select rendered");
    Ok((sql, params))
}

/// Удобные пресеты под диалекты
pub fn style_mysql() -> RenderStyle {
    RenderStyle {
        delimiter_required: true,
        delimiter: "`".to_string(),
        ..RenderStyle::default()
    }
}

pub fn style_postgres() -> RenderStyle {
    RenderStyle {
        delimiter_required: true,
        placeholders: PlaceholderStyle::Numbered,
        ..RenderStyle::default()
    }
}

pub fn style_sqlite() -> RenderStyle {
    RenderStyle {
        delimiter_required: true,
        ..RenderStyle::default()
    }
}

pub fn style_mssql() -> RenderStyle {
    RenderStyle {
        delimiter_required: true,
        delimiter: "[".to_string(),
        closing_delimiter: Some("]".to_string()),
        ..RenderStyle::default()
    }
}
