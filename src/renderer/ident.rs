use super::config::RenderStyle;
use std::borrow::Cow;

fn escape_body<'a>(s: &'a str, close: &str) -> Cow<'a, str> {
    if !close.is_empty() && s.contains(close) {
        Cow::Owned(s.replace(close, &close.repeat(2)))
    } else {
        Cow::Borrowed(s)
    }
}

/// Квотит идентификатор, если стиль этого требует. `*` не квотится никогда.
pub fn quote_ident<'a>(name: &'a str, style: &RenderStyle) -> Cow<'a, str> {
    if !style.delimiter_required || name == "*" {
        return Cow::Borrowed(name);
    }
    let open = style.delimiter.as_str();
    let close = style.closing();
    let body = escape_body(name, close);
    Cow::Owned(format!("{open}{body}{close}"))
}

/// schema.table / table.column
pub fn quote_path<'a, I>(parts: I, style: &RenderStyle) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(|p| quote_ident(p, style))
        .collect::<Vec<_>>()
        .join(".")
}
