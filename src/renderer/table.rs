use super::condition::render_condition;
use super::ident::quote_path;
use super::keyword as kw;
use super::select::{Ctx, render_select};
use super::{Error, Result};
use crate::table::{IndexHint, IndexHintKind, IndexHintScope, JoinTable, Table, TableKind};

fn target_name(t: &Table) -> &'static str {
    match t.kind() {
        TableKind::Base(_) => "a base table",
        TableKind::Join(_) => "a join",
        TableKind::Derived(_) => "a derived table",
    }
}

/// Источник во FROM. `in_join`: таблица стоит внутри соединения (для FOR JOIN-подсказок).
pub(crate) fn render_table<'a>(cx: &mut Ctx<'a, '_>, t: &'a Table, in_join: bool) -> Result<()> {
    if let Some(&op) = t.rejected().first() {
        return Err(Error::UnsupportedOperation {
            operation: op,
            target: target_name(t),
        });
    }

    match t.kind() {
        TableKind::Base(b) => {
            let style = cx.w.style;
            match (&b.schema, style.qualify_schema) {
                (Some(schema), true) => {
                    let path = quote_path([schema.as_str(), b.name.as_str()], style);
                    cx.w.push(path);
                }
                _ => cx.w.push_ident(&b.name),
            }
            if let Some(alias) = &b.alias {
                push_table_alias(cx, alias);
            }
            render_index_hints(cx, &b.hints, in_join)
        }
        TableKind::Join(j) => render_join(cx, j),
        TableKind::Derived(d) => {
            cx.w.push_char('(');
            render_select(cx, &d.select)?;
            cx.w.push_char(')');
            if let Some(alias) = &d.alias {
                push_table_alias(cx, alias);
            }
            Ok(())
        }
    }
}

fn push_table_alias(cx: &mut Ctx<'_, '_>, alias: &str) {
    cx.w.push_char(' ');
    if cx.w.style.emit_as_for_table_alias {
        cx.w.push_kw(kw::AS);
        cx.w.push_char(' ');
    }
    cx.w.push_ident(alias);
}

// left <prefix> [HINT] JOIN right ON cond
fn render_join<'a>(cx: &mut Ctx<'a, '_>, j: &'a JoinTable) -> Result<()> {
    if j.condition.is_none() && j.join_type.requires_condition() {
        return Err(Error::MissingJoinCondition {
            join_type: j.join_type.keyword().as_str(),
            table: j.right.exposed_name().unwrap_or("<join>").to_string(),
        });
    }

    render_table(cx, &j.left, true)?;
    cx.w.push_char(' ');
    cx.w.push_kw(j.join_type.prefix(j.condition.is_some()));
    if let Some(hint) = j.join_hint {
        cx.w.push_char(' ');
        cx.w.push_kw(hint.keyword());
    }
    cx.w.push_char(' ');
    cx.w.push_kw(kw::JOIN);
    cx.w.push_char(' ');

    // правое соединение группируется скобками, левое идёт цепочкой
    let nested = matches!(j.right.kind(), TableKind::Join(_));
    if nested {
        cx.w.push_char('(');
    }
    render_table(cx, &j.right, true)?;
    if nested {
        cx.w.push_char(')');
    }

    if let Some(cond) = &j.condition {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::ON);
        cx.w.push_char(' ');
        render_condition(cx, cond, None)?;
    }
    Ok(())
}

/// USE/IGNORE/FORCE INDEX. Подсказки с областью печатаются только если
/// соответствующая часть запроса есть. Пустой список имён допустим только у USE.
fn render_index_hints(cx: &mut Ctx<'_, '_>, hints: &[IndexHint], in_join: bool) -> Result<()> {
    let (has_order_by, has_group_by) = cx
        .scopes
        .last()
        .map(|f| (f.has_order_by, f.has_group_by))
        .unwrap_or_default();

    for hint in hints {
        let applies = match hint.scope {
            IndexHintScope::Any => true,
            IndexHintScope::Join => in_join,
            IndexHintScope::OrderBy => has_order_by,
            IndexHintScope::GroupBy => has_group_by,
        };
        if !applies {
            continue;
        }
        if hint.names.is_empty() && hint.kind != IndexHintKind::Use {
            return Err(Error::InvalidOperand {
                comparator: hint.kind.keyword().as_str(),
                reason: "index list must not be empty".into(),
            });
        }
        cx.w.push_char(' ');
        cx.w.push_kw(hint.kind.keyword());
        if let Some(scope) = hint.scope.keyword() {
            cx.w.push_char(' ');
            cx.w.push_kw(scope);
        }
        cx.w.push(" (");
        for (i, name) in hint.names.iter().enumerate() {
            cx.w.push_sep(i, ", ");
            cx.w.push_ident(name);
        }
        cx.w.push_char(')');
    }
    Ok(())
}
