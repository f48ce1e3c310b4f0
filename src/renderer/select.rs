use super::condition::{render_condition, render_expr, render_field};
use super::keyword as kw;
use super::scope::Frame;
use super::table::render_table;
use super::writer::SqlWriter;
use super::{RenderStyle, Result};
use crate::expression::Expression;
use crate::param::Param;
use crate::query_builder::Select;
use crate::table::{NullsOrder, OrderField, SortDirection};

/// Состояние одного прохода рендера: буфер + стек областей видимости.
pub(crate) struct Ctx<'a, 's> {
    pub w: SqlWriter<'s>,
    pub scopes: Vec<Frame<'a>>,
}

impl<'a, 's> Ctx<'a, 's> {
    pub fn new(style: &'s RenderStyle) -> Self {
        Self {
            w: SqlWriter::new(256, style),
            scopes: Vec::new(),
        }
    }

    pub fn finish(self) -> (String, Vec<Param>) {
        self.w.finish()
    }
}

/// SELECT целиком, включая UNION/EXCEPT/INTERSECT-хвост
pub(crate) fn render_select<'a>(cx: &mut Ctx<'a, '_>, sel: &'a Select) -> Result<()> {
    if sel.combine.is_empty() {
        return render_single(cx, sel);
    }
    cx.w.push_char('(');
    render_single(cx, sel)?;
    cx.w.push_char(')');
    for (op, rhs) in &sel.combine {
        cx.w.push_char(' ');
        cx.w.push_kw(op.keyword());
        cx.w.push(" (");
        render_select(cx, rhs)?;
        cx.w.push_char(')');
    }
    Ok(())
}

fn render_single<'a>(cx: &mut Ctx<'a, '_>, sel: &'a Select) -> Result<()> {
    let frame = Frame::for_select(sel)?;
    cx.scopes.push(frame);
    let res = render_clauses(cx, sel);
    cx.scopes.pop();
    res
}

fn render_clauses<'a>(cx: &mut Ctx<'a, '_>, sel: &'a Select) -> Result<()> {
    cx.w.push_kw(kw::SELECT);
    if sel.distinct {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::DISTINCT);
    }
    cx.w.push_char(' ');

    // SELECT без колонок печатается как SELECT *
    if sel.projection.is_empty() {
        cx.w.push_char('*');
    } else {
        for (i, item) in sel.projection.iter().enumerate() {
            cx.w.push_sep(i, ", ");
            render_projection_item(cx, item)?;
        }
    }

    if let Some(src) = &sel.source {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::FROM);
        cx.w.push_char(' ');
        render_table(cx, src, false)?;
    }

    if let Some(pred) = &sel.predicate {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::WHERE);
        cx.w.push_char(' ');
        render_condition(cx, pred, None)?;
    }

    if !sel.group_by.is_empty() {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::GROUP_BY);
        cx.w.push_char(' ');
        for (i, g) in sel.group_by.iter().enumerate() {
            cx.w.push_sep(i, ", ");
            render_field(cx, &g.field)?;
        }
    }

    if let Some(having) = &sel.having {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::HAVING);
        cx.w.push_char(' ');
        render_condition(cx, having, None)?;
    }

    if !sel.order_by.is_empty() {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::ORDER_BY);
        cx.w.push_char(' ');
        for (i, o) in sel.order_by.iter().enumerate() {
            cx.w.push_sep(i, ", ");
            render_order_item(cx, o)?;
        }
    }

    if let Some(limit) = &sel.limit {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::LIMIT);
        cx.w.push_char(' ');
        render_expr(cx, limit)?;
    }
    if let Some(offset) = &sel.offset {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::OFFSET);
        cx.w.push_char(' ');
        render_expr(cx, offset)?;
    }
    Ok(())
}

/// Алиасы колонок печатаются только в проекции
fn render_projection_item<'a>(cx: &mut Ctx<'a, '_>, item: &'a Expression) -> Result<()> {
    let alias = match item {
        Expression::Aliased { alias, .. } => Some(alias.as_str()),
        Expression::Column(f) => f.alias(),
        _ => None,
    };
    render_expr(cx, item)?;
    if let Some(alias) = alias {
        cx.w.push_char(' ');
        cx.w.push_kw(kw::AS);
        cx.w.push_char(' ');
        cx.w.push_ident(alias);
    }
    Ok(())
}

fn render_order_item<'a>(cx: &mut Ctx<'a, '_>, o: &'a OrderField) -> Result<()> {
    render_field(cx, &o.field)?;
    cx.w.push_char(' ');
    match o.direction {
        SortDirection::Asc => cx.w.push_kw(kw::ASC),
        SortDirection::Desc => cx.w.push_kw(kw::DESC),
    }
    match o.nulls {
        NullsOrder::Unspecified => {}
        NullsOrder::First => {
            cx.w.push_char(' ');
            cx.w.push_kw(kw::NULLS_FIRST);
        }
        NullsOrder::Last => {
            cx.w.push_char(' ');
            cx.w.push_kw(kw::NULLS_LAST);
        }
    }
    Ok(())
}
