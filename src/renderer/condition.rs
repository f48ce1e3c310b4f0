use super::keyword as kw;
use super::scope::{resolve_field, resolve_table};
use super::select::{Ctx, render_select};
use super::{Error, Result};
use crate::expression::{Comparator, Comparison, Condition, Expression, Operator};
use crate::param::Param;
use crate::table::Field;

/// Условие. `parent` это оператор охватывающего AND/OR. При другом операторе
/// составное условие берётся в скобки, при том же сливается в цепочку.
pub(crate) fn render_condition<'a>(
    cx: &mut Ctx<'a, '_>,
    c: &'a Condition,
    parent: Option<Operator>,
) -> Result<()> {
    match c {
        Condition::Comparison(cmp) => render_comparison(cx, cmp),
        Condition::Logical(l) => render_chain(cx, l.operator, [&*l.left, &*l.right], parent),
        Condition::Group {
            operator,
            conditions,
        } => match conditions.as_slice() {
            [] => Err(Error::EmptyCondition {
                operator: operator.keyword().as_str(),
            }),
            [single] => render_condition(cx, single, parent),
            many => render_chain(cx, *operator, many, parent),
        },
        Condition::Not(inner) => {
            cx.w.push_kw(kw::NOT);
            cx.w.push_char(' ');
            let wrap = is_compound(inner);
            if wrap {
                cx.w.push_char('(');
            }
            render_condition(cx, inner, None)?;
            if wrap {
                cx.w.push_char(')');
            }
            Ok(())
        }
    }
}

fn render_chain<'a, I>(
    cx: &mut Ctx<'a, '_>,
    op: Operator,
    items: I,
    parent: Option<Operator>,
) -> Result<()>
where
    I: IntoIterator<Item = &'a Condition>,
{
    let paren = parent.is_some_and(|p| p != op);
    if paren {
        cx.w.push_char('(');
    }
    for (i, c) in items.into_iter().enumerate() {
        if i > 0 {
            cx.w.push_char(' ');
            cx.w.push_kw(op.keyword());
            cx.w.push_char(' ');
        }
        render_condition(cx, c, Some(op))?;
    }
    if paren {
        cx.w.push_char(')');
    }
    Ok(())
}

fn is_compound(c: &Condition) -> bool {
    match c {
        Condition::Logical(_) => true,
        Condition::Group { conditions, .. } => match conditions.as_slice() {
            [single] => is_compound(single),
            _ => true,
        },
        Condition::Comparison(_) | Condition::Not(_) => false,
    }
}

fn invalid(cmp: Comparator, reason: &'static str) -> Error {
    Error::InvalidOperand {
        comparator: cmp.keyword().as_str(),
        reason: reason.into(),
    }
}

fn render_comparison<'a>(cx: &mut Ctx<'a, '_>, c: &'a Comparison) -> Result<()> {
    let cmp = c.comparator;
    let right = c.right.as_ref().map(Expression::unaliased);

    render_expr(cx, &c.left)?;
    cx.w.push_char(' ');
    cx.w.push_kw(cmp.keyword());

    match cmp {
        Comparator::IsNull | Comparator::IsNotNull => Ok(()),
        Comparator::In | Comparator::NotIn => {
            cx.w.push_char(' ');
            match right {
                Some(Expression::List(items)) if items.is_empty() => {
                    Err(invalid(cmp, "empty value list"))
                }
                Some(Expression::List(items)) => {
                    cx.w.push_char('(');
                    render_list(cx, items)?;
                    cx.w.push_char(')');
                    Ok(())
                }
                Some(Expression::Subquery(sub)) => {
                    cx.w.push_char('(');
                    render_select(cx, sub)?;
                    cx.w.push_char(')');
                    Ok(())
                }
                Some(single) => {
                    cx.w.push_char('(');
                    render_expr(cx, single)?;
                    cx.w.push_char(')');
                    Ok(())
                }
                None => Err(invalid(cmp, "missing right-hand operand")),
            }
        }
        Comparator::Between | Comparator::NotBetween => match right {
            Some(Expression::List(items)) if items.len() == 2 => {
                cx.w.push_char(' ');
                render_expr(cx, &items[0])?;
                cx.w.push_char(' ');
                cx.w.push_kw(kw::AND);
                cx.w.push_char(' ');
                render_expr(cx, &items[1])
            }
            _ => Err(invalid(cmp, "expected exactly two bounds")),
        },
        _ => match right {
            Some(r) => {
                cx.w.push_char(' ');
                render_expr(cx, r)
            }
            None => Err(invalid(cmp, "missing right-hand operand")),
        },
    }
}

fn render_list<'a>(cx: &mut Ctx<'a, '_>, items: &'a [Expression]) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        cx.w.push_sep(i, ", ");
        render_expr(cx, item)?;
    }
    Ok(())
}

/// Колонка с квалификатором таблицы, если он нужен
pub(crate) fn render_field(cx: &mut Ctx<'_, '_>, f: &Field) -> Result<()> {
    if let Some(qualifier) = resolve_field(&cx.scopes, f)? {
        cx.w.push_ident(qualifier);
        cx.w.push_char('.');
    }
    cx.w.push_ident(f.name());
    Ok(())
}

/// Выражение без алиаса: алиасы печатает проекция
pub(crate) fn render_expr<'a>(cx: &mut Ctx<'a, '_>, e: &'a Expression) -> Result<()> {
    match e {
        Expression::Literal(p) => cx.w.push_param(p.clone()),
        Expression::Placeholder(name) => cx.w.push_param(Param::Deferred(name.clone())),
        Expression::Column(f) => render_field(cx, f)?,
        Expression::Asterisk(None) => cx.w.push_char('*'),
        Expression::Asterisk(Some(tref)) => {
            if let Some(qualifier) = resolve_table(&cx.scopes, tref)? {
                cx.w.push_ident(qualifier);
                cx.w.push_char('.');
            }
            cx.w.push_char('*');
        }
        Expression::Aggregate {
            func,
            arg,
            distinct,
        } => {
            cx.w.push_kw(func.keyword());
            cx.w.push_char('(');
            if *distinct {
                cx.w.push_kw(kw::DISTINCT);
                cx.w.push_char(' ');
            }
            render_expr(cx, arg)?;
            cx.w.push_char(')');
        }
        Expression::List(items) => {
            cx.w.push_char('(');
            render_list(cx, items)?;
            cx.w.push_char(')');
        }
        Expression::Subquery(sub) => {
            cx.w.push_char('(');
            render_select(cx, sub)?;
            cx.w.push_char(')');
        }
        Expression::Aliased { expr, .. } => render_expr(cx, expr)?,
    }
    Ok(())
}
