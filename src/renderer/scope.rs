use smallvec::SmallVec;

use super::{Error, Result};
use crate::query_builder::Select;
use crate::table::{Field, Table, TableKind, TableRef};

/// Таблица, видимая в FROM текущего запроса.
pub(crate) struct Leaf<'a> {
    pub exposed: &'a str,
    pub columns: Option<&'a [String]>,
}

/// Область видимости одного SELECT.
pub(crate) struct Frame<'a> {
    leaves: SmallVec<[Leaf<'a>; 4]>,
    pub has_order_by: bool,
    pub has_group_by: bool,
}

impl<'a> Frame<'a> {
    pub fn for_select(sel: &'a Select) -> Result<Self> {
        let mut frame = Frame {
            leaves: SmallVec::new(),
            has_order_by: !sel.order_by.is_empty(),
            has_group_by: !sel.group_by.is_empty(),
        };
        if let Some(src) = &sel.source {
            frame.collect(src)?;
        }
        Ok(frame)
    }

    fn collect(&mut self, t: &'a Table) -> Result<()> {
        match t.kind() {
            TableKind::Base(b) => {
                let exposed = b.alias.as_deref().unwrap_or(&b.name);
                self.add(exposed, b.columns.as_deref())
            }
            TableKind::Derived(d) => match d.alias.as_deref() {
                Some(alias) => self.add(alias, None),
                None => Ok(()),
            },
            TableKind::Join(j) => {
                self.collect(&j.left)?;
                self.collect(&j.right)
            }
        }
    }

    fn add(&mut self, exposed: &'a str, columns: Option<&'a [String]>) -> Result<()> {
        // одно и то же видимое имя дважды: SQL не сможет различить таблицы
        if self.find(exposed).is_some() {
            return Err(Error::AmbiguousSelfJoin {
                table: exposed.to_string(),
            });
        }
        self.leaves.push(Leaf { exposed, columns });
        Ok(())
    }

    /// Колонки квалифицируются, когда во FROM больше одной таблицы
    #[inline]
    pub fn qualify(&self) -> bool {
        self.leaves.len() > 1
    }

    pub fn find(&self, exposed: &str) -> Option<&Leaf<'a>> {
        self.leaves.iter().find(|l| l.exposed == exposed)
    }
}

/// Квалификатор для ссылки на таблицу; `None` значит печатать без префикса.
/// Таблица из внешнего запроса (коррелированный подзапрос) квалифицируется всегда.
fn lookup<'f>(
    frames: &[Frame<'_>],
    tref: &'f TableRef,
    column: Option<&str>,
) -> Result<Option<&'f str>> {
    let exposed = tref.exposed();
    for (depth, frame) in frames.iter().rev().enumerate() {
        let Some(leaf) = frame.find(exposed) else {
            continue;
        };
        if let (Some(cols), Some(column)) = (leaf.columns, column) {
            if !cols.iter().any(|c| c == column) {
                return Err(Error::UnknownColumn {
                    table: exposed.to_string(),
                    column: column.to_string(),
                });
            }
        }
        return Ok((depth > 0 || frame.qualify()).then_some(exposed));
    }
    Err(Error::UnresolvedFieldReference {
        table: exposed.to_string(),
        column: column.unwrap_or("*").to_string(),
    })
}

pub(crate) fn resolve_field<'f>(frames: &[Frame<'_>], field: &'f Field) -> Result<Option<&'f str>> {
    match field.table() {
        Some(tref) => lookup(frames, tref, Some(field.name())),
        None => Ok(None),
    }
}

pub(crate) fn resolve_table<'f>(frames: &[Frame<'_>], tref: &'f TableRef) -> Result<Option<&'f str>> {
    lookup(frames, tref, None)
}
