//! Module-level statement checks.

use std::cell::Cell;

use tarn_ir::ast::{Program, Toplevel, ToplevelKind, UseItem, UseItems};
use tarn_ir::visitor::{Visitor, VisitorLayer};
use tarn_ir::Span;

use crate::{CheckContext, WellFormednessProblem};

/// At most one `provide *` per module.
#[derive(Default)]
pub struct SingleExportAllCheck {
    first: Cell<Option<Span>>,
}

impl<'n> VisitorLayer<CheckContext<'n>> for SingleExportAllCheck {
    fn visit_program(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        program: &Program,
    ) {
        self.first.set(None);
        base.visit_program(root, cx, program);
    }

    fn visit_toplevel(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        stmt: &Toplevel,
    ) {
        if let ToplevelKind::ProvideAll { .. } = stmt.kind {
            match self.first.get() {
                Some(first) => cx.report(WellFormednessProblem::ExportAllRepeated {
                    span: stmt.span,
                    first,
                }),
                None => self.first.set(Some(stmt.span)),
            }
        }
        base.visit_toplevel(root, cx, stmt);
    }
}

/// `include "m" as Alias` takes a single-segment alias.
pub struct IncludeAliasCheck;

impl<'n> VisitorLayer<CheckContext<'n>> for IncludeAliasCheck {
    fn visit_toplevel(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        stmt: &Toplevel,
    ) {
        if let ToplevelKind::Include {
            alias: Some(alias), ..
        } = &stmt.kind
        {
            if !alias.is_single() {
                cx.report(WellFormednessProblem::ModuleAliasTooDeep { span: alias.span });
            }
        }
        base.visit_toplevel(root, cx, stmt);
    }
}

/// `from M use { module Inner }` names a single segment.
pub struct UseModuleItemCheck;

impl<'n> VisitorLayer<CheckContext<'n>> for UseModuleItemCheck {
    fn visit_toplevel(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        stmt: &Toplevel,
    ) {
        if let ToplevelKind::Use {
            items: UseItems::Items(items),
            ..
        } = &stmt.kind
        {
            for item in items {
                if let UseItem::Module { path, .. } = item {
                    if !path.is_single() {
                        cx.report(WellFormednessProblem::ModuleImportNameNotSingleSegment {
                            span: path.span,
                        });
                    }
                }
            }
        }
        base.visit_toplevel(root, cx, stmt);
    }
}
