//! Type expression checks.

use tarn_ir::ast::{TypeExpr, TypeKind};
use tarn_ir::visitor::{Visitor, VisitorLayer};

use crate::{CheckContext, WellFormednessProblem};

/// Type variables start with a lowercase letter or `_`.
pub struct TypeVarCheck;

fn is_type_var_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first == '_' || first.is_lowercase())
}

impl<'n> VisitorLayer<CheckContext<'n>> for TypeVarCheck {
    fn visit_type(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        ty: &TypeExpr,
    ) {
        if let TypeKind::Var(name) = ty.kind {
            if !is_type_var_name(cx.name(name)) {
                cx.report(WellFormednessProblem::TypeVarNotLowercase {
                    span: ty.span,
                    name,
                });
            }
        }
        base.visit_type(root, cx, ty);
    }
}
