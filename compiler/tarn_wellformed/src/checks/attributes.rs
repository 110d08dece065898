//! Attribute checks against the known-attribute table.
//!
//! An unknown attribute is reported once by the name check; the arity and
//! placement checks skip it.

use tarn_ir::ast::{Attribute, AttributeTarget};
use tarn_ir::visitor::{Visitor, VisitorLayer};

use crate::attributes::lookup;
use crate::{CheckContext, WellFormednessProblem};

/// Attribute names are known and get the right number of arguments.
pub struct AttributeArityCheck;

impl<'n> VisitorLayer<CheckContext<'n>> for AttributeArityCheck {
    fn visit_attribute(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        attr: &Attribute,
        target: AttributeTarget,
    ) {
        match lookup(cx.name(attr.name)) {
            None => cx.report(WellFormednessProblem::UnknownAttribute {
                span: attr.span,
                name: attr.name,
            }),
            Some(info) if info.arity != attr.args.len() => {
                cx.report(WellFormednessProblem::AttributeArity {
                    span: attr.span,
                    name: attr.name,
                    expected: info.arity,
                    found: attr.args.len(),
                });
            }
            Some(_) => {}
        }
        base.visit_attribute(root, cx, attr, target);
    }
}

/// Known attributes appear only where the table allows them.
pub struct AttributePlacementCheck;

impl<'n> VisitorLayer<CheckContext<'n>> for AttributePlacementCheck {
    fn visit_attribute(
        &self,
        base: &dyn Visitor<CheckContext<'n>>,
        root: &dyn Visitor<CheckContext<'n>>,
        cx: &mut CheckContext<'n>,
        attr: &Attribute,
        target: AttributeTarget,
    ) {
        if let Some(info) = lookup(cx.name(attr.name)) {
            if !info.allowed_on(target) {
                cx.report(WellFormednessProblem::AttributeDisallowed {
                    span: attr.span,
                    name: attr.name,
                });
            }
        }
        base.visit_attribute(root, cx, attr, target);
    }
}
