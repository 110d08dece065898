//! Indirect-call (escape) analysis.
//!
//! An identifier is *direct-call only* when every occurrence is the callee
//! of an application. Any other occurrence (an argument, a stored or
//! returned value, an assigned value, a scrutinee) lets the value flow
//! somewhere a caller cannot see, so it escapes.

use std::cell::Cell;
use std::ptr;

use rustc_hash::FxHashSet;
use tarn_ir::anf::visit::{
    visit_anf_program, AnfVisitor, AnfVisitorLayer, DefaultAnfVisitor, LayeredAnfVisitor,
};
use tarn_ir::anf::{AnfProgram, CompExpr, CompKind, ImmExpr};
use tarn_ir::Ident;

/// Identifiers that occur outside a callee position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EscapeSet {
    escaping: FxHashSet<Ident>,
}

impl EscapeSet {
    pub fn escapes(&self, ident: Ident) -> bool {
        self.escaping.contains(&ident)
    }

    pub fn mark(&mut self, ident: Ident) {
        self.escaping.insert(ident);
    }

    pub fn len(&self) -> usize {
        self.escaping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.escaping.is_empty()
    }
}

impl FromIterator<Ident> for EscapeSet {
    fn from_iter<I: IntoIterator<Item = Ident>>(iter: I) -> Self {
        EscapeSet {
            escaping: iter.into_iter().collect(),
        }
    }
}

/// Marks every immediate identifier except application callees.
///
/// Applications still go through `base`; the callee is recognised by
/// identity when it comes back through `visit_imm`.
#[derive(Debug, Default)]
pub struct EscapeLayer {
    callee: Cell<Option<*const ImmExpr>>,
}

impl EscapeLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnfVisitorLayer<EscapeSet> for EscapeLayer {
    fn visit_comp(
        &self,
        base: &dyn AnfVisitor<EscapeSet>,
        root: &dyn AnfVisitor<EscapeSet>,
        cx: &mut EscapeSet,
        comp: &CompExpr,
    ) {
        if let CompKind::App { func, .. } = &comp.kind {
            let outer = self.callee.replace(Some(ptr::from_ref(func)));
            base.visit_comp(root, cx, comp);
            self.callee.set(outer);
        } else {
            base.visit_comp(root, cx, comp);
        }
    }

    fn visit_imm(
        &self,
        base: &dyn AnfVisitor<EscapeSet>,
        root: &dyn AnfVisitor<EscapeSet>,
        cx: &mut EscapeSet,
        imm: &ImmExpr,
    ) {
        let is_callee = self.callee.get().is_some_and(|callee| ptr::eq(callee, imm));
        if !is_callee {
            if let Some(ident) = imm.as_ident() {
                cx.mark(ident);
            }
        }
        base.visit_imm(root, cx, imm);
    }
}

/// Compute the escape set of a whole program.
pub fn analyze_escapes(program: &AnfProgram) -> EscapeSet {
    let visitor: Box<dyn AnfVisitor<EscapeSet>> =
        LayeredAnfVisitor::boxed(EscapeLayer::new(), Box::new(DefaultAnfVisitor));
    let mut escapes = EscapeSet::default();
    visit_anf_program(&*visitor, &mut escapes, program);
    tracing::debug!(escaping = escapes.len(), "escape analysis");
    escapes
}
