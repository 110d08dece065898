//! Global-scope collection.

use rustc_hash::FxHashSet;
use tarn_ir::anf::{AnfExprKind, AnfProgram, GlobalFlag};
use tarn_ir::Ident;

/// Identifiers bound by global `let`s on the program's toplevel spine.
///
/// A lambda never needs to capture these: they live in the unit's static
/// symbol table. Populated once by [`GlobalScope::collect`], then read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalScope {
    idents: FxHashSet<Ident>,
}

impl GlobalScope {
    /// Walk the spine (`let` bodies and `seq` continuations) of `program`.
    ///
    /// Bindings inside computations (lambda bodies, branches, loops) are
    /// never global, even when flagged so.
    pub fn collect(program: &AnfProgram) -> Self {
        let mut idents = FxHashSet::default();
        let mut spine = &program.body;
        loop {
            match &spine.kind {
                AnfExprKind::Let {
                    global,
                    bindings,
                    body,
                    ..
                } => {
                    if *global == GlobalFlag::Global {
                        idents.extend(bindings.iter().map(|binding| binding.ident));
                    }
                    spine = body;
                }
                AnfExprKind::Seq { rest, .. } => spine = rest,
                AnfExprKind::Comp(_) => break,
            }
        }
        tracing::debug!(globals = idents.len(), "collected global scope");
        GlobalScope { idents }
    }

    pub fn contains(&self, ident: Ident) -> bool {
        self.idents.contains(&ident)
    }

    pub fn len(&self) -> usize {
        self.idents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idents.is_empty()
    }
}

impl FromIterator<Ident> for GlobalScope {
    fn from_iter<I: IntoIterator<Item = Ident>>(iter: I) -> Self {
        GlobalScope {
            idents: iter.into_iter().collect(),
        }
    }
}
