//! Closure allocation.
//!
//! Classifies every let-bound lambda by what it needs from enclosing
//! scopes. A lambda needing nothing but globals and its own parameters is
//! marked [`CaptureClass::NoCapture`]; one needing a known set of locals is
//! marked [`CaptureClass::Explicit`]. Either way its binder's storage
//! becomes [`StorageClass::Scalar`]: the backend passes the function by
//! reference instead of allocating a traced closure object.
//!
//! Only bindings the analysis can vouch for are touched:
//!
//! - the `let` group is immutable,
//! - the bound value is a lambda whose captures are still unanalyzed,
//! - the binder never escapes (every use is a direct call).
//!
//! Everything else is passed through unchanged, which also makes the pass
//! idempotent.

use std::cell::Cell;

use tarn_ir::anf::map::{map_program, DefaultMapper, LayeredMapper, Mapper, MapperLayer};
use tarn_ir::anf::{
    AnfBinding, AnfExpr, AnfExprKind, AnfProgram, CaptureClass, Captures, CompKind, LambdaComp,
    StorageClass,
};
use tarn_ir::{Ident, MutFlag};

use crate::free_vars::lambda_free_vars;
use crate::{EscapeSet, GlobalScope};

/// Read-only analysis results consumed by [`optimize_closures`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosureContext {
    pub globals: GlobalScope,
    pub escapes: EscapeSet,
}

impl ClosureContext {
    pub fn new(globals: GlobalScope, escapes: EscapeSet) -> Self {
        ClosureContext { globals, escapes }
    }

    /// Run the global-scope and escape analyses over `program`.
    pub fn analyze(program: &AnfProgram) -> Self {
        Self::new(
            GlobalScope::collect(program),
            crate::analyze_escapes(program),
        )
    }
}

/// What one run of [`optimize_closures`] changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClosureStats {
    /// Lambdas classified as needing no captures.
    pub no_capture: usize,
    /// Lambdas classified with an explicit capture list.
    pub explicit_capture: usize,
    /// Unanalyzed lambdas left alone because their binder escapes.
    pub skipped_escaping: usize,
}

/// The rewriting layer. Post-order: inner `let`s are classified before the
/// `let`s that enclose them.
pub struct ClosureAllocation<'c> {
    context: &'c ClosureContext,
    no_capture: Cell<usize>,
    explicit_capture: Cell<usize>,
    skipped_escaping: Cell<usize>,
}

impl<'c> ClosureAllocation<'c> {
    pub fn new(context: &'c ClosureContext) -> Self {
        ClosureAllocation {
            context,
            no_capture: Cell::new(0),
            explicit_capture: Cell::new(0),
            skipped_escaping: Cell::new(0),
        }
    }

    pub fn stats(&self) -> ClosureStats {
        ClosureStats {
            no_capture: self.no_capture.get(),
            explicit_capture: self.explicit_capture.get(),
            skipped_escaping: self.skipped_escaping.get(),
        }
    }

    /// Free variables of `lambda` that are neither `binder` nor global,
    /// ordered by stamp.
    fn residual(&self, binder: Ident, lambda: &LambdaComp) -> Captures {
        let mut residual: Captures = lambda_free_vars(lambda)
            .into_iter()
            .filter(|ident| *ident != binder && !self.context.globals.contains(*ident))
            .collect();
        residual.sort_unstable();
        residual
    }

    fn classify(&self, mut binding: AnfBinding) -> AnfBinding {
        let binder = binding.ident;
        let CompKind::Lambda(lambda) = &mut binding.value.kind else {
            return binding;
        };
        if !lambda.captures.is_unanalyzed() {
            return binding;
        }
        if self.context.escapes.escapes(binder) {
            bump(&self.skipped_escaping);
            tracing::trace!(?binder, "lambda escapes; keeping heap closure");
            return binding;
        }

        let residual = self.residual(binder, lambda);
        if residual.is_empty() {
            bump(&self.no_capture);
            lambda.captures = CaptureClass::NoCapture;
        } else {
            bump(&self.explicit_capture);
            tracing::trace!(?binder, captures = residual.len(), "explicit captures");
            lambda.captures = CaptureClass::Explicit(residual);
        }
        binding.storage = StorageClass::Scalar;
        binding
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl MapperLayer for ClosureAllocation<'_> {
    fn map_expr(&self, base: &dyn Mapper, root: &dyn Mapper, expr: AnfExpr) -> AnfExpr {
        let AnfExpr { kind, span } = base.map_expr(root, expr);
        let kind = match kind {
            AnfExprKind::Let {
                rec_flag,
                mut_flag: MutFlag::Immutable,
                global,
                bindings,
                body,
            } => AnfExprKind::Let {
                rec_flag,
                mut_flag: MutFlag::Immutable,
                global,
                bindings: bindings
                    .into_iter()
                    .map(|binding| self.classify(binding))
                    .collect(),
                body,
            },
            other => other,
        };
        AnfExpr::new(kind, span)
    }
}

/// Classify the captures of every eligible let-bound lambda in `program`.
///
/// Never fails and emits no diagnostics. Running it again on its own
/// output changes nothing.
#[tracing::instrument(level = "debug", skip_all)]
pub fn optimize_closures(
    program: AnfProgram,
    context: &ClosureContext,
) -> (AnfProgram, ClosureStats) {
    let mapper = LayeredMapper::new(ClosureAllocation::new(context), Box::new(DefaultMapper));
    let program = map_program(&mapper, program);
    let stats = mapper.layer().stats();
    tracing::debug!(
        no_capture = stats.no_capture,
        explicit_capture = stats.explicit_capture,
        skipped_escaping = stats.skipped_escaping,
        "closure allocation"
    );
    (program, stats)
}
