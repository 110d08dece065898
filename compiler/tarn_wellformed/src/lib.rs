//! Well-formedness checking for the Tarn surface tree.
//!
//! Runs after parsing and before any name resolution. Each rule is a
//! [`VisitorLayer`](tarn_ir::visitor::VisitorLayer); [`check_program`]
//! stacks the configured rules and walks the program once.
//!
//! ```text
//! let config = CheckConfig::default();
//! match check_program(&program, &interner, &config) {
//!     Ok(()) => { /* continue to lowering */ }
//!     Err(err) => { /* err.problems, rendered through into_diagnostics */ }
//! }
//! ```

pub mod attributes;
pub mod checks;
mod config;
mod context;
mod problem;
pub mod report;

#[cfg(test)]
mod test_helpers;

use tarn_ir::ast::Program;
use tarn_ir::visitor::visit_program;
use tarn_ir::StringLookup;

pub use checks::{compose, CheckVisitor, WellFormednessCheck};
pub use config::CheckConfig;
pub use context::CheckContext;
pub use problem::{LoopKeyword, WellFormednessProblem};
pub use report::{into_diagnostics, ReportMode};

/// A program failed one or more well-formedness checks.
///
/// `problems` is never empty and is already selected and ordered by the
/// configured [`ReportMode`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("program is not well-formed: {} problem(s) found", .problems.len())]
pub struct WellFormednessError {
    pub problems: Vec<WellFormednessProblem>,
}

/// Run every check in `config` over `program` in a single traversal.
///
/// The program is never modified. Running the same configuration twice
/// over the same program yields the same result.
#[tracing::instrument(level = "debug", skip_all, fields(checks = config.checks.len()))]
pub fn check_program(
    program: &Program,
    names: &dyn StringLookup,
    config: &CheckConfig,
) -> Result<(), WellFormednessError> {
    let problems = collect_problems(program, names, &config.checks);
    if problems.is_empty() {
        tracing::debug!("program is well-formed");
        return Ok(());
    }
    let found = problems.len();
    let problems = report::select(problems, config.report);
    tracing::debug!(found, reported = problems.len(), "well-formedness problems");
    Err(WellFormednessError { problems })
}

/// Run `checks` and return every problem in discovery order.
pub fn collect_problems(
    program: &Program,
    names: &dyn StringLookup,
    checks: &[WellFormednessCheck],
) -> Vec<WellFormednessProblem> {
    let visitor = compose(checks);
    let mut cx = CheckContext::new(names);
    visit_program(&*visitor, &mut cx, program);
    cx.into_problems()
}
