//! Choosing which accumulated problems to report, and in what order.

use tarn_diagnostic::Diagnostic;
use tarn_ir::StringLookup;

use crate::WellFormednessProblem;

/// Which problems a failed check reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ReportMode {
    /// Every problem, in source order.
    #[default]
    All,
    /// Only the first problem in source order.
    First,
    /// Only the last problem discovered by the traversal.
    MostRecent,
}

/// Select and order `problems` (given in discovery order) for `mode`.
///
/// Source order sorts by span start, then span end; problems at the same
/// span keep their discovery order.
pub fn select(
    mut problems: Vec<WellFormednessProblem>,
    mode: ReportMode,
) -> Vec<WellFormednessProblem> {
    match mode {
        ReportMode::All => {
            problems.sort_by_key(|problem| {
                let span = problem.span();
                (span.start, span.end)
            });
            problems
        }
        ReportMode::First => {
            let first = problems
                .into_iter()
                .enumerate()
                .min_by_key(|(index, problem)| {
                    let span = problem.span();
                    (span.start, span.end, *index)
                })
                .map(|(_, problem)| problem);
            first.into_iter().collect()
        }
        ReportMode::MostRecent => problems.pop().into_iter().collect(),
    }
}

/// Render problems to diagnostics, preserving their order.
pub fn into_diagnostics(
    problems: &[WellFormednessProblem],
    names: &dyn StringLookup,
) -> Vec<Diagnostic> {
    problems
        .iter()
        .map(|problem| problem.into_diagnostic(names))
        .collect()
}

#[cfg(test)]
mod tests;
