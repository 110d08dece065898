//! Traversal context threaded through every check.

use tarn_ir::{Name, StringLookup};

use crate::WellFormednessProblem;

/// Accumulates problems for one `check_program` call.
///
/// Problems are kept in discovery order; ordering for reports happens
/// afterwards (see [`ReportMode`](crate::ReportMode)).
pub struct CheckContext<'a> {
    names: &'a dyn StringLookup,
    problems: Vec<WellFormednessProblem>,
}

impl<'a> CheckContext<'a> {
    pub fn new(names: &'a dyn StringLookup) -> Self {
        CheckContext {
            names,
            problems: Vec::new(),
        }
    }

    /// Resolve an interned name to its text.
    pub fn name(&self, name: Name) -> &str {
        self.names.lookup(name)
    }

    pub fn report(&mut self, problem: WellFormednessProblem) {
        tracing::trace!(?problem, "well-formedness problem");
        self.problems.push(problem);
    }

    pub fn problems(&self) -> &[WellFormednessProblem] {
        &self.problems
    }

    pub fn into_problems(self) -> Vec<WellFormednessProblem> {
        self.problems
    }
}
