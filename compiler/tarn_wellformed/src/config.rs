use crate::{ReportMode, WellFormednessCheck};

/// Which checks run and how their findings are reported.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CheckConfig {
    /// Checks to stack, first innermost. Defaults to every check.
    pub checks: Vec<WellFormednessCheck>,
    pub report: ReportMode,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            checks: WellFormednessCheck::ALL.to_vec(),
            report: ReportMode::default(),
        }
    }
}

impl CheckConfig {
    /// Run only `checks`.
    pub fn only(checks: &[WellFormednessCheck]) -> Self {
        CheckConfig {
            checks: checks.to_vec(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_report(mut self, report: ReportMode) -> Self {
        self.report = report;
        self
    }

    #[must_use]
    pub fn without(mut self, check: WellFormednessCheck) -> Self {
        self.checks.retain(|enabled| *enabled != check);
        self
    }
}
