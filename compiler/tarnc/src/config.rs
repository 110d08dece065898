use tarn_diagnostic::emitter::ColorMode;
use tarn_diagnostic::queue::DiagnosticConfig;
use tarn_wellformed::{CheckConfig, ReportMode, WellFormednessCheck};

/// Settings for one run of the pipeline.
#[derive(Clone, Debug, Default)]
pub struct PipelineConfig {
    /// Which well-formedness checks run and how their problems are selected.
    pub checks: CheckConfig,
    /// Error limit and deduplication for emitted diagnostics.
    pub diagnostics: DiagnosticConfig,
    pub color: ColorMode,
}

impl PipelineConfig {
    #[must_use]
    pub fn with_checks(mut self, checks: &[WellFormednessCheck]) -> Self {
        self.checks.checks = checks.to_vec();
        self
    }

    #[must_use]
    pub fn with_report(mut self, report: ReportMode) -> Self {
        self.checks.report = report;
        self
    }

    /// Stop emitting after `limit` errors; 0 means no limit.
    #[must_use]
    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.diagnostics.error_limit = limit;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}
