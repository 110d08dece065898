//! Per-unit pipeline stages.

use std::io::IsTerminal;

use tarn_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use tarn_diagnostic::queue::{too_many_errors, DiagnosticQueue};
use tarn_diagnostic::span_utils::LineOffsetTable;
use tarn_diagnostic::Severity;
use tarn_ir::anf::AnfProgram;
use tarn_ir::ast::Program;
use tarn_ir::StringLookup;
use tarn_opt::{optimize_closures, ClosureContext, ClosureStats};
use tarn_wellformed::{check_program, into_diagnostics};

use crate::{CompileError, PipelineConfig};

/// A parsed compilation unit and the source it came from.
#[derive(Copy, Clone)]
pub struct SourceUnit<'a> {
    /// Path shown in diagnostics.
    pub path: &'a str,
    pub text: &'a str,
    pub program: &'a Program,
}

/// Run the configured checks without rendering anything.
pub fn run_checks(
    program: &Program,
    names: &dyn StringLookup,
    config: &PipelineConfig,
) -> Result<(), CompileError> {
    check_program(program, names, &config.checks)?;
    Ok(())
}

/// Check `unit`, emitting any problems through `emitter`.
///
/// Diagnostics are positioned against the unit's text, limited by
/// `config.diagnostics`, and followed by a summary line.
#[tracing::instrument(level = "debug", skip_all, fields(path = unit.path))]
pub fn check_unit(
    unit: SourceUnit<'_>,
    names: &dyn StringLookup,
    config: &PipelineConfig,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<(), CompileError> {
    let Err(err) = check_program(unit.program, names, &config.checks) else {
        return Ok(());
    };

    let table = LineOffsetTable::build(unit.text);
    let mut queue = DiagnosticQueue::with_config(config.diagnostics.clone());
    // Where the first error was dropped for exceeding the limit.
    let mut limit_span = None;
    for diag in into_diagnostics(&err.problems, names) {
        let span = diag.primary_span();
        if !queue.add_with_source(diag, &table, unit.text)
            && limit_span.is_none()
            && queue.limit_reached()
        {
            limit_span = span;
        }
    }

    let errors = queue.error_count();
    let omitted = queue.overflow_count();
    let mut diagnostics = queue.flush();
    if omitted > 0 {
        let span = limit_span.unwrap_or(unit.program.span);
        diagnostics.push(too_many_errors(errors, omitted, span));
    }

    let warnings = diagnostics
        .iter()
        .filter(|diag| diag.severity == Severity::Warning)
        .count();
    tracing::debug!(errors, omitted, "emitting well-formedness diagnostics");
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(errors + omitted, warnings);
    emitter.flush();

    Err(CompileError::Aborted {
        path: unit.path.to_owned(),
        errors: errors + omitted,
    })
}

/// Analyze `program` and run closure allocation over it.
#[tracing::instrument(level = "debug", skip_all)]
pub fn optimize_unit(program: AnfProgram) -> (AnfProgram, ClosureStats) {
    let context = ClosureContext::analyze(&program);
    optimize_closures(program, &context)
}

/// A stderr emitter for `unit`, honouring the configured color mode.
pub fn stderr_emitter(
    unit: SourceUnit<'_>,
    config: &PipelineConfig,
) -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(config.color, std::io::stderr().is_terminal())
        .with_source(unit.path, unit.text)
}
