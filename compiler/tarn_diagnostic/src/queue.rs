//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! - Error limits to prevent overwhelming output
//! - Exact-duplicate suppression (same code at the same primary span)
//! - Stable flush in source order: ties keep insertion order

use tarn_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, ErrorCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic whose code and primary span match one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// Line number (1-based) for sorting.
    line: u32,
    /// Column number (1-based) for sorting within a line.
    column: u32,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::with_config(config);
/// let table = LineOffsetTable::build(source);
/// queue.add_with_source(diagnostic, &table, source);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    /// Count of errors (not warnings/notes).
    error_count: usize,
    /// Errors dropped because the limit was reached.
    overflow: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic at an already-resolved position.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic, line: u32, column: u32) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            self.overflow += 1;
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag) {
            return false;
        }

        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });

        if is_error {
            self.error_count += 1;
        }

        true
    }

    /// Add a diagnostic with its position computed from source.
    ///
    /// Diagnostics without a primary label sort to the top of the file.
    pub fn add_with_source(
        &mut self,
        diag: Diagnostic,
        table: &LineOffsetTable,
        source: &str,
    ) -> bool {
        let (line, column) = diag
            .primary_span()
            .map_or((1, 1), |span| table.offset_to_line_col(source, span.start));
        self.add(diag, line, column)
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Errors dropped after the limit was reached.
    pub fn overflow_count(&self) -> usize {
        self.overflow
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue. The sort is stable, so diagnostics at the same
    /// position keep the order they were added in.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| (w[0].line, w[0].column) <= (w[1].line, w[1].column));

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| (d.line, d.column));
        }

        let result = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        self.error_count = 0;
        self.overflow = 0;

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        let span = diag.primary_span();
        self.diagnostics.iter().any(|queued| {
            queued.diagnostic.code == diag.code && queued.diagnostic.primary_span() == span
        })
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, omitted: usize, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(format!(
            "aborting after {limit} errors; {omitted} more not shown"
        ))
        .with_label(span, "error limit reached here")
        .with_note("raise the error limit to see every error")
}
