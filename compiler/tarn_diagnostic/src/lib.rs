//! Diagnostic system for rich error reporting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//! - Suggestions (how to fix)
//!
//! Passes build [`Diagnostic`]s, a [`queue::DiagnosticQueue`] orders and
//! limits them, and an [`emitter::DiagnosticEmitter`] renders them.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
