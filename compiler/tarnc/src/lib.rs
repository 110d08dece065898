//! Tarn compiler driver.
//!
//! Glues the analysis core together for one compilation unit:
//!
//! - [`check_unit`]: well-formedness checking, with problems rendered and
//!   emitted as diagnostics
//! - [`optimize_unit`]: global-scope and escape analyses followed by
//!   closure allocation
//! - [`init_tracing`]: process-wide logging setup
//!
//! # Debugging
//!
//! - `RUST_LOG=tarn_wellformed=debug`: per-unit check summaries.
//! - `RUST_LOG=tarn_opt=trace`: every closure classification decision.
//! - `TARN_LOG_TREE=1`: indent output by span nesting.

mod config;
mod error;
mod logging;
mod pipeline;

pub use config::PipelineConfig;
pub use error::CompileError;
pub use logging::init_tracing;
pub use pipeline::{check_unit, optimize_unit, run_checks, stderr_emitter, SourceUnit};
