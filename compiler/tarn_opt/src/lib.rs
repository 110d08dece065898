//! Analyses and optimizations over the Tarn ANF IR.
//!
//! - **Free variables** ([`free_vars`]): identifiers used but not bound
//!   inside an expression.
//! - **Global scope** ([`GlobalScope`]): identifiers bound along the
//!   program's toplevel spine by global `let`s.
//! - **Escape analysis** ([`analyze_escapes`]): identifiers that occur
//!   anywhere other than the callee position of an application.
//! - **Closure allocation** ([`optimize_closures`]): classifies what each
//!   let-bound lambda captures so the backend can skip heap closures.
//!
//! The analyses are computed once up front and handed to the optimizer as
//! a read-only [`ClosureContext`]:
//!
//! ```text
//! let context = ClosureContext::analyze(&program);
//! let (program, stats) = optimize_closures(program, &context);
//! ```

mod closures;
pub mod escape;
pub mod free_vars;
pub mod globals;

#[cfg(test)]
mod test_helpers;

pub use closures::{optimize_closures, ClosureAllocation, ClosureContext, ClosureStats};
pub use escape::{analyze_escapes, EscapeSet};
pub use free_vars::{free_vars, FreeVars};
pub use globals::GlobalScope;
