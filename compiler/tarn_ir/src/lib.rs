//! Tarn IR - core data structures shared by the middle end.
//!
//! - Spans, interned [`Name`]s and stamped [`Ident`]s
//! - The surface syntax tree ([`ast`]) and its layered [`visitor`]
//! - The administrative normal form IR ([`anf`]) with a read-only
//!   [`anf::visit`] engine and a rewriting [`anf::map`] engine
//! - [`stack::ensure_sufficient_stack`] for deep recursive walks
//!
//! Types that contain floats store them as u64 bits so every node is
//! `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod anf;
pub mod ast;
mod flags;
mod ident;
mod interner;
mod name;
mod span;
pub mod stack;
pub mod visitor;

pub use flags::{ExportFlag, MutFlag, RecFlag};
pub use ident::{Ident, IdentRegistry};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
