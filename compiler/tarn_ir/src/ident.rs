//! Stamped binder identities.
//!
//! Every binding occurrence in the ANF IR gets its own [`Ident`], created
//! once by [`IdentRegistry::fresh`]. Identity is the stamp: two binders
//! both displayed as `x` are different identifiers, so free-variable and
//! capture sets cannot be confused by shadowing.

use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Name, StringLookup};

/// A unique binder identity.
///
/// `Eq`, `Hash` and `Ord` use only the stamp. The display name is carried
/// for rendering and debugging.
#[derive(Copy, Clone)]
pub struct Ident {
    stamp: u32,
    name: Name,
}

impl Ident {
    #[inline]
    pub const fn stamp(self) -> u32 {
        self.stamp
    }

    #[inline]
    pub const fn name(self) -> Name {
        self.name
    }

    /// Render as `name/stamp`, the form used in IR dumps.
    pub fn display(self, names: &dyn StringLookup) -> String {
        format!("{}/{}", names.lookup(self.name), self.stamp)
    }
}

impl PartialEq for Ident {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.stamp == other.stamp
    }
}

impl Eq for Ident {}

impl Hash for Ident {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stamp.hash(state);
    }
}

impl PartialOrd for Ident {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ident {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        self.stamp.cmp(&other.stamp)
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ident({}#{})", self.name.raw(), self.stamp)
    }
}

/// Source of fresh identifiers for one compilation session.
///
/// Stamps increase monotonically and are never reused, so identifiers
/// created by different lowering runs in the same session stay distinct.
#[derive(Debug)]
pub struct IdentRegistry {
    next: AtomicU32,
}

impl Default for IdentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentRegistry {
    pub const fn new() -> Self {
        IdentRegistry {
            next: AtomicU32::new(1),
        }
    }

    #[cfg(test)]
    const fn starting_at(next: u32) -> Self {
        IdentRegistry {
            next: AtomicU32::new(next),
        }
    }

    /// Create a new binder identity displayed as `name`.
    ///
    /// # Panics
    /// Panics if the stamp space is exhausted.
    pub fn fresh(&self, name: Name) -> Ident {
        // Saturates at `u32::MAX`: once exhausted, every later call panics too.
        let stamp = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| next.checked_add(1))
            .unwrap_or_else(|_| panic!("identifier stamps exhausted"));
        Ident { stamp, name }
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> u32 {
        self.next.load(Ordering::Relaxed) - 1
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Ident;
    crate::static_assert_size!(Ident, 8);
}
