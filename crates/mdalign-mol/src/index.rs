//! Typed atom indices

use std::fmt;

/// Index of an atom within a [`Structure`](crate::Structure)
///
/// Atom order is stable for the lifetime of a structure, so an `AtomIndex`
/// identifies the same atom until the structure is dropped. Slicing produces
/// a new structure with its own, renumbered indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomIndex(pub u32);

impl AtomIndex {
    /// Convert to usize for array indexing
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for AtomIndex {
    fn from(value: usize) -> Self {
        AtomIndex(value as u32)
    }
}

impl fmt::Display for AtomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let idx = AtomIndex::from(42usize);
        assert_eq!(idx.as_usize(), 42);
        assert_eq!(format!("{}", idx), "42");
    }
}
