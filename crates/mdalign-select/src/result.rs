//! Selection result types
//!
//! Provides the `SelectionResult` type for representing which atoms are
//! selected using a bitset.

use bitvec::prelude::*;
use mdalign_mol::AtomIndex;

/// A selection result representing which atoms are selected
///
/// Each bit corresponds to an atom index in the structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    /// Bitset where bit i is set if atom i is selected
    bits: BitVec<u64, Lsb0>,
}

impl SelectionResult {
    /// Create a new empty selection (no atoms selected)
    pub fn new(atom_count: usize) -> Self {
        SelectionResult {
            bits: bitvec![u64, Lsb0; 0; atom_count],
        }
    }

    /// Create a selection with all atoms selected
    pub fn all(atom_count: usize) -> Self {
        SelectionResult {
            bits: bitvec![u64, Lsb0; 1; atom_count],
        }
    }

    /// Create a selection from an iterator of atom indices
    pub fn from_indices(atom_count: usize, indices: impl Iterator<Item = AtomIndex>) -> Self {
        let mut result = Self::new(atom_count);
        for idx in indices {
            result.set(idx);
        }
        result
    }

    /// Get the number of atoms this selection covers
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.bits.len()
    }

    /// Check if an atom is selected
    #[inline]
    pub fn contains(&self, idx: AtomIndex) -> bool {
        self.bits.get(idx.as_usize()).map(|b| *b).unwrap_or(false)
    }

    /// Set an atom as selected
    #[inline]
    pub fn set(&mut self, idx: AtomIndex) {
        if let Some(mut bit) = self.bits.get_mut(idx.as_usize()) {
            *bit = true;
        }
    }

    /// Count the number of selected atoms
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Check if any atoms are selected
    #[inline]
    pub fn any(&self) -> bool {
        self.bits.any()
    }

    /// Check if no atoms are selected
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Iterate over indices of selected atoms, in ascending order
    pub fn indices(&self) -> impl Iterator<Item = AtomIndex> + '_ {
        self.bits.iter_ones().map(|i| AtomIndex(i as u32))
    }

    /// Union of two selections (OR)
    pub fn union(&self, other: &Self) -> Self {
        assert_eq!(self.bits.len(), other.bits.len(), "Selection sizes must match");
        let mut result = self.clone();
        result.bits |= &other.bits;
        result
    }

    /// Intersection of two selections (AND)
    pub fn intersection(&self, other: &Self) -> Self {
        assert_eq!(self.bits.len(), other.bits.len(), "Selection sizes must match");
        let mut result = self.clone();
        result.bits &= &other.bits;
        result
    }

    /// Complement (NOT)
    pub fn complement(&self) -> Self {
        let mut result = self.clone();
        result.bits = !result.bits;
        result
    }
}

impl Default for SelectionResult {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SelectionResult({} of {} atoms)", self.count(), self.atom_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection() {
        let sel = SelectionResult::new(100);
        assert_eq!(sel.atom_count(), 100);
        assert_eq!(sel.count(), 0);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_all_selection() {
        let sel = SelectionResult::all(100);
        assert_eq!(sel.count(), 100);
        assert!(sel.any());
    }

    #[test]
    fn test_set_contains() {
        let mut sel = SelectionResult::new(10);
        sel.set(AtomIndex(5));
        assert!(sel.contains(AtomIndex(5)));
        assert!(!sel.contains(AtomIndex(4)));
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn test_indices_ordered() {
        let sel = SelectionResult::from_indices(
            10,
            vec![AtomIndex(9), AtomIndex(1), AtomIndex(5)].into_iter(),
        );
        let indices: Vec<AtomIndex> = sel.indices().collect();
        assert_eq!(indices, vec![AtomIndex(1), AtomIndex(5), AtomIndex(9)]);
    }

    #[test]
    fn test_union_intersection() {
        let a = SelectionResult::from_indices(10, vec![AtomIndex(1), AtomIndex(2)].into_iter());
        let b = SelectionResult::from_indices(10, vec![AtomIndex(2), AtomIndex(3)].into_iter());

        let union = a.union(&b);
        assert_eq!(union.count(), 3);

        let inter = a.intersection(&b);
        assert_eq!(inter.count(), 1);
        assert!(inter.contains(AtomIndex(2)));
    }

    #[test]
    fn test_complement() {
        let sel = SelectionResult::from_indices(5, vec![AtomIndex(1), AtomIndex(3)].into_iter());
        let comp = sel.complement();
        assert_eq!(comp.count(), 3);
        assert!(comp.contains(AtomIndex(0)));
        assert!(!comp.contains(AtomIndex(1)));
    }

    #[test]
    fn test_display() {
        let sel = SelectionResult::from_indices(100, vec![AtomIndex(1), AtomIndex(2)].into_iter());
        assert_eq!(format!("{}", sel), "SelectionResult(2 of 100 atoms)");
    }
}
