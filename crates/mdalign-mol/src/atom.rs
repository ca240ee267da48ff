//! Atom data structure

use std::sync::Arc;

use crate::element::Element;
use crate::residue::AtomResidue;

/// A single atom: identity plus the PDB metadata carried through the pipeline
///
/// Coordinates live in [`Frame`](crate::Frame)s, not on the atom; an atom's
/// position in the structure's atom array links the two.
#[derive(Debug, Clone)]
pub struct Atom {
    /// Atom name (e.g. "CA", "N", "O")
    pub name: String,

    /// Chemical element
    pub element: Element,

    /// Residue/chain record, shared between atoms of the same residue
    pub residue: Arc<AtomResidue>,

    /// Alternate location indicator (' ' when absent)
    pub alt: char,

    /// Occupancy
    pub occupancy: f32,

    /// Temperature factor (B-factor)
    pub b_factor: f32,

    /// True for HETATM records
    pub hetatm: bool,

    /// PDB serial number
    pub id: i32,

    /// Formal charge
    pub formal_charge: i8,
}

impl Atom {
    /// Create a new atom with default residue information
    pub fn new(name: impl Into<String>, element: Element) -> Self {
        Atom {
            name: name.into(),
            element,
            residue: Arc::new(AtomResidue::default()),
            alt: ' ',
            occupancy: 1.0,
            b_factor: 0.0,
            hetatm: false,
            id: 0,
            formal_charge: 0,
        }
    }

    /// Set residue name, number and chain in one call (test/builder helper)
    pub fn set_residue(&mut self, resn: &str, resv: i32, chain: &str) {
        self.residue = Arc::new(AtomResidue::from_parts(chain, resn, resv, ' ', ""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_atom() {
        let atom = Atom::new("CA", Element::Carbon);
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.element, Element::Carbon);
        assert!(!atom.hetatm);
        assert_eq!(atom.occupancy, 1.0);
    }

    #[test]
    fn test_set_residue() {
        let mut atom = Atom::new("O", Element::Oxygen);
        atom.set_residue("HOH", 501, "W");
        assert_eq!(atom.residue.resn, "HOH");
        assert_eq!(atom.residue.chain, "W");
        assert_eq!(atom.residue.resv, 501);
    }
}
