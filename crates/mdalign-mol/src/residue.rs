//! Residue and chain information
//!
//! Residue data is shared between the atoms of one residue via
//! `Arc<AtomResidue>`, following the flat-atom-array model: there is no
//! separate residue container, the records hang off the atoms themselves.

use std::fmt;

/// Residue/chain record attached to an atom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtomResidue {
    /// Chain identifier (PDB column 22, e.g. "A")
    pub chain: String,
    /// Residue name (e.g. "ALA", "UNK")
    pub resn: String,
    /// Residue sequence number
    pub resv: i32,
    /// Insertion code (' ' when absent)
    pub inscode: char,
    /// Segment identifier
    pub segi: String,
}

impl AtomResidue {
    /// Create a residue record from its parts
    pub fn from_parts(
        chain: impl Into<String>,
        resn: impl Into<String>,
        resv: i32,
        inscode: char,
        segi: impl Into<String>,
    ) -> Self {
        AtomResidue {
            chain: chain.into(),
            resn: resn.into(),
            resv,
            inscode,
            segi: segi.into(),
        }
    }
}

impl fmt::Display for AtomResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}`{}", self.chain, self.resn, self.resv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let res = AtomResidue::from_parts("A", "GLY", 42, ' ', "");
        assert_eq!(res.chain, "A");
        assert_eq!(res.resn, "GLY");
        assert_eq!(res.resv, 42);
        assert_eq!(format!("{}", res), "A/GLY`42");
    }
}
