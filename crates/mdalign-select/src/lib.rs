//! Atom selection query language
//!
//! A small mdtraj-flavored selection language over [`Structure`]s. Field
//! terms (`name`, `resname`, `chainid`) take one or more values, OR-ed
//! within the term; terms combine with `and`/`or`/`not` (or `&`/`|`/`!`)
//! and parentheses. `chainid` takes zero-based chain ordinals, assigned by
//! order of first appearance.
//!
//! ```
//! use mdalign_select::select;
//! # use mdalign_mol::{Atom, Element, Structure};
//! # let mut structure = Structure::new("s");
//! # let mut a = Atom::new("CA", Element::Carbon);
//! # a.set_residue("GLY", 1, "A");
//! # structure.add_atom(a);
//! let sel = select("name CA and chainid 0", &structure).unwrap();
//! assert_eq!(sel.count(), 1);
//! ```

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;
mod result;

pub use ast::SelectionExpr;
pub use error::{ParseError, ParseResult};
pub use eval::evaluate;
pub use parser::parse_selection;
pub use result::SelectionResult;

use mdalign_mol::{AtomIndex, Structure};

/// Parse a selection string and evaluate it against a structure
///
/// Fails only on a malformed query; a query that matches nothing returns an
/// empty selection.
pub fn select(query: &str, structure: &Structure) -> ParseResult<SelectionResult> {
    let expr = parse_selection(query)?;
    Ok(evaluate(&expr, structure))
}

/// Parse and evaluate a selection, returning matched atom indices in
/// ascending order
pub fn select_atoms(query: &str, structure: &Structure) -> ParseResult<Vec<AtomIndex>> {
    Ok(select(query, structure)?.indices().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdalign_mol::{Atom, Element};

    fn two_chain_structure() -> Structure {
        let mut s = Structure::new("test");
        for (name, resn, resv, chain) in [
            ("N", "ALA", 1, "A"),
            ("CA", "ALA", 1, "A"),
            ("C", "ALA", 1, "A"),
            ("CA", "GLY", 2, "A"),
            ("C1", "UNK", 1, "L"),
            ("C2", "UNK", 1, "L"),
        ] {
            let mut atom = Atom::new(name, Element::Carbon);
            atom.set_residue(resn, resv, chain);
            s.add_atom(atom);
        }
        s
    }

    #[test]
    fn test_select_name() {
        let s = two_chain_structure();
        let sel = select("name CA", &s).unwrap();
        assert_eq!(sel.count(), 2);
    }

    #[test]
    fn test_select_chainid_list() {
        let s = two_chain_structure();
        assert_eq!(select("chainid 0", &s).unwrap().count(), 4);
        assert_eq!(select("chainid 0 1", &s).unwrap().count(), 6);
    }

    #[test]
    fn test_select_compound() {
        let s = two_chain_structure();
        let sel = select("name CA and not resname GLY", &s).unwrap();
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn test_select_atoms_ordered() {
        let s = two_chain_structure();
        let atoms = select_atoms("resname UNK", &s).unwrap();
        assert_eq!(atoms, vec![AtomIndex(4), AtomIndex(5)]);
    }

    #[test]
    fn test_select_unknown_keyword_is_error() {
        let s = two_chain_structure();
        assert!(matches!(
            select("resnme UNK", &s),
            Err(ParseError::UnknownKeyword(_))
        ));
    }

    #[test]
    fn test_select_overflowing_chainid_is_error() {
        // A chain index past u32::MAX must fail, not wrap around and match
        // chain 0
        let s = two_chain_structure();
        assert!(matches!(
            select("chainid 4294967296", &s),
            Err(ParseError::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_select_empty_match_ok() {
        let s = two_chain_structure();
        let sel = select("resname EEE DCK", &s).unwrap();
        assert!(sel.is_empty());
    }
}
