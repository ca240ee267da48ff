//! Selection expression evaluator
//!
//! Evaluates parsed selection expressions against a structure. Evaluation
//! cannot fail: a query that matches no atoms yields an empty selection.

use std::collections::HashMap;

use mdalign_mol::Structure;

use crate::ast::SelectionExpr;
use crate::result::SelectionResult;

/// Evaluate a selection expression against a structure
pub fn evaluate(expr: &SelectionExpr, structure: &Structure) -> SelectionResult {
    // Chain ordinals are assigned by order of first appearance in the atom
    // list, so "chainid 0" is the first chain in the file regardless of its
    // letter.
    let chain_ordinals: HashMap<String, u32> = structure
        .chain_ids()
        .into_iter()
        .enumerate()
        .map(|(i, chain)| (chain, i as u32))
        .collect();

    eval_expr(expr, structure, &chain_ordinals)
}

fn eval_expr(
    expr: &SelectionExpr,
    structure: &Structure,
    chain_ordinals: &HashMap<String, u32>,
) -> SelectionResult {
    match expr {
        SelectionExpr::And(left, right) => {
            let l = eval_expr(left, structure, chain_ordinals);
            let r = eval_expr(right, structure, chain_ordinals);
            l.intersection(&r)
        }
        SelectionExpr::Or(left, right) => {
            let l = eval_expr(left, structure, chain_ordinals);
            let r = eval_expr(right, structure, chain_ordinals);
            l.union(&r)
        }
        SelectionExpr::Not(inner) => eval_expr(inner, structure, chain_ordinals).complement(),

        SelectionExpr::All => SelectionResult::all(structure.atom_count()),

        SelectionExpr::Name(names) => eval_property(structure, |atom| {
            names.iter().any(|n| atom.name.eq_ignore_ascii_case(n))
        }),
        SelectionExpr::ResName(names) => eval_property(structure, |atom| {
            names
                .iter()
                .any(|n| atom.residue.resn.eq_ignore_ascii_case(n))
        }),
        SelectionExpr::ChainId(ids) => eval_property(structure, |atom| {
            chain_ordinals
                .get(&atom.residue.chain)
                .map(|ordinal| ids.contains(ordinal))
                .unwrap_or(false)
        }),
    }
}

fn eval_property<F>(structure: &Structure, predicate: F) -> SelectionResult
where
    F: Fn(&mdalign_mol::Atom) -> bool,
{
    let mut result = SelectionResult::new(structure.atom_count());
    for (idx, atom) in structure.atoms_indexed() {
        if predicate(atom) {
            result.set(idx);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdalign_mol::{Atom, Element};

    fn test_structure() -> Structure {
        let mut s = Structure::new("test");
        for (name, resn, resv, chain) in [
            ("N", "GLY", 1, "A"),
            ("CA", "GLY", 1, "A"),
            ("C", "GLY", 1, "A"),
            ("CA", "ALA", 2, "A"),
            ("CA", "UNK", 1, "B"),
            ("C1", "UNK", 1, "B"),
        ] {
            let mut atom = Atom::new(name, Element::Carbon);
            atom.set_residue(resn, resv, chain);
            s.add_atom(atom);
        }
        s
    }

    #[test]
    fn test_eval_name() {
        let s = test_structure();
        let sel = evaluate(&SelectionExpr::Name(vec!["CA".to_string()]), &s);
        assert_eq!(sel.count(), 3);
    }

    #[test]
    fn test_eval_name_case_insensitive() {
        let s = test_structure();
        let sel = evaluate(&SelectionExpr::Name(vec!["ca".to_string()]), &s);
        assert_eq!(sel.count(), 3);
    }

    #[test]
    fn test_eval_chainid_ordinal() {
        let s = test_structure();
        let sel = evaluate(&SelectionExpr::ChainId(vec![0]), &s);
        assert_eq!(sel.count(), 4);
        let sel = evaluate(&SelectionExpr::ChainId(vec![1]), &s);
        assert_eq!(sel.count(), 2);
        let sel = evaluate(&SelectionExpr::ChainId(vec![0, 1]), &s);
        assert_eq!(sel.count(), 6);
    }

    #[test]
    fn test_eval_resname() {
        let s = test_structure();
        let sel = evaluate(&SelectionExpr::ResName(vec!["UNK".to_string()]), &s);
        assert_eq!(sel.count(), 2);
    }

    #[test]
    fn test_eval_and_not() {
        let s = test_structure();
        let expr = SelectionExpr::And(
            Box::new(SelectionExpr::Name(vec!["CA".to_string()])),
            Box::new(SelectionExpr::Not(Box::new(SelectionExpr::ChainId(vec![
                1,
            ])))),
        );
        let sel = evaluate(&expr, &s);
        assert_eq!(sel.count(), 2);
    }

    #[test]
    fn test_eval_all() {
        let s = test_structure();
        let sel = evaluate(&SelectionExpr::All, &s);
        assert_eq!(sel.count(), 6);
    }

    #[test]
    fn test_eval_no_match_is_empty() {
        let s = test_structure();
        let sel = evaluate(&SelectionExpr::ResName(vec!["HOH".to_string()]), &s);
        assert!(sel.is_empty());
    }
}
