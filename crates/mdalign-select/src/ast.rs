//! Selection expression AST

/// A parsed selection expression
///
/// Field terms carry one or more values; an atom matches a term when it
/// matches *any* of the values ("chainid 0 1" selects chain 0 OR chain 1).
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionExpr {
    /// Every atom
    All,

    /// Atom name matches one of the given names
    Name(Vec<String>),

    /// Chain ordinal (zero-based, order of first appearance) is one of the
    /// given indices
    ChainId(Vec<u32>),

    /// Residue name matches one of the given names
    ResName(Vec<String>),

    /// Logical AND of two expressions
    And(Box<SelectionExpr>, Box<SelectionExpr>),

    /// Logical OR of two expressions
    Or(Box<SelectionExpr>, Box<SelectionExpr>),

    /// Logical NOT of an expression
    Not(Box<SelectionExpr>),
}
