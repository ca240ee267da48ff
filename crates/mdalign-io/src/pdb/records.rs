//! PDB record types

use mdalign_mol::Element;

/// Parsed ATOM or HETATM record
#[derive(Debug, Clone)]
pub struct AtomRecord {
    /// Record type: true for HETATM, false for ATOM
    pub hetatm: bool,
    /// Atom serial number (1-99999)
    pub serial: i32,
    /// Atom name (stripped of column padding)
    pub name: String,
    /// Alternate location indicator
    pub alt_loc: char,
    /// Residue name (3 characters)
    pub resn: String,
    /// Chain identifier
    pub chain: String,
    /// Residue sequence number
    pub resv: i32,
    /// Insertion code
    pub icode: char,
    /// X coordinate (Angstroms)
    pub x: f32,
    /// Y coordinate (Angstroms)
    pub y: f32,
    /// Z coordinate (Angstroms)
    pub z: f32,
    /// Occupancy
    pub occupancy: f32,
    /// Temperature factor (B-factor)
    pub b_factor: f32,
    /// Segment identifier
    pub segi: String,
    /// Element symbol column
    pub element: String,
    /// Formal charge column
    pub charge: String,
}

impl AtomRecord {
    /// Resolve the element, preferring the element column over the name
    pub fn get_element(&self) -> Element {
        if !self.element.is_empty() {
            if let Some(elem) = Element::from_symbol(self.element.trim()) {
                return elem;
            }
        }
        infer_element_from_name(&self.name)
    }

    /// Parse the formal charge from the charge column
    pub fn get_formal_charge(&self) -> i8 {
        parse_pdb_charge(&self.charge)
    }
}

/// Infer an element from a PDB atom name
///
/// PDB atom names are justified by element width: 1-letter elements start in
/// column 14, 2-letter elements in column 13. Protein atom names like CA and
/// CD collide with calcium/cadmium symbols and are resolved as carbon.
pub fn infer_element_from_name(name: &str) -> Element {
    let name = name.trim();
    if name.is_empty() {
        return Element::Unknown;
    }

    let chars: Vec<char> = name.chars().collect();
    let start = if chars[0] == ' ' || chars[0].is_ascii_digit() {
        1
    } else {
        0
    };
    if start >= chars.len() {
        return Element::Unknown;
    }

    if chars.len() > start + 1 {
        let two_letter: String = chars[start..=start + 1].iter().collect();
        if let Some(elem) = Element::from_symbol(&two_letter) {
            let is_common_protein_name = matches!(
                name,
                "CA" | "CB" | "CG" | "CD" | "CE" | "CZ" | "CH" | "NE" | "NH" | "NZ" | "OG" | "OH"
                    | "OE" | "OD" | "SD" | "SG"
            );
            if !is_common_protein_name {
                return elem;
            }
        }
    }

    let one_letter = chars[start].to_ascii_uppercase().to_string();
    Element::from_symbol(&one_letter).unwrap_or(Element::Unknown)
}

/// Parse a PDB-style charge string (e.g. "2+", "1-", "+", "-")
pub fn parse_pdb_charge(charge_str: &str) -> i8 {
    let s = charge_str.trim();
    if s.is_empty() {
        return 0;
    }

    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        ['+'] => 1,
        ['-'] => -1,
        [d, '+'] if d.is_ascii_digit() => d.to_digit(10).unwrap_or(0) as i8,
        [d, '-'] if d.is_ascii_digit() => -(d.to_digit(10).unwrap_or(0) as i8),
        ['+', d] if d.is_ascii_digit() => d.to_digit(10).unwrap_or(0) as i8,
        ['-', d] if d.is_ascii_digit() => -(d.to_digit(10).unwrap_or(0) as i8),
        _ => 0,
    }
}
