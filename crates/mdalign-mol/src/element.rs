//! Chemical elements
//!
//! A compact element table covering the species that occur in protein/ligand
//! PDB files. Anything else maps to [`Element::Unknown`] and is carried
//! through unchanged.

/// Chemical element of an atom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Sodium,
    Magnesium,
    Phosphorus,
    Sulfur,
    Chlorine,
    Potassium,
    Calcium,
    Manganese,
    Iron,
    Copper,
    Zinc,
    Selenium,
    Bromine,
    Iodine,
    #[default]
    Unknown,
}

impl Element {
    /// Look up an element by symbol (case-insensitive)
    pub fn from_symbol(symbol: &str) -> Option<Element> {
        let s = symbol.trim();
        let elem = match s.len() {
            1 => match s.as_bytes()[0].to_ascii_uppercase() {
                b'H' => Element::Hydrogen,
                b'C' => Element::Carbon,
                b'N' => Element::Nitrogen,
                b'O' => Element::Oxygen,
                b'F' => Element::Fluorine,
                b'P' => Element::Phosphorus,
                b'S' => Element::Sulfur,
                b'K' => Element::Potassium,
                b'I' => Element::Iodine,
                _ => return None,
            },
            2 => {
                let upper: String = s.to_ascii_uppercase();
                match upper.as_str() {
                    "NA" => Element::Sodium,
                    "MG" => Element::Magnesium,
                    "CL" => Element::Chlorine,
                    "CA" => Element::Calcium,
                    "MN" => Element::Manganese,
                    "FE" => Element::Iron,
                    "CU" => Element::Copper,
                    "ZN" => Element::Zinc,
                    "SE" => Element::Selenium,
                    "BR" => Element::Bromine,
                    _ => return None,
                }
            }
            _ => return None,
        };
        Some(elem)
    }

    /// Get the element symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Fluorine => "F",
            Element::Sodium => "Na",
            Element::Magnesium => "Mg",
            Element::Phosphorus => "P",
            Element::Sulfur => "S",
            Element::Chlorine => "Cl",
            Element::Potassium => "K",
            Element::Calcium => "Ca",
            Element::Manganese => "Mn",
            Element::Iron => "Fe",
            Element::Copper => "Cu",
            Element::Zinc => "Zn",
            Element::Selenium => "Se",
            Element::Bromine => "Br",
            Element::Iodine => "I",
            Element::Unknown => "X",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(Element::from_symbol("C"), Some(Element::Carbon));
        assert_eq!(Element::from_symbol("c"), Some(Element::Carbon));
        assert_eq!(Element::from_symbol("Fe"), Some(Element::Iron));
        assert_eq!(Element::from_symbol("FE"), Some(Element::Iron));
        assert_eq!(Element::from_symbol("Xx"), None);
    }

    #[test]
    fn test_roundtrip() {
        for elem in [Element::Carbon, Element::Zinc, Element::Chlorine] {
            assert_eq!(Element::from_symbol(elem.symbol()), Some(elem));
        }
    }
}
