//! PDB format support

mod parser;
mod records;
mod writer;

pub use parser::PdbReader;
pub use records::{infer_element_from_name, parse_pdb_charge, AtomRecord};
pub use writer::PdbWriter;
