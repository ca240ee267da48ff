//! Molecular data structures for mdalign
//!
//! This crate provides the structure representation shared by the alignment
//! pipeline:
//!
//! - [`Atom`] - atom identity and per-atom PDB metadata
//! - [`AtomResidue`] - shared residue/chain record
//! - [`Frame`] - one coordinate set (x, y, z per atom)
//! - [`Structure`] - ordered atoms plus one or more frames
//!
//! Atom order is stable and defines index identity: selections and slicing
//! both speak in terms of [`AtomIndex`] positions into the atom array.

mod atom;
mod element;
mod error;
mod frame;
mod index;
mod residue;
mod structure;

pub use atom::Atom;
pub use element::Element;
pub use error::{MolError, MolResult};
pub use frame::Frame;
pub use index::AtomIndex;
pub use residue::AtomResidue;
pub use structure::Structure;
