//! Reader and writer traits
//!
//! The pipeline only speaks PDB, but it talks to the format through these
//! two traits so the parsing backend stays swappable and testable.

use mdalign_mol::Structure;

use crate::error::IoResult;

/// Trait for reading a structure from a source
pub trait StructureReader {
    /// Read a single structure from the source
    fn read(&mut self) -> IoResult<Structure>;
}

/// Trait for writing a structure to a destination
pub trait StructureWriter {
    /// Write a structure to the destination
    fn write(&mut self, structure: &Structure) -> IoResult<()>;

    /// Flush any buffered data
    fn flush(&mut self) -> IoResult<()>;
}
