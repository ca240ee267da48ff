//! Error types for molecular operations

use thiserror::Error;

/// Errors that can occur when working with molecular data
#[derive(Error, Debug, Clone)]
pub enum MolError {
    /// Atom index is out of bounds
    #[error("Atom index {0} is out of bounds (max: {1})")]
    AtomIndexOutOfBounds(u32, usize),

    /// Frame index is out of bounds
    #[error("Frame index {0} is out of bounds (max: {1})")]
    FrameIndexOutOfBounds(usize, usize),

    /// Coordinate count doesn't match atom count
    #[error("Coordinate count mismatch: expected {expected}, got {actual}")]
    CoordinateMismatch { expected: usize, actual: usize },
}

impl MolError {
    /// Create an atom out of bounds error
    pub fn atom_out_of_bounds(index: u32, max: usize) -> Self {
        MolError::AtomIndexOutOfBounds(index, max)
    }
}

/// Result type for molecular operations
pub type MolResult<T> = Result<T, MolError>;
