//! Rigid-body superposition for mdalign
//!
//! Implements the Kabsch algorithm: given two index-paired point sets, find
//! the rotation and translation that minimize RMSD. The rotation is computed
//! via an analytical 3x3 SVD with the reflection-correction term, so the
//! result is always a proper rotation (det = +1) and never flips chirality.

mod kabsch;
mod svd3;

pub use kabsch::{kabsch, rmsd, FitResult};

/// Errors from the superposition engine
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    /// The two point sets have different cardinality
    #[error("Point sets have different lengths: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// A rigid fit needs at least 3 point pairs
    #[error("Not enough points for a rigid fit (need at least 3, got {0})")]
    TooFewPoints(usize),
}
