//! mdalign: rigid-body alignment of a docked pose onto a reference structure
//!
//! Loads a reference complex and a docked pose, superposes the pose onto the
//! reference by their alpha-carbon atoms (Kabsch fit), applies the transform
//! to the whole pose, and writes three PDB subsets: the aligned protein
//! chains, the aligned ligand, and the reference-frame static ligands.
//!
//! The library surface is [`AlignConfig`] plus [`run`]; the `mdalign` binary
//! is a thin CLI over them.

mod config;
mod error;
mod pipeline;

pub use config::AlignConfig;
pub use error::{ConfigError, PipelineError};
pub use pipeline::{run, AlignReport};
