//! Pipeline configuration
//!
//! All paths and selection strings are explicit configuration, loadable from
//! a TOML file. The defaults reproduce the conventional file layout: a
//! `complex_ref.pdb` reference and a `pose.pdb` docked pose in the working
//! directory, outputs written next to them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for one alignment run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignConfig {
    /// Reference structure the pose is aligned onto
    pub reference: PathBuf,

    /// Docked pose to align
    pub pose: PathBuf,

    /// Output path for the aligned protein chains
    pub aligned_protein: PathBuf,

    /// Output path for the aligned ligand
    pub ligand: PathBuf,

    /// Output path for the reference-frame static ligands
    pub static_ligands: PathBuf,

    /// Selection for the atoms the fit is computed over, evaluated against
    /// both structures
    pub fit_selection: String,

    /// Selection for the protein atoms written to `aligned_protein`
    pub protein_selection: String,

    /// Selection for the pose ligand written to `ligand`
    pub ligand_selection: String,

    /// Selection for the reference ligands written to `static_ligands`
    pub static_selection: String,
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            reference: PathBuf::from("complex_ref.pdb"),
            pose: PathBuf::from("pose.pdb"),
            aligned_protein: PathBuf::from("alignedprot.pdb"),
            ligand: PathBuf::from("lig.pdb"),
            static_ligands: PathBuf::from("staticligands.pdb"),
            fit_selection: "name CA".to_string(),
            protein_selection: "chainid 0 1".to_string(),
            ligand_selection: "resname UNK".to_string(),
            static_selection: "resname EEE DCK".to_string(),
        }
    }
}

impl AlignConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// Omitted fields take their defaults; unknown fields are rejected.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
