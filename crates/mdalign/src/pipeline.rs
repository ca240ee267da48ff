//! The alignment pipeline
//!
//! A straight-line sequence with no branching on structure content: load the
//! reference and the pose, fit the pose's CA atoms onto the reference's,
//! apply the fitted transform to every pose atom, then slice and write the
//! three output subsets.

use log::{debug, info};

use mdalign_fit::{kabsch, rmsd};
use mdalign_io::{load_structure, save_structure};
use mdalign_select::select_atoms;

use crate::config::AlignConfig;
use crate::error::PipelineError;

/// Summary of one completed alignment run
#[derive(Debug, Clone)]
pub struct AlignReport {
    /// Number of CA pairs the fit was computed over
    pub ca_pairs: usize,
    /// CA RMSD before alignment
    pub rmsd_before: f32,
    /// CA RMSD after alignment
    pub rmsd_after: f32,
    /// Atoms written to the aligned-protein file
    pub protein_atoms: usize,
    /// Atoms written to the ligand file
    pub ligand_atoms: usize,
    /// Atoms written to the static-ligands file
    pub static_ligand_atoms: usize,
}

/// Run the full alignment pipeline
pub fn run(config: &AlignConfig) -> Result<AlignReport, PipelineError> {
    info!("loading reference {}", config.reference.display());
    let reference = load_structure(&config.reference)?;
    info!("loading pose {}", config.pose.display());
    let mut pose = load_structure(&config.pose)?;

    // The fit selection is evaluated independently on each structure; the
    // resulting coordinate sets are paired by index order, so both must
    // match the same atoms in the same order.
    let ref_fit = select_atoms(&config.fit_selection, &reference)?;
    let pose_fit = select_atoms(&config.fit_selection, &pose)?;
    debug!(
        "fit selection '{}': {} reference atoms, {} pose atoms",
        config.fit_selection,
        ref_fit.len(),
        pose_fit.len()
    );

    let ref_points = reference.coords_of(0, &ref_fit)?;
    let pose_points = pose.coords_of(0, &pose_fit)?;

    let rmsd_before = if ref_points.len() == pose_points.len() {
        rmsd(&pose_points, &ref_points)
    } else {
        f32::NAN
    };
    let fit = kabsch(&pose_points, &ref_points)?;
    info!(
        "CA fit over {} pairs: rmsd {:.3} -> {:.3}",
        fit.n_points, rmsd_before, fit.rmsd
    );

    // The fitted transform applies to every pose atom, not only the fitted
    // subset. The ligand rides along rigidly with the protein.
    pose.transform_all_frames(&fit.matrix());

    let protein = pose.atom_slice(&select_atoms(&config.protein_selection, &pose)?)?;
    let ligand = pose.atom_slice(&select_atoms(&config.ligand_selection, &pose)?)?;
    let statics = reference.atom_slice(&select_atoms(&config.static_selection, &reference)?)?;

    save_structure(&protein, &config.aligned_protein)?;
    info!(
        "wrote {} ({} atoms)",
        config.aligned_protein.display(),
        protein.atom_count()
    );
    save_structure(&ligand, &config.ligand)?;
    info!(
        "wrote {} ({} atoms)",
        config.ligand.display(),
        ligand.atom_count()
    );
    save_structure(&statics, &config.static_ligands)?;
    info!(
        "wrote {} ({} atoms)",
        config.static_ligands.display(),
        statics.atom_count()
    );

    Ok(AlignReport {
        ca_pairs: fit.n_points,
        rmsd_before,
        rmsd_after: fit.rmsd,
        protein_atoms: protein.atom_count(),
        ligand_atoms: ligand.atom_count(),
        static_ligand_atoms: statics.atom_count(),
    })
}
