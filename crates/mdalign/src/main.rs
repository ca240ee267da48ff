use std::path::PathBuf;
use std::process;

use clap::Parser;

use mdalign::{run, AlignConfig, PipelineError};

#[derive(Parser)]
#[command(name = "mdalign")]
#[command(about = "Rigid-body alignment of a docked pose onto a reference structure", long_about = None)]
struct Cli {
    /// Config TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference structure (PDB, optionally gzipped)
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Pose structure to align (PDB, optionally gzipped)
    #[arg(short, long)]
    pose: Option<PathBuf>,

    /// Output path for the aligned protein chains
    #[arg(long)]
    aligned_protein: Option<PathBuf>,

    /// Output path for the aligned ligand
    #[arg(long)]
    ligand: Option<PathBuf>,

    /// Output path for the static reference ligands
    #[arg(long)]
    static_ligands: Option<PathBuf>,

    /// Selection the fit is computed over
    #[arg(long)]
    fit_selection: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(cli: &Cli) -> Result<AlignConfig, PipelineError> {
    let mut config = match &cli.config {
        Some(path) => AlignConfig::from_file(path).map_err(PipelineError::Config)?,
        None => AlignConfig::default(),
    };

    if let Some(reference) = &cli.reference {
        config.reference = reference.clone();
    }
    if let Some(pose) = &cli.pose {
        config.pose = pose.clone();
    }
    if let Some(aligned_protein) = &cli.aligned_protein {
        config.aligned_protein = aligned_protein.clone();
    }
    if let Some(ligand) = &cli.ligand {
        config.ligand = ligand.clone();
    }
    if let Some(static_ligands) = &cli.static_ligands {
        config.static_ligands = static_ligands.clone();
    }
    if let Some(fit_selection) = &cli.fit_selection {
        config.fit_selection = fit_selection.clone();
    }

    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = build_config(&cli).and_then(|config| run(&config));
    match result {
        Ok(report) => {
            log::info!(
                "alignment complete: {} CA pairs, rmsd {:.3} -> {:.3}",
                report.ca_pairs,
                report.rmsd_before,
                report.rmsd_after
            );
        }
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    }
}
