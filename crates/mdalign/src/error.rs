//! Pipeline error types

use thiserror::Error;

/// Errors from loading or parsing a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has unknown fields
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Any failure along the alignment pipeline
///
/// The pipeline is fail-fast: the first error aborts the run, no partial
/// outputs are cleaned up and nothing is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration loading failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Structure file could not be read or written
    #[error(transparent)]
    Io(#[from] mdalign_io::IoError),

    /// A selection string failed to parse
    #[error("selection error: {0}")]
    Selection(#[from] mdalign_select::ParseError),

    /// Superposition failed (mismatched or too few CA pairs)
    #[error(transparent)]
    Fit(#[from] mdalign_fit::FitError),

    /// Structure manipulation failed
    #[error(transparent)]
    Mol(#[from] mdalign_mol::MolError),
}
