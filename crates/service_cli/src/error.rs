//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `quantum` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rendering or analysis failed.
    #[error(transparent)]
    Art(#[from] quantum_art::ArtError),

    /// Writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
