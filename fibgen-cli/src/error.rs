//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generator error
    #[error("Generator error: {0}")]
    Generator(#[from] fibgen::GeneratorError),

    /// Dictionary lookup on a key that was never inserted
    #[error("Missing key: {0}")]
    MissingKey(String),
}
