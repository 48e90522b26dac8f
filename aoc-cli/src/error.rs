//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] aoc_store::StoreError),

    /// Input resolution error
    #[error("Input error: {0}")]
    Input(#[from] aoc_harness::InputError),

    /// Registry construction or solver load error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_harness::RegistrationError),

    /// Harness phase error
    #[error(transparent)]
    Harness(#[from] aoc_harness::HarnessError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
