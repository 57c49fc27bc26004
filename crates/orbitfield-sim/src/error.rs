//! Error types for orbitfield-sim

use thiserror::Error;

/// Result type alias using the simulation crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or driving a simulation
#[derive(Error, Debug)]
pub enum Error {
    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Invalid argument to a helper
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Model selection error
    #[error(transparent)]
    Field(#[from] orbitfield_sdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
