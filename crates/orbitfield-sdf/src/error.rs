//! Error types for orbitfield-sdf

use thiserror::Error;

/// Result type alias using the field crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when selecting a distance field model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Model name did not match any of the six models
    #[error("Unknown field model: {0}")]
    UnknownModel(String),

    /// Numeric model selector outside the defined range
    #[error("Field model index {0} out of range (expected 0..6)")]
    ModelOutOfRange(u32),
}
