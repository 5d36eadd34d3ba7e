//! Dynamic color error types

use thiserror::Error;

use crate::palette::{PaletteFamily, Tone};

/// Errors raised while resolving platform color resources
#[derive(Error, Debug)]
pub enum DynamicColorError {
    /// The provider does not know the resource on this platform version
    #[error("Color resource not available: {0}")]
    ResourceUnavailable(String),

    /// A core palette stop could not be resolved
    #[error("Core palette unavailable: {family:?} tone {tone}")]
    PaletteUnavailable { family: PaletteFamily, tone: Tone },

    /// The platform lookup itself failed
    #[error("Platform error: {0}")]
    Platform(String),

    /// A configured color value is malformed or out of range
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    /// Failed to parse a resource table
    #[error("Failed to parse resource table: {0}")]
    TableParse(#[from] toml::de::Error),

    /// Failed to read a resource table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dynamic color operations
pub type Result<T> = std::result::Result<T, DynamicColorError>;
