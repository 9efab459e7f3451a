//! Error types for rtdocs

use thiserror::Error;

/// Result type alias for rtdocs operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Crate error types
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed preference file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Cannot serialize preferences: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}
