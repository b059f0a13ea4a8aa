//! Error types for the brandoc library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for brandoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting documents.
///
/// Parsing and rendering are total; these errors originate at the I/O
/// boundary (reading sources, writing or storing outputs) and in the
/// template and theme loaders.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document could not be rendered.
    #[error("Rendering error: {0}")]
    Render(String),

    /// An output sink rejected the document.
    #[error("Sink error: {0}")]
    Sink(String),

    /// A template could not be processed.
    #[error("Template error: {0}")]
    Template(String),

    /// A template placeholder has no value in the context.
    #[error("Missing template variable: {0}")]
    MissingVariable(String),

    /// No writer is registered for the requested output format.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// A theme definition is invalid.
    #[error("Invalid theme: {0}")]
    Theme(String),

    /// A required file or directory does not exist.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
