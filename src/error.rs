//! Error types for sheet generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    /// Filesystem failure, tagged with the path that was being touched.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encode/decode failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Color string that is neither a known name nor valid hex / `rgb()`.
    #[error("unknown color: '{0}'")]
    UnknownColor(String),

    /// Action table and layout disagree (gaps in the grid, zero-sized frames).
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Roster entry that can't be turned into a sheet.
    #[error("invalid roster entry '{id}': {reason}")]
    InvalidEntry { id: String, reason: String },

    #[error("character name must not be empty")]
    EmptyName,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SheetError {
    /// Wrap an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn invalid_entry(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry { id: id.into(), reason: reason.into() }
    }
}
