//! Error types for loading documents.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a document from disk.
///
/// Parsing and extraction never fail on their own; every variant comes from file access.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid UTF-8 text.
    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// The file extension is not one mdblocks segments.
    #[error("unsupported file type: {path} (expected .md, .markdown or .txt)")]
    UnsupportedFileType {
        /// Path to the unsupported file.
        path: PathBuf,
    },
}
