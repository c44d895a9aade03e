//! Error types for deltatest.
//!
//! Only genuine failures live here. "Nothing to do" outcomes (no classes, no
//! changed methods, a test already present) are ordinary return values.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for extraction, merging and generation.
#[derive(Debug, Error)]
pub enum DeltaTestError {
    /// The source could not be turned into a syntax tree at all.
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    /// No grammar is registered for the file's language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is unreadable or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The test body generator failed.
    #[error("generation failed: {0}")]
    Generation(String),
}

impl DeltaTestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeltaTestError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeltaTestError>;
