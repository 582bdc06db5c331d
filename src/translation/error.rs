//! Translation error definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::translation::chunker::ChunkError;

/// Errors that can occur while translating a file.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Reading the input or writing the output failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The translation service rejected or failed the call.
    #[error("Translation API error: {0}")]
    Api(String),

    /// The text could not be split under the configured budget.
    #[error("Chunking failed: {0}")]
    Chunk(#[from] ChunkError),

    /// The document call succeeded but carried no translated document.
    #[error("Translation API returned no document")]
    MissingDocument,

    /// The request could not be built from the given inputs.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TranslateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
