//! Error types for document save/load.

use crate::draw::SurfaceError;
use thiserror::Error;

/// Errors that can occur while saving or loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Not JSON, or JSON without a string `imageData` field.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// `imageData` is not a decodable image.
    #[error("image data could not be decoded: {0}")]
    Decode(String),

    #[error("document I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Coarse classification of a [`DocumentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedDocument,
    DecodeFailure,
    Io,
    Surface,
}

impl DocumentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocumentError::Malformed(_) => ErrorKind::MalformedDocument,
            DocumentError::Decode(_) => ErrorKind::DecodeFailure,
            DocumentError::Io(_) => ErrorKind::Io,
            DocumentError::Surface(_) => ErrorKind::Surface,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DocumentError::Malformed(_))
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Malformed(err.to_string())
    }
}
