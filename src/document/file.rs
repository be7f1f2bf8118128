//! Reading and writing document files.

use super::codec;
use super::error::DocumentError;
use super::{DOCUMENT_FILE_NAME, PersistedDocument};
use crate::draw::Surface;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes document bytes as `canvas.json` inside `directory`.
///
/// Creates the directory if needed and overwrites an existing file.
///
/// # Returns
/// Path of the written file
pub fn write_document(directory: &Path, bytes: &[u8]) -> Result<PathBuf, DocumentError> {
    if !directory.exists() {
        log::info!("Creating save directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let path = directory.join(DOCUMENT_FILE_NAME);
    fs::write(&path, bytes)?;
    log::info!("Saved document to {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Encodes `surface` and writes it into `directory`.
pub fn save_to_directory<S: Surface>(surface: &S, directory: &Path) -> Result<PathBuf, DocumentError> {
    let bytes = codec::save(surface)?;
    write_document(directory, &bytes)
}

/// Reads and parses a document file.
///
/// Only the read is asynchronous; the surface is not involved, so the
/// caller can keep drawing until the document arrives and then apply it
/// with [`codec::restore`].
pub async fn read_document(path: &Path) -> Result<PersistedDocument, DocumentError> {
    log::debug!("Reading document {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    codec::parse(text.as_bytes())
}
