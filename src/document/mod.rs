//! Single-file persistence of the raster.
//!
//! A document is a JSON object with one field, `imageData`, holding a PNG
//! data URI of the whole surface. It carries no version and no shape data;
//! loading replaces the raster wholesale.

pub mod codec;
pub mod data_url;
pub mod error;
pub mod file;

pub use codec::{load, parse, restore, save, to_canvas};
pub use error::{DocumentError, ErrorKind};
pub use file::{read_document, save_to_directory, write_document};

use serde::{Deserialize, Serialize};

/// Name of the artifact produced by a save.
pub const DOCUMENT_FILE_NAME: &str = "canvas.json";

/// On-disk document envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDocument {
    #[serde(rename = "imageData")]
    pub image_data: String,
}
