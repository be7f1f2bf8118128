//! Raster ⇄ JSON envelope conversion.

use super::PersistedDocument;
use super::data_url;
use super::error::DocumentError;
use crate::draw::{Canvas, Surface};
use crate::util::Point;
use log::{debug, info};

/// Serializes the entire surface as a `{"imageData": "data:image/png;base64,..."}` document.
pub fn save<S: Surface>(surface: &S) -> Result<Vec<u8>, DocumentError> {
    let document = PersistedDocument {
        image_data: surface.to_data_url()?,
    };
    let bytes = serde_json::to_vec(&document)?;
    info!(
        "Encoded {}x{} surface ({} bytes)",
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Parses document bytes without touching any surface.
pub fn parse(bytes: &[u8]) -> Result<PersistedDocument, DocumentError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Replaces the surface contents with the document's image.
///
/// The image is fully decoded before the surface is cleared, so a document
/// that fails to decode leaves the existing raster untouched.
pub fn restore<S: Surface>(surface: &mut S, document: &PersistedDocument) -> Result<(), DocumentError> {
    let encoded = image_bytes(document)?;
    let image = surface
        .decode_image(&encoded)
        .map_err(|err| DocumentError::Decode(err.to_string()))?;

    surface.clear()?;
    surface.draw_image(&image, Point::ORIGIN)?;
    info!("Document restored onto surface");
    Ok(())
}

/// Builds a canvas sized to the document's image and paints the image onto it.
pub fn to_canvas(document: &PersistedDocument) -> Result<Canvas, DocumentError> {
    let encoded = image_bytes(document)?;
    Canvas::from_image(&encoded).map_err(|err| DocumentError::Decode(err.to_string()))
}

/// Payload of the document's data URI. The declared subtype is informational;
/// the decoder sniffs the actual format from the bytes.
fn image_bytes(document: &PersistedDocument) -> Result<Vec<u8>, DocumentError> {
    let url = data_url::decode(&document.image_data)?;
    debug!("Document holds {} bytes of image/{}", url.bytes.len(), url.format);
    Ok(url.bytes)
}

/// Parses `bytes` and restores the result onto `surface`.
pub fn load<S: Surface>(surface: &mut S, bytes: &[u8]) -> Result<(), DocumentError> {
    let document = parse(bytes)?;
    restore(surface, &document)
}
