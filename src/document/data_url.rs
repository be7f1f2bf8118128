//! `data:image/<format>;base64,<payload>` URIs.

use super::error::DocumentError;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Decoded data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUrl {
    /// Subtype after `image/` (e.g. "png")
    pub format: String,
    pub bytes: Vec<u8>,
}

/// Wraps PNG bytes in a data URI.
pub fn encode_png(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Splits and base64-decodes an image data URI.
pub fn decode(url: &str) -> Result<ImageDataUrl, DocumentError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| DocumentError::Decode("not a data URI".to_string()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| DocumentError::Decode("data URI has no payload".to_string()))?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or_else(|| DocumentError::Decode("data URI is not base64-encoded".to_string()))?;
    let format = mime
        .strip_prefix("image/")
        .filter(|format| !format.is_empty())
        .ok_or_else(|| DocumentError::Decode(format!("unsupported media type '{mime}'")))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|err| DocumentError::Decode(format!("invalid base64 payload: {err}")))?;

    Ok(ImageDataUrl {
        format: format.to_ascii_lowercase(),
        bytes,
    })
}
