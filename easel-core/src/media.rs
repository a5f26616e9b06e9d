//! Embedding uploaded images.
//!
//! A picked file is turned into a `data:` URL so the image node carries its
//! own pixels and needs no server.

use base64::Engine;

use crate::{EditorError, EditorResult};

/// Encode image bytes as a base64 `data:` URL.
///
/// # Errors
///
/// Returns an error if the media type is not an image or the file is empty.
pub fn image_data_url(media_type: &str, bytes: &[u8]) -> EditorResult<String> {
    let media_type = media_type.trim().to_ascii_lowercase();
    if !media_type.starts_with("image/") {
        return Err(EditorError::UnsupportedMedia(media_type));
    }
    if bytes.is_empty() {
        return Err(EditorError::EmptyImage);
    }
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{media_type};base64,{encoded}"))
}

/// Whether a source is an inline `data:` URL.
#[must_use]
pub fn is_data_url(src: &str) -> bool {
    src.starts_with("data:")
}
