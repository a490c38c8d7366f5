//! Capture loading and payload encoding.
//!
//! DESIGN
//! ======
//! A [`LoadedImage`] keeps both forms the rest of the client needs: the
//! decoded pixels for cropping and dimension queries, and the original
//! encoded bytes so the detection request uploads exactly what was
//! captured instead of a lossy re-encode.

use std::io;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Errors from loading, decoding, or encoding captures.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read image file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("detection box lies outside the image")]
    EmptyCrop,
}

/// MIME type for a file extension, lowercased before matching.
///
/// Unknown extensions fall back to `application/octet-stream` so the
/// payload still round-trips even if the backend cannot preview it.
#[must_use]
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// MIME type for a path, from its extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or("application/octet-stream", mime_for_extension)
}

/// A decoded capture plus its original encoded bytes.
pub struct LoadedImage {
    image: image::DynamicImage,
    bytes: Vec<u8>,
    mime_type: &'static str,
}

impl LoadedImage {
    /// Read and decode an image file.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Io`] if the file cannot be read and
    /// [`MediaError::Decode`] if the bytes are not a supported image.
    pub fn from_path(path: &Path) -> Result<Self, MediaError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes, mime_for_path(path))
    }

    /// Decode already-read image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::Decode`] if the bytes are not a supported image.
    pub fn from_bytes(bytes: Vec<u8>, mime_type: &'static str) -> Result<Self, MediaError> {
        let image =
            image::load_from_memory(&bytes).map_err(|e| MediaError::Decode(e.to_string()))?;
        Ok(Self { image, bytes, mime_type })
    }

    /// Pixel width of the decoded image.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height of the decoded image.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Natural dimensions in the wire shape detection requests carry.
    #[must_use]
    pub fn dimensions(&self) -> api::ImageDimensions {
        api::ImageDimensions { width: self.width(), height: self.height() }
    }

    /// MIME type the bytes were loaded as.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub(crate) fn decoded(&self) -> &image::DynamicImage {
        &self.image
    }

    /// Original bytes encoded as base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Data URL form, for UIs that render the capture inline.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    /// Inline-data payload for detection requests.
    #[must_use]
    pub fn to_payload(&self) -> api::ImagePayload {
        api::ImagePayload::new(self.to_base64(), self.mime_type.to_string())
    }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
