//! Detection-box cropping.
//!
//! DESIGN
//! ======
//! Descriptor requests should carry only the object the user tapped, so
//! the region under the detection box is cut out of the capture and
//! re-encoded as PNG. Box coordinates arrive as floats in source-image
//! pixels; they are rounded and clamped to the image bounds before the
//! cut, and a box that leaves no pixels inside the image is an error
//! rather than a silent full-frame upload.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use overlay::geom::SourceBox;

use super::image::{LoadedImage, MediaError};

/// A cropped region of a capture, re-encoded as PNG.
pub struct CroppedImage {
    /// Encoded PNG bytes.
    pub bytes: Vec<u8>,
    /// Crop width in source pixels.
    pub width: u32,
    /// Crop height in source pixels.
    pub height: u32,
}

impl CroppedImage {
    /// Crops are always re-encoded, so the MIME type is fixed.
    pub const MIME_TYPE: &'static str = "image/png";

    /// PNG bytes encoded as base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Inline-data payload for descriptor requests.
    #[must_use]
    pub fn to_payload(&self) -> api::ImagePayload {
        api::ImagePayload::new(self.to_base64(), Self::MIME_TYPE.to_string())
    }
}

/// Cut the region under a detection box out of `source`.
///
/// # Errors
///
/// Returns [`MediaError::EmptyCrop`] if the clamped box covers no pixels
/// and [`MediaError::Encode`] if the PNG encoder fails.
pub fn crop_to_box(source: &LoadedImage, source_box: SourceBox) -> Result<CroppedImage, MediaError> {
    let max_x = f64::from(source.width());
    let max_y = f64::from(source.height());

    let x1 = source_box.x1.round().clamp(0.0, max_x) as u32;
    let y1 = source_box.y1.round().clamp(0.0, max_y) as u32;
    let x2 = source_box.x2.round().clamp(0.0, max_x) as u32;
    let y2 = source_box.y2.round().clamp(0.0, max_y) as u32;

    if x2 <= x1 || y2 <= y1 {
        return Err(MediaError::EmptyCrop);
    }
    let width = x2 - x1;
    let height = y2 - y1;

    let cropped = source.decoded().crop_imm(x1, y1, width, height);
    let mut bytes = Vec::new();
    cropped
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| MediaError::Encode(e.to_string()))?;

    Ok(CroppedImage { bytes, width, height })
}

#[cfg(test)]
#[path = "crop_test.rs"]
mod tests;
