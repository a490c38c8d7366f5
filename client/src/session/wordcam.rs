//! Word-cam capture session.
//!
//! DESIGN
//! ======
//! [`WordCamSession::start`] uploads a capture for detection and validates
//! every returned bounding box up front, so later projection and crop
//! calls cannot hit malformed coordinates. The session owns the decoded
//! capture; box overlays are projected on demand for whatever layout the
//! caller currently has, and a hit test plus [`WordCamSession::select`]
//! drive which object a descriptor request is cropped to.

use overlay::geom::{ImageDimensions, LayoutRect, Point, ScreenBox, SourceBox};
use tracing::info;

use crate::media::crop::crop_to_box;
use crate::media::image::{LoadedImage, MediaError};
use crate::net::{ApiError, Backend};
use crate::state::LanguagePair;

/// Errors from the word-cam flow.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("backend error: {0}")]
    Api(#[from] ApiError),

    #[error("media error: {0}")]
    Media(#[from] MediaError),

    #[error("detection data error: {0}")]
    Wire(#[from] api::WireError),

    #[error("no object selected")]
    NoSelection,

    #[error("object index {index} out of range ({len} detected)")]
    BadIndex { index: usize, len: usize },
}

/// One capture, its detections, and the current selection.
pub struct WordCamSession {
    languages: LanguagePair,
    image: LoadedImage,
    detections: Vec<api::DetectedObject>,
    // Index-aligned with `detections`, validated at construction.
    boxes: Vec<SourceBox>,
    selected: Option<usize>,
}

impl WordCamSession {
    /// Upload a capture for detection and build the session around the result.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Api`] when the detection request fails and
    /// [`SessionError::Wire`] when any detection carries a malformed
    /// bounding box.
    pub async fn start(
        backend: &dyn Backend,
        languages: LanguagePair,
        image: LoadedImage,
    ) -> Result<Self, SessionError> {
        let request = api::DetectObjectsRequest {
            source_language: languages.source_language.clone(),
            target_language: languages.target_language.clone(),
            image: image.to_payload(),
            image_dimensions: image.dimensions(),
        };
        let response = backend.detect_objects(&request).await?;

        let detections = response.objects;
        let boxes = detections
            .iter()
            .map(api::DetectedObject::source_box)
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = detections.len(), "word-cam: capture analyzed");
        Ok(Self { languages, image, detections, boxes, selected: None })
    }

    /// Language pair the session was started with.
    #[must_use]
    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    /// The capture behind this session.
    #[must_use]
    pub fn image(&self) -> &LoadedImage {
        &self.image
    }

    /// Natural capture size in projection space.
    #[must_use]
    pub fn image_dimensions(&self) -> ImageDimensions {
        self.image.dimensions().to_overlay()
    }

    /// Detected objects, in backend order.
    #[must_use]
    pub fn detections(&self) -> &[api::DetectedObject] {
        &self.detections
    }

    /// Index of the selected detection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected detection, if any.
    #[must_use]
    pub fn selected_detection(&self) -> Option<&api::DetectedObject> {
        self.selected.map(|index| &self.detections[index])
    }

    /// Select the detection at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::BadIndex`] when `index` does not name a
    /// detection.
    pub fn select(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.detections.len() {
            return Err(SessionError::BadIndex { index, len: self.detections.len() });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Screen-space boxes for the current layout, index-aligned with
    /// [`WordCamSession::detections`]. Empty until a layout exists.
    #[must_use]
    pub fn overlay_boxes(&self, container: Option<LayoutRect>) -> Vec<ScreenBox> {
        overlay::project::overlay_boxes(&self.boxes, Some(self.image_dimensions()), container)
    }

    /// Index of the topmost detection under a point in global coordinates,
    /// or `None` when the point misses every box or no layout exists yet.
    #[must_use]
    pub fn object_at(&self, container: Option<LayoutRect>, global: Point) -> Option<usize> {
        let rect = container?;
        let boxes = self.overlay_boxes(Some(rect));
        overlay::hit::hit_test(&boxes, rect.to_local(global))
    }

    /// Crop the capture to the selected detection and request descriptors
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSelection`] without a selection,
    /// [`SessionError::Media`] when the crop fails, and
    /// [`SessionError::Api`] when the backend request fails.
    pub async fn describe_selected(
        &self,
        backend: &dyn Backend,
    ) -> Result<api::DescriptorsResponse, SessionError> {
        let index = self.selected.ok_or(SessionError::NoSelection)?;
        let detection = &self.detections[index];

        let crop = crop_to_box(&self.image, self.boxes[index])?;
        info!(
            object = %detection.name,
            crop_width = crop.width,
            crop_height = crop.height,
            "word-cam: describing selected object"
        );

        let request = api::ObjectDescriptorsRequest {
            source_language: self.languages.source_language.clone(),
            target_language: self.languages.target_language.clone(),
            object: detection.name.clone(),
            image: crop.to_payload(),
        };
        Ok(backend.object_descriptors(&request).await?)
    }
}

#[cfg(test)]
#[path = "wordcam_test.rs"]
mod tests;
