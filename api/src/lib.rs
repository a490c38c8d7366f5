//! Wire DTOs for the lesson-generation backend.
//!
//! This crate owns the JSON request/response shapes shared by the `client`
//! library and the CLI. Field names follow the backend's camelCase JSON;
//! everything here is plain serde data with no transport logic, so the
//! shapes stay testable without a network.

use serde::{Deserialize, Deserializer, Serialize};

use overlay::geom::SourceBox;

/// Error returned by accessors that validate wire data.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A bounding box arrived with the wrong number of coordinates.
    #[error("expected 4 bounding-box coordinates, got {0}")]
    BadBoxLength(usize),
}

// =============================================================================
// ENDPOINT PATHS
// =============================================================================

/// POST: vocabulary and phrases for a purpose.
pub const TERMS_PATH: &str = "/terms";
/// POST: grammar topics for a purpose.
pub const GRAMMAR_PATH: &str = "/grammar";
/// POST: a slang dialogue between two speakers.
pub const CONVERSATION_PATH: &str = "/conversation";
/// POST: descriptors for one object in an image.
pub const OBJECT_DESCRIPTORS_PATH: &str = "/object-descriptors";
/// POST: objects detected in an image.
pub const DETECT_OBJECTS_PATH: &str = "/detect-objects";

// =============================================================================
// SHARED PAYLOAD TYPES
// =============================================================================

/// Base64 image content and its MIME type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// Base64-encoded image bytes, without any data-URL prefix.
    pub data: String,
    /// MIME type of the encoded image, e.g. `"image/jpeg"`.
    pub mime_type: String,
}

/// Envelope the backend expects around inline image data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub inline_data: InlineData,
}

impl ImagePayload {
    #[must_use]
    pub fn new(data: String, mime_type: String) -> Self {
        Self { inline_data: InlineData { data, mime_type } }
    }
}

/// Natural pixel size of a captured image, as integer wire data.
///
/// The `overlay` crate has its own float `ImageDimensions` for projection
/// math; [`ImageDimensions::to_overlay`] bridges the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    #[must_use]
    pub fn to_overlay(self) -> overlay::geom::ImageDimensions {
        overlay::geom::ImageDimensions::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Error body returned by the backend on any non-success response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Request body for [`TERMS_PATH`] and [`GRAMMAR_PATH`].
///
/// Languages are BCP 47 tags, e.g. `"en-US"` / `"es"`. `purpose` is
/// free-form text describing the situation the user is preparing for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRequest {
    pub source_language: String,
    pub target_language: String,
    pub purpose: String,
}

/// Request body for [`CONVERSATION_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    pub source_language: String,
    pub target_language: String,
}

/// Request body for [`OBJECT_DESCRIPTORS_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDescriptorsRequest {
    pub source_language: String,
    pub target_language: String,
    /// Name of the object to describe, as returned by detection.
    pub object: String,
    /// Image cropped to the object in question.
    pub image: ImagePayload,
}

/// Request body for [`DETECT_OBJECTS_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectObjectsRequest {
    pub source_language: String,
    pub target_language: String,
    pub image: ImagePayload,
    /// Pixel size of `image`, so detection coordinates come back in a known
    /// space.
    pub image_dimensions: ImageDimensions,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// One vocabulary entry in a lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// The term in the target language.
    pub term: String,
    /// Latin-script reading for non-Latin scripts; empty when not needed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transliteration: String,
    /// Translation or explanation in the source language.
    pub translation: String,
}

/// One useful phrase in a lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// The phrase in the target language.
    pub phrase: String,
    /// Latin-script reading for non-Latin scripts; empty when not needed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transliteration: String,
    /// Translation or explanation in the source language.
    pub translation: String,
}

/// Response body for [`TERMS_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonResponse {
    pub vocabulary: Vec<Term>,
    pub phrases: Vec<Phrase>,
}

/// One example sentence under a grammar topic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrammarExample {
    pub sentence: String,
    pub explanation: String,
}

/// One grammar topic relevant to the requested purpose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrammarTopic {
    pub topic: String,
    pub description: String,
    pub examples: Vec<GrammarExample>,
}

/// Response body for [`GRAMMAR_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarResponse {
    pub relevant_grammar: Vec<GrammarTopic>,
}

/// One line of generated dialogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    /// The spoken line, containing slang or idiomatic expressions.
    pub message: String,
    /// Notes explaining the slang or idioms used.
    pub notes: String,
}

/// Response body for [`CONVERSATION_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationResponse {
    /// The conversational setting the dialogue takes place in.
    pub context: String,
    pub dialogue: Vec<DialogueLine>,
}

/// One descriptive word or phrase for an object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub descriptor: String,
    pub example_sentence: String,
}

/// Response body for [`OBJECT_DESCRIPTORS_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DescriptorsResponse {
    pub descriptors: Vec<Descriptor>,
}

/// One detected object with its translation metadata and bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    /// Object name in the target language.
    pub name: String,
    /// Spoken reading of `name`; empty when the backend has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pronunciation: String,
    /// Object name translated into the source language.
    pub translation: String,
    /// Bounding box `[x1, y1, x2, y2]` in natural-image pixels.
    pub coordinates: Vec<f64>,
}

impl DetectedObject {
    /// Typed bounding box for projection.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BadBoxLength`] when the wire array does not hold
    /// exactly four coordinates.
    pub fn source_box(&self) -> Result<SourceBox, WireError> {
        match self.coordinates.as_slice() {
            &[x1, y1, x2, y2] => Ok(SourceBox::new(x1, y1, x2, y2)),
            other => Err(WireError::BadBoxLength(other.len())),
        }
    }
}

/// Response body for [`DETECT_OBJECTS_PATH`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectObjectsResponse {
    pub objects: Vec<DetectedObject>,
}

/// The backend models optional text fields as nullable with an empty-string
/// default; fold both absent and `null` into `""` on our side.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
