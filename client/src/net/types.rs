//! Backend error surface and the mockable request trait.

use api::{
    ConversationRequest, ConversationResponse, DescriptorsResponse, DetectObjectsRequest,
    DetectObjectsResponse, GrammarResponse, LessonRequest, LessonResponse,
    ObjectDescriptorsRequest,
};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend request operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request failed before a response arrived (connect, timeout, DNS).
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether retrying the same request may succeed. Transport failures and
    /// throttling/server statuses qualify; everything else is deterministic.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Async trait over the five backend endpoints. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Request vocabulary and phrases for a purpose.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the backend reports an
    /// error status, or the response body is malformed.
    async fn lesson(&self, request: &LessonRequest) -> Result<LessonResponse, ApiError>;

    /// Request grammar topics for a purpose.
    ///
    /// # Errors
    ///
    /// See [`Backend::lesson`].
    async fn grammar(&self, request: &LessonRequest) -> Result<GrammarResponse, ApiError>;

    /// Request a generated slang dialogue.
    ///
    /// # Errors
    ///
    /// See [`Backend::lesson`].
    async fn conversation(
        &self,
        request: &ConversationRequest,
    ) -> Result<ConversationResponse, ApiError>;

    /// Request descriptors for one object in an image.
    ///
    /// # Errors
    ///
    /// See [`Backend::lesson`].
    async fn object_descriptors(
        &self,
        request: &ObjectDescriptorsRequest,
    ) -> Result<DescriptorsResponse, ApiError>;

    /// Request object detection over an image.
    ///
    /// # Errors
    ///
    /// See [`Backend::lesson`].
    async fn detect_objects(
        &self,
        request: &DetectObjectsRequest,
    ) -> Result<DetectObjectsResponse, ApiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
