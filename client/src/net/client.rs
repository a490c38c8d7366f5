//! Concrete HTTP client for the lesson-generation backend.
//!
//! Thin reqwest wrapper over the five POST endpoints. Each call is one
//! JSON-in/JSON-out exchange with no retry loop; callers inspect
//! [`ApiError::retryable`] and re-invoke if they want another attempt.
//! Response handling is split into pure functions for testability.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use api::{
    ConversationRequest, ConversationResponse, DescriptorsResponse, DetectObjectsRequest,
    DetectObjectsResponse, GrammarResponse, LessonRequest, LessonResponse,
    ObjectDescriptorsRequest,
};

use super::config::BackendConfig;
use super::types::{ApiError, Backend};

// =============================================================================
// CLIENT
// =============================================================================

pub struct LessonsClient {
    http: reqwest::Client,
    base_url: String,
}

impl LessonsClient {
    /// Build a client from resolved config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }

    /// Backend origin this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, ApiError> {
        info!(path, "backend: request dispatched");
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if status != 200 {
            warn!(path, status, "backend: error status");
            return Err(ApiError::Status { status, message: error_message(&text) });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Backend for LessonsClient {
    async fn lesson(&self, request: &LessonRequest) -> Result<LessonResponse, ApiError> {
        let text = self.send_json(api::TERMS_PATH, request).await?;
        parse_body(&text)
    }

    async fn grammar(&self, request: &LessonRequest) -> Result<GrammarResponse, ApiError> {
        let text = self.send_json(api::GRAMMAR_PATH, request).await?;
        parse_body(&text)
    }

    async fn conversation(
        &self,
        request: &ConversationRequest,
    ) -> Result<ConversationResponse, ApiError> {
        let text = self.send_json(api::CONVERSATION_PATH, request).await?;
        parse_body(&text)
    }

    async fn object_descriptors(
        &self,
        request: &ObjectDescriptorsRequest,
    ) -> Result<DescriptorsResponse, ApiError> {
        let text = self.send_json(api::OBJECT_DESCRIPTORS_PATH, request).await?;
        parse_body(&text)
    }

    async fn detect_objects(
        &self,
        request: &DetectObjectsRequest,
    ) -> Result<DetectObjectsResponse, ApiError> {
        let text = self.send_json(api::DETECT_OBJECTS_PATH, request).await?;
        parse_body(&text)
    }
}

// =============================================================================
// RESPONSE HANDLING
// =============================================================================

fn parse_body<T: DeserializeOwned>(json: &str) -> Result<T, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull the message out of a `{"error": ...}` body, falling back to the raw
/// body for anything else (proxies and crashes don't speak our shape).
fn error_message(body: &str) -> String {
    serde_json::from_str::<api::ErrorBody>(body).map_or_else(|_| body.to_string(), |parsed| parsed.error)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
