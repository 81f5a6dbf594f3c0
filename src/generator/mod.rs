//! Client side of the remote question-generation service.

mod adapter;
mod client;

pub use adapter::normalize;
pub use client::HttpGenerator;

use serde::Serialize;

use crate::models::{DocumentUpload, GeneratedQuestion};

/// JSON body of `POST /api/generate-questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRequest {
    pub topic: String,
    pub sub_topic: String,
    pub question_type: String,
    pub num_questions: String,
    pub email: String,
}

/// Multipart fields of `POST /api/upload-and-generate-questions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    pub file: DocumentUpload,
    pub question_type: String,
    pub num_questions: String,
    pub email: String,
}

/// Questions accepted from one response, plus the number of entries that
/// were dropped for lacking question or answer text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionBatch {
    pub questions: Vec<GeneratedQuestion>,
    pub rejected: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response. `message` is the JSON `message` field or the raw
    /// text body, depending on the endpoint.
    #[error("generation backend returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("response did not contain a questions array")]
    Malformed,
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        GenerationError::Transport(e.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait QuestionGenerator: Send + Sync {
    fn generate_from_topic(
        &self,
        request: &TopicRequest,
    ) -> impl std::future::Future<Output = Result<QuestionBatch, GenerationError>> + Send;

    fn generate_from_document(
        &self,
        request: &DocumentRequest,
    ) -> impl std::future::Future<Output = Result<QuestionBatch, GenerationError>> + Send;
}
