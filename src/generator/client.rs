use std::time::Duration;

use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::Deserialize;

use super::{
    normalize, DocumentRequest, GenerationError, QuestionBatch, QuestionGenerator, TopicRequest,
};
use crate::names;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// [`QuestionGenerator`] backed by the generation service's HTTP API.
#[derive(Clone)]
pub struct HttpGenerator {
    client: Client,
    base_url: String,
}

impl HttpGenerator {
    pub fn new(base_url: &str, request_timeout: Duration) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn success_body(resp: Response) -> Result<QuestionBatch, GenerationError> {
    let body = resp.bytes().await?;
    normalize(&body)
}

impl QuestionGenerator for HttpGenerator {
    async fn generate_from_topic(
        &self,
        request: &TopicRequest,
    ) -> Result<QuestionBatch, GenerationError> {
        tracing::info!(
            "requesting {} {} questions on {}/{}",
            request.num_questions,
            request.question_type,
            request.topic,
            request.sub_topic
        );

        let resp = self
            .client
            .post(self.url(names::GENERATE_QUESTIONS_PATH))
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("generation backend error: {status} - {text}");
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_default();
            return Err(GenerationError::Server {
                status: status.as_u16(),
                message,
            });
        }

        success_body(resp).await
    }

    async fn generate_from_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<QuestionBatch, GenerationError> {
        tracing::info!(
            "uploading '{}' ({} bytes) for {} {} questions",
            request.file.file_name,
            request.file.bytes.len(),
            request.num_questions,
            request.question_type
        );

        let mut file =
            Part::bytes(request.file.bytes.clone()).file_name(request.file.file_name.clone());
        if let Some(content_type) = &request.file.content_type {
            file = file.mime_str(content_type)?;
        }

        let form = Form::new()
            .part("file", file)
            .text("questionType", request.question_type.clone())
            .text("numQuestions", request.num_questions.clone())
            .text("email", request.email.clone());

        let resp = self
            .client
            .post(self.url(names::UPLOAD_AND_GENERATE_PATH))
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp.text().await.unwrap_or_default();
            tracing::error!("generation backend error: {status} - {message}");
            return Err(GenerationError::Server {
                status: status.as_u16(),
                message,
            });
        }

        success_body(resp).await
    }
}
