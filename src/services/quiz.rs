use serde::Deserialize;

use crate::{
    catalog,
    generator::{
        DocumentRequest, GenerationError, HttpGenerator, QuestionBatch, QuestionGenerator,
        TopicRequest,
    },
    models::{DocumentUpload, Identity, QuestionCount, QuestionType},
    session::QuizSession,
};

// ---------------------------------------------------------------------------
// Form input
// ---------------------------------------------------------------------------

/// Field values of the topic quiz form, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TopicForm {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub sub_topic: String,
    #[serde(default)]
    pub question_type: String,
    #[serde(default)]
    pub num_questions: String,
}

impl TopicForm {
    pub fn is_complete(&self) -> bool {
        !(self.topic.is_empty()
            || self.sub_topic.is_empty()
            || self.question_type.is_empty()
            || self.num_questions.is_empty())
    }
}

/// Non-file fields of the document quiz form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentForm {
    #[serde(default)]
    pub question_type: String,
    #[serde(default)]
    pub num_questions: String,
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A new session; `skipped` entries of the response were malformed.
    Generated { session: QuizSession, skipped: usize },
    /// The backend answered with no usable questions.
    NoQuestions { skipped: usize },
    /// A required field was empty. No request was sent.
    MissingFields,
    /// A field held a value outside its allowed set. No request was sent.
    InvalidSelection,
    /// The uploaded file type is not accepted. No request was sent.
    UnsupportedFile,
    /// No identifier was supplied. No request was sent.
    MissingIdentity,
    Failed(GenerationError),
}

impl From<Result<QuestionBatch, GenerationError>> for SubmitOutcome {
    fn from(result: Result<QuestionBatch, GenerationError>) -> Self {
        match result {
            Ok(batch) => match QuizSession::new(batch.questions) {
                Some(session) => SubmitOutcome::Generated {
                    session,
                    skipped: batch.rejected,
                },
                None => SubmitOutcome::NoQuestions {
                    skipped: batch.rejected,
                },
            },
            Err(e) => {
                tracing::warn!("question generation failed: {e}");
                SubmitOutcome::Failed(e)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// QuizService
// ---------------------------------------------------------------------------

pub struct QuizService<G: QuestionGenerator = HttpGenerator> {
    generator: G,
}

impl<G: QuestionGenerator + Clone> Clone for QuizService<G> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
        }
    }
}

impl<G: QuestionGenerator> QuizService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Validates the topic form and, given an identity, requests questions.
    pub async fn submit_topic(&self, form: &TopicForm, identity: Option<&Identity>) -> SubmitOutcome {
        if !form.is_complete() {
            return SubmitOutcome::MissingFields;
        }

        let (Some(question_type), Some(count)) = (
            QuestionType::parse(&form.question_type),
            QuestionCount::parse(&form.num_questions),
        ) else {
            return SubmitOutcome::InvalidSelection;
        };

        if !catalog::contains(&form.topic, &form.sub_topic) {
            tracing::warn!("unknown subtopic '{}' for '{}'", form.sub_topic, form.topic);
            return SubmitOutcome::InvalidSelection;
        }

        let Some(identity) = identity else {
            tracing::warn!("topic quiz submitted without an identity");
            return SubmitOutcome::MissingIdentity;
        };

        let request = TopicRequest {
            topic: form.topic.clone(),
            sub_topic: form.sub_topic.clone(),
            question_type: question_type.as_str().to_string(),
            num_questions: count.to_string(),
            email: identity.as_str().to_string(),
        };

        self.generator.generate_from_topic(&request).await.into()
    }

    /// Validates the document form and upload and, given an identity,
    /// uploads the document for question generation.
    pub async fn submit_document(
        &self,
        form: &DocumentForm,
        upload: Option<DocumentUpload>,
        identity: Option<&Identity>,
    ) -> SubmitOutcome {
        let upload = match upload {
            Some(upload) if !upload.bytes.is_empty() => upload,
            _ => return SubmitOutcome::MissingFields,
        };
        if form.question_type.is_empty() || form.num_questions.is_empty() {
            return SubmitOutcome::MissingFields;
        }

        if !upload.is_supported() {
            tracing::warn!("rejected upload '{}'", upload.file_name);
            return SubmitOutcome::UnsupportedFile;
        }

        let (Some(question_type), Some(count)) = (
            QuestionType::parse(&form.question_type),
            QuestionCount::parse(&form.num_questions),
        ) else {
            return SubmitOutcome::InvalidSelection;
        };

        let Some(identity) = identity else {
            tracing::warn!("document quiz submitted without an identity");
            return SubmitOutcome::MissingIdentity;
        };

        let request = DocumentRequest {
            file: upload,
            question_type: question_type.as_str().to_string(),
            num_questions: count.to_string(),
            email: identity.as_str().to_string(),
        };

        self.generator.generate_from_document(&request).await.into()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::generator::MockQuestionGenerator;
    use crate::models::GeneratedQuestion;

    fn identity() -> Identity {
        Identity::parse("student@example.com").unwrap()
    }

    fn topic_form() -> TopicForm {
        TopicForm {
            topic: "OS".to_string(),
            sub_topic: "Threads".to_string(),
            question_type: "mcq".to_string(),
            num_questions: "3".to_string(),
        }
    }

    fn document_form() -> DocumentForm {
        DocumentForm {
            question_type: "short_qa".to_string(),
            num_questions: "2".to_string(),
        }
    }

    fn upload(name: &str) -> DocumentUpload {
        DocumentUpload {
            file_name: name.to_string(),
            content_type: None,
            bytes: b"some text".to_vec(),
        }
    }

    fn batch(n: usize, rejected: usize) -> QuestionBatch {
        QuestionBatch {
            questions: (1..=n)
                .map(|i| GeneratedQuestion {
                    question: format!("Q{i}"),
                    answer: format!("A{i}"),
                    context: None,
                    question_type: None,
                })
                .collect(),
            rejected,
        }
    }

    fn untouched() -> MockQuestionGenerator {
        let mut mock = MockQuestionGenerator::new();
        mock.expect_generate_from_topic().never();
        mock.expect_generate_from_document().never();
        mock
    }

    // ----- topic view -----

    #[tokio::test]
    async fn topic_success_builds_session_at_first_question() {
        let mut mock = MockQuestionGenerator::new();
        mock.expect_generate_from_topic()
            .withf(|req| {
                req.topic == "OS"
                    && req.sub_topic == "Threads"
                    && req.question_type == "mcq"
                    && req.num_questions == "3"
                    && req.email == "student@example.com"
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(batch(3, 0)) }));

        let svc = QuizService::new(mock);
        let outcome = svc.submit_topic(&topic_form(), Some(&identity())).await;

        let (session, skipped) = match outcome {
            SubmitOutcome::Generated { session, skipped } => (session, skipped),
            other => panic!("expected a session, got {other:?}"),
        };
        assert_eq!(skipped, 0);
        assert_eq!(session.len(), 3);
        assert_eq!(session.index(), 0);
        assert!(!session.is_answer_shown());
        assert_eq!(session.current().question, "Q1");
    }

    #[tokio::test]
    async fn topic_with_any_empty_field_never_calls_backend() {
        let blanks: [fn(&mut TopicForm); 4] = [
            |f| f.topic.clear(),
            |f| f.sub_topic.clear(),
            |f| f.question_type.clear(),
            |f| f.num_questions.clear(),
        ];

        for blank in blanks {
            let mut form = topic_form();
            blank(&mut form);
            let svc = QuizService::new(untouched());
            let outcome = svc.submit_topic(&form, Some(&identity())).await;
            assert!(matches!(outcome, SubmitOutcome::MissingFields));
        }
    }

    #[tokio::test]
    async fn topic_without_identity_never_calls_backend() {
        let svc = QuizService::new(untouched());
        let outcome = svc.submit_topic(&topic_form(), None).await;
        assert!(matches!(outcome, SubmitOutcome::MissingIdentity));
    }

    #[tokio::test]
    async fn topic_with_foreign_subtopic_is_invalid() {
        let mut form = topic_form();
        form.sub_topic = "ER Model".to_string();

        let svc = QuizService::new(untouched());
        let outcome = svc.submit_topic(&form, Some(&identity())).await;
        assert!(matches!(outcome, SubmitOutcome::InvalidSelection));
    }

    #[tokio::test]
    async fn topic_with_out_of_range_count_is_invalid() {
        let mut form = topic_form();
        form.num_questions = "9".to_string();

        let svc = QuizService::new(untouched());
        let outcome = svc.submit_topic(&form, Some(&identity())).await;
        assert!(matches!(outcome, SubmitOutcome::InvalidSelection));
    }

    #[tokio::test]
    async fn topic_server_failure_is_reported() {
        let mut mock = MockQuestionGenerator::new();
        mock.expect_generate_from_topic().times(1).returning(|_| {
            Box::pin(async {
                Err(GenerationError::Server {
                    status: 500,
                    message: "bad input".to_string(),
                })
            })
        });

        let svc = QuizService::new(mock);
        let outcome = svc.submit_topic(&topic_form(), Some(&identity())).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(GenerationError::Server { ref message, .. }) if message == "bad input"
        ));
    }

    #[tokio::test]
    async fn empty_batch_yields_no_questions() {
        let mut mock = MockQuestionGenerator::new();
        mock.expect_generate_from_topic()
            .returning(|_| Box::pin(async { Ok(batch(0, 2)) }));

        let svc = QuizService::new(mock);
        let outcome = svc.submit_topic(&topic_form(), Some(&identity())).await;

        assert!(matches!(outcome, SubmitOutcome::NoQuestions { skipped: 2 }));
    }

    // ----- document view -----

    #[tokio::test]
    async fn document_success_reports_skipped_entries() {
        let mut mock = MockQuestionGenerator::new();
        mock.expect_generate_from_document()
            .withf(|req| {
                req.file.file_name == "notes.pdf"
                    && req.question_type == "short_qa"
                    && req.num_questions == "2"
                    && req.email == "student@example.com"
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(batch(2, 1)) }));

        let svc = QuizService::new(mock);
        let outcome = svc
            .submit_document(&document_form(), Some(upload("notes.pdf")), Some(&identity()))
            .await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Generated { ref session, skipped: 1 } if session.len() == 2
        ));
    }

    #[tokio::test]
    async fn document_without_file_never_calls_backend() {
        let svc = QuizService::new(untouched());

        let outcome = svc
            .submit_document(&document_form(), None, Some(&identity()))
            .await;
        assert!(matches!(outcome, SubmitOutcome::MissingFields));

        let mut empty = upload("notes.txt");
        empty.bytes.clear();
        let outcome = svc
            .submit_document(&document_form(), Some(empty), Some(&identity()))
            .await;
        assert!(matches!(outcome, SubmitOutcome::MissingFields));
    }

    #[tokio::test]
    async fn document_with_empty_fields_never_calls_backend() {
        let svc = QuizService::new(untouched());
        let form = DocumentForm {
            question_type: String::new(),
            num_questions: "2".to_string(),
        };

        let outcome = svc
            .submit_document(&form, Some(upload("notes.txt")), Some(&identity()))
            .await;
        assert!(matches!(outcome, SubmitOutcome::MissingFields));
    }

    #[tokio::test]
    async fn document_with_unsupported_extension_is_rejected() {
        let svc = QuizService::new(untouched());
        let outcome = svc
            .submit_document(&document_form(), Some(upload("slides.pptx")), Some(&identity()))
            .await;
        assert!(matches!(outcome, SubmitOutcome::UnsupportedFile));
    }

    #[tokio::test]
    async fn document_without_identity_never_calls_backend() {
        let svc = QuizService::new(untouched());
        let outcome = svc
            .submit_document(&document_form(), Some(upload("notes.txt")), None)
            .await;
        assert!(matches!(outcome, SubmitOutcome::MissingIdentity));
    }

    #[tokio::test]
    async fn document_transport_failure_is_reported() {
        let mut mock = MockQuestionGenerator::new();
        mock.expect_generate_from_document().times(1).returning(|_| {
            Box::pin(async { Err(GenerationError::Transport("connection refused".to_string())) })
        });

        let svc = QuizService::new(mock);
        let outcome = svc
            .submit_document(&document_form(), Some(upload("notes.docx")), Some(&identity()))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed(GenerationError::Transport(_))));
    }
}
