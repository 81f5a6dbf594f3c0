use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use rust_i18n::t;

use crate::{
    extractors::{CurrentIdentity, IsHtmx, Locale, SessionToken},
    models::DocumentUpload,
    names,
    rejections::AppError,
    services::quiz::{DocumentForm, SubmitOutcome},
    session::ViewKind,
    views::{
        self,
        document as document_views,
        viewer::{self, Notice, PanelData},
        Chrome,
    },
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::DOCUMENT_QUIZ_URL, get(document_page))
        .route(names::DOCUMENT_GENERATE_URL, post(generate))
}

async fn document_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    CurrentIdentity(identity): CurrentIdentity,
    SessionToken(token): SessionToken,
) -> maud::Markup {
    let session = match &token {
        Some(token) => state.sessions.get(token, ViewKind::Document).await,
        None => None,
    };

    views::render(
        is_htmx,
        "Document Quiz",
        document_views::page(&PanelData::new(ViewKind::Document, session), &locale),
        Chrome {
            locale: &locale,
            identity: identity.as_ref().map(|i| i.as_str()),
        },
    )
}

/// Splits the multipart body into the form fields and the uploaded file.
/// A file part without a name or without content counts as no file.
async fn read_submission(
    mut multipart: Multipart,
) -> Result<(DocumentForm, Option<DocumentUpload>), MultipartError> {
    let mut form = DocumentForm::default();
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    upload = Some(DocumentUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "question_type" => form.question_type = field.text().await?,
            "num_questions" => form.num_questions = field.text().await?,
            other => tracing::debug!("ignoring multipart field '{other}'"),
        }
    }

    Ok((form, upload))
}

async fn generate(
    State(state): State<AppState>,
    Locale(locale): Locale,
    CurrentIdentity(identity): CurrentIdentity,
    SessionToken(token): SessionToken,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (token, headers) = super::session_token(token, state.secure_cookies)?;

    let (form, upload) = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!("could not read document upload: {e}");
            state.sessions.clear(&token, ViewKind::Document).await;
            let panel = PanelData {
                view: ViewKind::Document,
                session: None,
                notice: Some(Notice::Error(
                    t!("error.upload_failed", locale = locale).to_string(),
                )),
            };
            return Ok((headers, viewer::panel(&panel, &locale)));
        }
    };

    if let Some(upload) = &upload {
        tracing::info!(
            "document quiz requested: '{}' ({} bytes, {} x {})",
            upload.file_name,
            upload.bytes.len(),
            form.num_questions,
            form.question_type
        );
    }
    let outcome = state
        .quiz
        .submit_document(&form, upload, identity.as_ref())
        .await;

    match &outcome {
        SubmitOutcome::Generated { session, .. } => {
            state
                .sessions
                .load(&token, ViewKind::Document, session.clone())
                .await
        }
        _ => state.sessions.clear(&token, ViewKind::Document).await,
    }

    let panel = PanelData::from_outcome(ViewKind::Document, outcome, &locale);
    Ok((headers, viewer::panel(&panel, &locale)))
}
