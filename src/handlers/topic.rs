use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    catalog,
    extractors::{CurrentIdentity, IsHtmx, Locale, SessionToken},
    names,
    rejections::AppError,
    services::quiz::{SubmitOutcome, TopicForm},
    session::ViewKind,
    views::{
        self,
        topic as topic_views,
        viewer::{self, PanelData},
        Chrome,
    },
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::TOPIC_QUIZ_URL, get(topic_page))
        .route(names::TOPIC_FORM_URL, get(topic_form))
        .route(names::TOPIC_GENERATE_URL, post(generate))
}

async fn topic_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    CurrentIdentity(identity): CurrentIdentity,
    SessionToken(token): SessionToken,
) -> maud::Markup {
    let session = match &token {
        Some(token) => state.sessions.get(token, ViewKind::Topic).await,
        None => None,
    };

    views::render(
        is_htmx,
        "Topic Quiz",
        topic_views::page(
            &TopicForm::default(),
            &PanelData::new(ViewKind::Topic, session),
            &locale,
        ),
        Chrome {
            locale: &locale,
            identity: identity.as_ref().map(|i| i.as_str()),
        },
    )
}

#[derive(Deserialize)]
struct FormQuery {
    #[serde(default)]
    previous_topic: String,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    sub_topic: String,
    #[serde(default)]
    question_type: String,
    #[serde(default)]
    num_questions: String,
}

impl FormQuery {
    /// Current selection, with the subtopic reset whenever the topic changed
    /// or it does not belong to the selected topic.
    fn into_form(self) -> TopicForm {
        let sub_topic = if self.topic == self.previous_topic
            && catalog::contains(&self.topic, &self.sub_topic)
        {
            self.sub_topic
        } else {
            String::new()
        };

        TopicForm {
            topic: self.topic,
            sub_topic,
            question_type: self.question_type,
            num_questions: self.num_questions,
        }
    }
}

async fn topic_form(Locale(locale): Locale, Query(query): Query<FormQuery>) -> maud::Markup {
    topic_views::form(&query.into_form(), &locale)
}

async fn generate(
    State(state): State<AppState>,
    Locale(locale): Locale,
    CurrentIdentity(identity): CurrentIdentity,
    SessionToken(token): SessionToken,
    Form(form): Form<TopicForm>,
) -> Result<impl IntoResponse, AppError> {
    let (token, headers) = super::session_token(token, state.secure_cookies)?;

    tracing::info!(
        "topic quiz requested: {} / {} ({} x {})",
        form.topic,
        form.sub_topic,
        form.num_questions,
        form.question_type
    );
    let outcome = state.quiz.submit_topic(&form, identity.as_ref()).await;

    match &outcome {
        SubmitOutcome::Generated { session, .. } => {
            state
                .sessions
                .load(&token, ViewKind::Topic, session.clone())
                .await
        }
        _ => state.sessions.clear(&token, ViewKind::Topic).await,
    }

    let panel = PanelData::from_outcome(ViewKind::Topic, outcome, &locale);
    Ok((headers, viewer::panel(&panel, &locale)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(previous: &str, topic: &str, sub_topic: &str) -> FormQuery {
        FormQuery {
            previous_topic: previous.to_string(),
            topic: topic.to_string(),
            sub_topic: sub_topic.to_string(),
            question_type: "mcq".to_string(),
            num_questions: "2".to_string(),
        }
    }

    #[test]
    fn changing_topic_resets_subtopic() {
        let form = query("OS", "DBMS", "Threads").into_form();
        assert_eq!(form.topic, "DBMS");
        assert!(form.sub_topic.is_empty());
        assert_eq!(form.question_type, "mcq");
    }

    #[test]
    fn same_topic_keeps_subtopic() {
        let form = query("OS", "OS", "Threads").into_form();
        assert_eq!(form.sub_topic, "Threads");
    }

    #[test]
    fn unknown_subtopic_is_dropped() {
        let form = query("OS", "OS", "ER Model").into_form();
        assert!(form.sub_topic.is_empty());
    }
}
