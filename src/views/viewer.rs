use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    generator::GenerationError,
    models::QuestionType,
    names,
    services::quiz::SubmitOutcome,
    session::{QuizSession, Transition, ViewKind},
    views::components,
};

/// Inline message shown above the viewer.
pub enum Notice {
    Error(String),
    Skipped(usize),
}

pub struct PanelData {
    pub view: ViewKind,
    pub session: Option<QuizSession>,
    pub notice: Option<Notice>,
}

impl PanelData {
    pub fn new(view: ViewKind, session: Option<QuizSession>) -> Self {
        Self {
            view,
            session,
            notice: None,
        }
    }

    /// Panel contents after a submit: the new session (if any) and the
    /// message describing the outcome.
    pub fn from_outcome(view: ViewKind, outcome: SubmitOutcome, locale: &str) -> Self {
        let notice = outcome_notice(view, &outcome, locale);
        let session = match outcome {
            SubmitOutcome::Generated { session, .. } => Some(session),
            _ => None,
        };
        Self {
            view,
            session,
            notice,
        }
    }
}

pub fn outcome_notice(view: ViewKind, outcome: &SubmitOutcome, locale: &str) -> Option<Notice> {
    let error = match outcome {
        SubmitOutcome::Generated { skipped: 0, .. } | SubmitOutcome::NoQuestions { skipped: 0 } => {
            return None
        }
        SubmitOutcome::Generated { skipped, .. } | SubmitOutcome::NoQuestions { skipped } => {
            return Some(Notice::Skipped(*skipped))
        }
        SubmitOutcome::MissingFields => match view {
            ViewKind::Topic => t!("error.missing_fields_topic", locale = locale),
            ViewKind::Document => t!("error.missing_fields_document", locale = locale),
        },
        SubmitOutcome::InvalidSelection => t!("error.invalid_selection", locale = locale),
        SubmitOutcome::UnsupportedFile => t!(
            "error.unsupported_file",
            types = names::DOCUMENT_ACCEPT_ATTR,
            locale = locale
        ),
        SubmitOutcome::MissingIdentity => t!("error.missing_identity", locale = locale),
        SubmitOutcome::Failed(GenerationError::Transport(detail)) => {
            t!("error.transport", detail = detail, locale = locale)
        }
        SubmitOutcome::Failed(GenerationError::Server { message, .. }) => match view {
            ViewKind::Topic if message.is_empty() => t!("error.server_generic", locale = locale),
            ViewKind::Topic => message.clone().into(),
            ViewKind::Document => t!("error.server_text", text = message, locale = locale),
        },
        SubmitOutcome::Failed(GenerationError::Malformed) => match view {
            ViewKind::Topic => t!("error.malformed_topic", locale = locale),
            ViewKind::Document => t!("error.malformed_document", locale = locale),
        },
    };
    Some(Notice::Error(error.to_string()))
}

fn notice(notice: &Notice, locale: &str) -> Markup {
    match notice {
        Notice::Error(message) => html! {
            p.error role="alert" { (message) }
        },
        Notice::Skipped(count) => html! {
            p.notice { (t!("viewer.skipped", count = count, locale = locale)) }
        },
    }
}

fn transition_button(view: ViewKind, transition: Transition, label: &str, enabled: bool) -> Markup {
    html! {
        button type="button"
               class="nav-btn"
               hx-post=(names::transition_url(view, transition))
               hx-target=(format!("#{}", names::viewer_id(view)))
               hx-swap="innerHTML"
               disabled[!enabled] {
            (label)
        }
    }
}

fn question(view: ViewKind, session: &QuizSession, locale: &str) -> Markup {
    let current = session.current();
    let number = session.index() + 1;
    let total = session.len();
    // Unknown wire values are shown as sent.
    let kind = current
        .question_type
        .as_deref()
        .map(|raw| match QuestionType::parse(raw) {
            Some(question_type) => components::question_type_label(question_type, locale),
            None => raw.to_string(),
        });
    html! {
        div.question-item {
            small.position {
                (t!("viewer.position", number = number, total = total, locale = locale))
                @if let Some(kind) = kind {
                    " · " span.question-kind { (kind) }
                }
            }
            p.question { strong { "Q" (number) ":" } " " (current.question) }
            @if session.is_answer_shown() {
                p.answer { strong { (t!("viewer.answer", locale = locale)) } " " (current.answer) }
                @if let Some(context) = &current.context {
                    details.context {
                        summary { (t!("viewer.context", locale = locale)) }
                        p { (context) }
                    }
                }
            } @else {
                (transition_button(view, Transition::Reveal, &t!("viewer.show_answer", locale = locale), true))
            }
            hr;
            div.navigation-buttons {
                (transition_button(view, Transition::Retreat, &t!("viewer.back", locale = locale), session.can_retreat()))
                (transition_button(view, Transition::Advance, &t!("viewer.next", locale = locale), session.can_advance()))
            }
        }
    }
}

/// Contents of the generated-questions box (the htmx swap target).
pub fn panel(data: &PanelData, locale: &str) -> Markup {
    html! {
        h3 { (t!("viewer.title", locale = locale)) }
        @if let Some(n) = &data.notice {
            (notice(n, locale))
        }
        @match &data.session {
            Some(session) => (question(data.view, session, locale)),
            None => p.no-questions { (t!("viewer.empty", locale = locale)) },
        }
    }
}

/// The panel wrapped in its swap target.
pub fn viewer(data: &PanelData, locale: &str) -> Markup {
    html! {
        article.question-box id=(names::viewer_id(data.view)) aria-live="polite" {
            (panel(data, locale))
        }
    }
}
