use crate::session::{Transition, ViewKind};

pub const HOME_URL: &str = "/";
pub const IDENTITY_URL: &str = "/identity";
pub const SET_LOCALE_URL: &str = "/set-locale";

pub const TOPIC_QUIZ_URL: &str = "/topic-quiz";
pub const TOPIC_FORM_URL: &str = "/topic-quiz/form";
pub const TOPIC_GENERATE_URL: &str = "/topic-quiz/generate";
pub const DOCUMENT_QUIZ_URL: &str = "/document-quiz";
pub const DOCUMENT_GENERATE_URL: &str = "/document-quiz/generate";

pub fn transition_url(view: ViewKind, transition: Transition) -> String {
    format!("/session/{}/{}", view.as_str(), transition.as_str())
}

/// Element id of the panel that holds the generated-questions viewer.
pub fn viewer_id(view: ViewKind) -> String {
    format!("{}-viewer", view.as_str())
}

pub fn loading_id(view: ViewKind) -> String {
    format!("{}-loading", view.as_str())
}

// Backend endpoints, relative to the configured generator URL
pub const GENERATE_QUESTIONS_PATH: &str = "/api/generate-questions";
pub const UPLOAD_AND_GENERATE_PATH: &str = "/api/upload-and-generate-questions";

// Cookies
pub const IDENTITY_COOKIE_NAME: &str = "email";
pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";
pub const IDENTITY_COOKIE_MAX_AGE: u64 = 30 * 24 * 3600;
pub const QUIZ_SESSION_COOKIE_MAX_AGE: u64 = 3600;

// Generation form limits
pub const MIN_QUESTION_COUNT: u8 = 1;
pub const MAX_QUESTION_COUNT: u8 = 5;
pub const ACCEPTED_DOCUMENT_EXTENSIONS: &[&str] = &["txt", "pdf", "docx"];
pub const DOCUMENT_ACCEPT_ATTR: &str = ".txt,.pdf,.docx";

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const LOCALE_COOKIE_MAX_AGE: u64 = 365 * 24 * 3600;
pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja"];
