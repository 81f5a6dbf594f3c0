use std::fmt;

use crate::names;

/// A question/answer pair produced by the generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub question: String,
    pub answer: String,
    /// Source passage the question was generated from, when the backend sends one.
    pub context: Option<String>,
    pub question_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Mcq,
    ShortQa,
    FillInTheBlanks,
    TrueOrFalse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Mcq,
        QuestionType::ShortQa,
        QuestionType::FillInTheBlanks,
        QuestionType::TrueOrFalse,
    ];

    /// Types listed in the form dropdowns.
    pub const OFFERED: [QuestionType; 2] = [QuestionType::Mcq, QuestionType::ShortQa];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::ShortQa => "short_qa",
            QuestionType::FillInTheBlanks => "fill_in_the_blanks",
            QuestionType::TrueOrFalse => "True_or_false",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub fn parse(value: &str) -> Option<Self> {
        let count = value.trim().parse::<u8>().ok()?;
        (names::MIN_QUESTION_COUNT..=names::MAX_QUESTION_COUNT)
            .contains(&count)
            .then_some(QuestionCount(count))
    }

    pub fn options() -> impl Iterator<Item = u8> {
        names::MIN_QUESTION_COUNT..=names::MAX_QUESTION_COUNT
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user's email address, sent to the backend as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(String);

impl Identity {
    /// Returns `None` for values that are empty or cannot live in a cookie.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let cookie_safe = value
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, ';' | ',' | '"' | '\\'));
        cookie_safe.then(|| Identity(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A document uploaded through the document quiz form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        Some(ext.to_ascii_lowercase())
    }

    pub fn is_supported(&self) -> bool {
        self.extension()
            .is_some_and(|ext| names::ACCEPTED_DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
    }
}
