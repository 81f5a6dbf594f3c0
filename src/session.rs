//! Question session state shared by the topic and document views.
//!
//! A [`QuizSession`] is an immutable question sequence plus a cursor and an
//! answer-visibility flag. Every cursor move hides the answer again; moves
//! past either end are no-ops.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::models::GeneratedQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Topic,
    Document,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Topic => "topic",
            ViewKind::Document => "document",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Transition {
    #[serde(rename = "reveal")]
    Reveal,
    #[serde(rename = "next")]
    Advance,
    #[serde(rename = "back")]
    Retreat,
}

impl Transition {
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Reveal => "reveal",
            Transition::Advance => "next",
            Transition::Retreat => "back",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Arc<[GeneratedQuestion]>,
    index: usize,
    answer_shown: bool,
}

impl QuizSession {
    /// Starts at the first question with the answer hidden. Returns `None`
    /// for an empty question set.
    pub fn new(questions: Vec<GeneratedQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions: questions.into(),
            index: 0,
            answer_shown: false,
        })
    }

    /// Number of questions; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_answer_shown(&self) -> bool {
        self.answer_shown
    }

    pub fn current(&self) -> &GeneratedQuestion {
        &self.questions[self.index]
    }

    pub fn can_advance(&self) -> bool {
        self.index + 1 < self.questions.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.index > 0
    }

    pub fn reveal(&mut self) {
        self.answer_shown = true;
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.index += 1;
        self.answer_shown = false;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.index -= 1;
        self.answer_shown = false;
        true
    }

    /// Applies `transition`, returning whether the state changed.
    pub fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Reveal => {
                let changed = !self.answer_shown;
                self.reveal();
                changed
            }
            Transition::Advance => self.advance(),
            Transition::Retreat => self.retreat(),
        }
    }
}

struct Entry {
    session: QuizSession,
    touched: Instant,
}

type Key = (String, ViewKind);

/// In-memory sessions keyed by browser token and view. Nothing is persisted.
#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<RwLock<HashMap<Key, Entry>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// Replaces the session of `view` for `token` and drops idle entries.
    pub async fn load(&self, token: &str, view: ViewKind, session: QuizSession) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.touched) < self.idle_ttl);
        let pruned = before - entries.len();
        if pruned > 0 {
            tracing::debug!("pruned {pruned} idle quiz sessions");
        }

        entries.insert(
            (token.to_string(), view),
            Entry {
                session,
                touched: now,
            },
        );
    }

    pub async fn clear(&self, token: &str, view: ViewKind) {
        self.entries
            .write()
            .await
            .remove(&(token.to_string(), view));
    }

    pub async fn get(&self, token: &str, view: ViewKind) -> Option<QuizSession> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&(token.to_string(), view))?;
        entry.touched = Instant::now();
        Some(entry.session.clone())
    }

    /// Applies `transition` under the store lock and returns the new state.
    pub async fn update(
        &self,
        token: &str,
        view: ViewKind,
        transition: Transition,
    ) -> Option<QuizSession> {
        let mut entries = self.entries.write().await;
        let entry = entries.get_mut(&(token.to_string(), view))?;
        if !entry.session.apply(transition) {
            tracing::debug!(
                "{} on {} session ignored at index {}",
                transition.as_str(),
                view.as_str(),
                entry.session.index()
            );
        }
        entry.touched = Instant::now();
        Some(entry.session.clone())
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
