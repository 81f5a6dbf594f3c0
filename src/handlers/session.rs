use axum::{
    extract::{Path, State},
    routing::post,
    Router,
};

use crate::{
    extractors::{Locale, SessionToken},
    session::{Transition, ViewKind},
    views::viewer::{self, PanelData},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/session/{view}/{transition}", post(transition))
}

/// Reveal, next and back for one view. Without a live session the empty
/// panel is returned.
async fn transition(
    State(state): State<AppState>,
    Locale(locale): Locale,
    SessionToken(token): SessionToken,
    Path((view, transition)): Path<(ViewKind, Transition)>,
) -> maud::Markup {
    let session = match &token {
        Some(token) => state.sessions.update(token, view, transition).await,
        None => None,
    };
    if session.is_none() {
        tracing::debug!("{} on {} without a session", transition.as_str(), view.as_str());
    }

    viewer::panel(&PanelData::new(view, session), &locale)
}
