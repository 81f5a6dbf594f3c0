rust_i18n::i18n!("locales", fallback = "en");

pub mod catalog;
pub mod extractors;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod session;
pub mod statics;
pub mod utils;
pub mod views;

use axum::{extract::DefaultBodyLimit, middleware, Router};

use crate::{services::quiz::QuizService, session::SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub quiz: QuizService,
    pub sessions: SessionStore,
    pub secure_cookies: bool,
    pub max_upload_bytes: usize,
}

pub fn router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::topic::routes())
        .merge(handlers::document::routes())
        .merge(handlers::session::routes())
        .layer(middleware::from_fn(csrf_check))
        .layer(upload_limit)
        .nest("/static", statics::routes())
        .fallback(rejections::not_found)
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            tracing::warn!("rejected {} {} without HX-Request", req.method(), req.uri());
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
