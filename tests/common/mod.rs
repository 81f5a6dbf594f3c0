#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, Request, Response, StatusCode},
    routing::post,
    Router,
};
use quizgen::{
    generator::HttpGenerator, names, router, services::quiz::QuizService, session::SessionStore,
    AppState,
};

pub const EMAIL: &str = "student@example.com";

/// Requests received by the fake generation backend: content type and body.
#[derive(Clone, Default)]
pub struct Seen(Arc<Mutex<Vec<(String, Bytes)>>>);

impl Seen {
    pub fn calls(&self) -> usize {
        self.0.lock().expect("seen lock").len()
    }

    pub fn last(&self) -> (String, Bytes) {
        self.0
            .lock()
            .expect("seen lock")
            .last()
            .cloned()
            .expect("backend should have been called")
    }
}

/// Serves both generation endpoints on an ephemeral port, always replying
/// with `status` and `body`.
pub async fn backend(status: StatusCode, body: &'static str) -> (String, Seen) {
    let seen = Seen::default();
    let reply = move |State(seen): State<Seen>, headers: HeaderMap, body_in: Bytes| async move {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        seen.0.lock().expect("seen lock").push((content_type, body_in));
        (status, body)
    };
    let app = Router::new()
        .route(names::GENERATE_QUESTIONS_PATH, post(reply.clone()))
        .route(names::UPLOAD_AND_GENERATE_PATH, post(reply))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("fake backend address");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("fake backend") });

    (format!("http://{addr}"), seen)
}

pub fn app(generator_url: &str) -> Router {
    let generator =
        HttpGenerator::new(generator_url, Duration::from_secs(5)).expect("build generator");
    router(AppState {
        quiz: QuizService::new(generator),
        sessions: SessionStore::new(Duration::from_secs(3600)),
        secure_cookies: false,
        max_upload_bytes: 1024 * 1024,
    })
}

/// An htmx POST carrying `cookies` (already formatted `name=value` pairs).
pub fn htmx_post(uri: &str, content_type: &str, body: impl Into<Body>, cookies: &[&str]) -> Request<Body> {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("HX-Request", "true")
        .header(header::CONTENT_TYPE, content_type);
    if !cookies.is_empty() {
        req = req.header(header::COOKIE, cookies.join("; "));
    }
    req.body(body.into()).expect("request build should succeed")
}

pub fn form_post(uri: &str, form: &str, cookies: &[&str]) -> Request<Body> {
    htmx_post(
        uri,
        "application/x-www-form-urlencoded",
        form.to_string(),
        cookies,
    )
}

pub const BOUNDARY: &str = "quizgen-test-boundary";

/// A multipart body with the given text fields and an optional file part.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str)>) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    if let Some((file_name, contents)) = file {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: text/plain\r\n\r\n{contents}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// The `name=value` part of the `Set-Cookie` header for `name`.
pub fn set_cookie(resp: &Response<Body>, name: &str) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

pub fn identity_cookie() -> String {
    format!("{}={EMAIL}", names::IDENTITY_COOKIE_NAME)
}
