use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use maud::html;
use serde::Deserialize;

use crate::{
    extractors::{match_supported_locale, CurrentIdentity, IsHtmx, Locale},
    models::Identity,
    names,
    rejections::{AppError, ResultExt},
    utils,
    views::{self, homepage as homepage_views, layout, Chrome},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(homepage))
        .route(names::IDENTITY_URL, get(identity_page).post(identity_post))
        .route(names::SET_LOCALE_URL, post(set_locale))
}

async fn homepage(
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    CurrentIdentity(identity): CurrentIdentity,
) -> maud::Markup {
    let identity = identity.as_ref().map(|i| i.as_str());
    views::render(
        is_htmx,
        "Quizgen",
        homepage_views::landing_page(identity, &locale),
        Chrome {
            locale: &locale,
            identity,
        },
    )
}

async fn identity_page(
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    CurrentIdentity(identity): CurrentIdentity,
) -> maud::Markup {
    let identity = identity.as_ref().map(|i| i.as_str());
    views::render(
        is_htmx,
        "Email",
        homepage_views::identity(identity, homepage_views::IdentityState::NoChange, &locale),
        Chrome {
            locale: &locale,
            identity,
        },
    )
}

#[derive(Deserialize)]
struct IdentityPost {
    #[serde(default)]
    email: String,
}

async fn identity_post(
    State(state): State<AppState>,
    Locale(locale): Locale,
    CurrentIdentity(current): CurrentIdentity,
    Form(body): Form<IdentityPost>,
) -> Result<impl IntoResponse, AppError> {
    let mut headers = HeaderMap::new();

    let (identity, id_state) = if body.email.trim().is_empty() {
        let cookie = utils::expired_cookie(names::IDENTITY_COOKIE_NAME, state.secure_cookies)
            .reject("could not build identity cookie")?;
        headers.insert(SET_COOKIE, cookie);
        tracing::info!("identity cleared");
        (None, homepage_views::IdentityState::Cleared)
    } else {
        match Identity::parse(&body.email) {
            Some(identity) => {
                let cookie = utils::cookie(
                    names::IDENTITY_COOKIE_NAME,
                    identity.as_str(),
                    names::IDENTITY_COOKIE_MAX_AGE,
                    state.secure_cookies,
                )
                .reject("could not build identity cookie")?;
                headers.insert(SET_COOKIE, cookie);
                (Some(identity), homepage_views::IdentityState::Saved)
            }
            None => {
                tracing::warn!("rejected identity value");
                (current, homepage_views::IdentityState::Invalid)
            }
        }
    };

    let identity = identity.as_ref().map(|i| i.as_str());
    let body = html! {
        (views::titled("Email", homepage_views::identity(identity, id_state, &locale)))
        (layout::identity_link(identity, &locale, true))
    };

    Ok((headers, body))
}

#[derive(Deserialize)]
struct SetLocaleBody {
    locale: String,
}

async fn set_locale(
    State(state): State<AppState>,
    Form(body): Form<SetLocaleBody>,
) -> Result<impl IntoResponse, AppError> {
    let locale = match_supported_locale(&body.locale).unwrap_or(names::DEFAULT_LOCALE);
    let cookie = utils::cookie(
        names::LOCALE_COOKIE_NAME,
        locale,
        names::LOCALE_COOKIE_MAX_AGE,
        state.secure_cookies,
    )
    .reject("could not build locale cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    headers.insert("hx-refresh", HeaderValue::from_static("true"));

    Ok((headers, ""))
}
