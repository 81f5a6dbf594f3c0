use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils, views::components};

/// Per-request values the page frame needs.
pub struct Chrome<'a> {
    pub locale: &'a str,
    pub identity: Option<&'a str>,
}

impl Default for Chrome<'_> {
    fn default() -> Self {
        Self {
            locale: names::DEFAULT_LOCALE,
            identity: None,
        }
    }
}

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(chrome: &Chrome) -> Markup {
    let locale = chrome.locale;
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::HOME_URL) {
                            strong { "Quizgen" }
                        }
                    }
                    li { (components::nav_link(names::TOPIC_QUIZ_URL, html! { (t!("nav.topic_quiz", locale = locale)) })) }
                    li { (components::nav_link(names::DOCUMENT_QUIZ_URL, html! { (t!("nav.document_quiz", locale = locale)) })) }
                }
                ul {
                    (identity_link(chrome.identity, locale, false))
                    li { (locale_switcher(locale)) }
                }
            }
        }
    }
}

/// Header entry showing who generated questions are requested for. With
/// `oob` set it replaces the header entry from any htmx response.
pub fn identity_link(identity: Option<&str>, locale: &str, oob: bool) -> Markup {
    html! {
        li id="identity-link" hx-swap-oob=[oob.then_some("true")] {
            (components::nav_link(names::IDENTITY_URL, html! {
                @match identity {
                    Some(email) => (email),
                    None => (t!("nav.set_email", locale = locale)),
                }
            }))
        }
    }
}

fn locale_switcher(current: &str) -> Markup {
    html! {
        select name="locale"
               aria-label="Language"
               hx-post=(names::SET_LOCALE_URL)
               hx-trigger="change" {
            @for locale in names::SUPPORTED_LOCALES.iter().copied() {
                option value=(locale) selected[locale == current] { (t!("locale.name", locale = locale)) }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer {
            small."secondary" { "Quizgen " (utils::VERSION) }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, chrome: Chrome) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(chrome.locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (js())
                (icon())

                title { (format!("{title} - Quizgen")) }
            }

            body."container" {
                (header(&chrome))
                (main(body))
                (footer())
            }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Quizgen" }
        (body)
    }
}

/// Full page for direct navigation, `main` contents for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, chrome: Chrome) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, chrome)
    }
}
