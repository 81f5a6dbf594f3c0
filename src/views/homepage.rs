use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, views::components};

pub fn landing_page(identity: Option<&str>, locale: &str) -> Markup {
    html! {
        section.landing-hero {
            h1 { (t!("landing.tagline", locale = locale)) }
            p.landing-hero-desc { (t!("landing.description", locale = locale)) }
        }

        section.landing-features {
            div.landing-features-grid {
                article.landing-feature-card {
                    h3 { (t!("landing.topic_title", locale = locale)) }
                    p { (t!("landing.topic_desc", locale = locale)) }
                    (components::nav_link(names::TOPIC_QUIZ_URL, html! { (t!("landing.open", locale = locale)) }))
                }
                article.landing-feature-card {
                    h3 { (t!("landing.document_title", locale = locale)) }
                    p { (t!("landing.document_desc", locale = locale)) }
                    (components::nav_link(names::DOCUMENT_QUIZ_URL, html! { (t!("landing.open", locale = locale)) }))
                }
            }
        }

        @match identity {
            Some(email) => p { (t!("landing.signed_in_as", email = email, locale = locale)) },
            None => p.notice {
                (t!("landing.no_identity", locale = locale)) " "
                (components::nav_link(names::IDENTITY_URL, html! { (t!("nav.set_email", locale = locale)) }))
            },
        }
    }
}

pub enum IdentityState {
    NoChange,
    Saved,
    Cleared,
    Invalid,
}

pub fn identity(current: Option<&str>, state: IdentityState, locale: &str) -> Markup {
    let message = match state {
        IdentityState::NoChange => None,
        IdentityState::Saved => Some(("notice", t!("identity.saved", locale = locale))),
        IdentityState::Cleared => Some(("notice", t!("identity.cleared", locale = locale))),
        IdentityState::Invalid => Some(("error", t!("identity.invalid", locale = locale))),
    };

    html! {
        h1 { (t!("identity.title", locale = locale)) }
        p { (t!("identity.intro", locale = locale)) }
        @if let Some((class, text)) = message {
            p class=(class) role="status" { (text) }
        }
        article style="width: fit-content;" {
            form hx-post=(names::IDENTITY_URL)
                 hx-target="main"
                 hx-swap="innerHTML" {
                label {
                    (t!("identity.email", locale = locale))
                    input name="email"
                          type="email"
                          autocomplete="email"
                          value=(current.unwrap_or_default());
                    small { (t!("identity.hint", locale = locale)) }
                }
                input type="submit" value=(t!("identity.save", locale = locale));
            }
        }
    }
}
