use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::{
    names,
    session::ViewKind,
    views::{
        components,
        viewer::{self, PanelData},
    },
};

const SUBMIT_ID: &str = "document-submit";

// The file input cannot survive a server re-render, so the submit button is
// toggled client side.
const TOGGLE_SUBMIT_JS: &str = "function updateDocumentSubmit(f){document.getElementById('document-submit').disabled=!(f.file.files.length&&f.question_type.value&&f.num_questions.value);}";

pub fn form(locale: &str) -> Markup {
    html! {
        form id="document-form"
             class="quiz-form"
             hx-post=(names::DOCUMENT_GENERATE_URL)
             hx-encoding="multipart/form-data"
             hx-target=(format!("#{}", names::viewer_id(ViewKind::Document)))
             hx-swap="innerHTML"
             hx-indicator=(format!("#{}", names::loading_id(ViewKind::Document)))
             hx-disabled-elt=(format!("#{SUBMIT_ID}"))
             onchange="updateDocumentSubmit(this)" {
            fieldset role="group" {
                (components::question_type_select("", locale))
                (components::question_count_select("", locale))
                input type="file"
                      name="file"
                      accept=(names::DOCUMENT_ACCEPT_ATTR)
                      aria-label=(t!("document.select_file", locale = locale));
            }
            button id=(SUBMIT_ID) type="submit" disabled {
                (t!("form.submit", locale = locale))
            }
        }
        script { (PreEscaped(TOGGLE_SUBMIT_JS)) }
    }
}

pub fn page(panel: &PanelData, locale: &str) -> Markup {
    html! {
        h1 { (t!("document.title", locale = locale)) }
        p { (t!("document.intro", types = names::DOCUMENT_ACCEPT_ATTR, locale = locale)) }
        (form(locale))
        (components::loading_indicator(&names::loading_id(ViewKind::Document), locale))
        hr.divider;
        (viewer::viewer(panel, locale))
    }
}
