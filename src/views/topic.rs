use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    catalog, names,
    services::quiz::TopicForm,
    session::ViewKind,
    views::{
        components,
        viewer::{self, PanelData},
    },
};

const FORM_ID: &str = "topic-form";
const SUBMIT_ID: &str = "topic-submit";

/// The topic quiz form. Any change re-renders it server side so the
/// subtopic list and the submit button follow the current selection.
pub fn form(form: &TopicForm, locale: &str) -> Markup {
    html! {
        form id=(FORM_ID)
             class="quiz-form"
             hx-post=(names::TOPIC_GENERATE_URL)
             hx-target=(format!("#{}", names::viewer_id(ViewKind::Topic)))
             hx-swap="innerHTML"
             hx-indicator=(format!("#{}", names::loading_id(ViewKind::Topic)))
             hx-disabled-elt=(format!("#{SUBMIT_ID}")) {
            input type="hidden" name="previous_topic" value=(form.topic);
            fieldset role="group"
                     hx-get=(names::TOPIC_FORM_URL)
                     hx-trigger="change"
                     hx-target=(format!("#{FORM_ID}"))
                     hx-swap="outerHTML"
                     hx-include="closest form" {
                select name="topic" aria-label=(t!("topic.select_topic", locale = locale)) {
                    option value="" selected[form.topic.is_empty()] { (t!("topic.select_topic", locale = locale)) }
                    @for topic in catalog::topics() {
                        option value=(topic) selected[form.topic == topic] { (topic) }
                    }
                }
                select name="sub_topic" aria-label=(t!("topic.select_subtopic", locale = locale)) {
                    option value="" selected[form.sub_topic.is_empty()] { (t!("topic.select_subtopic", locale = locale)) }
                    @for subtopic in catalog::subtopics(&form.topic) {
                        option value=(subtopic) selected[form.sub_topic == *subtopic] { (subtopic) }
                    }
                }
                (components::question_type_select(&form.question_type, locale))
                (components::question_count_select(&form.num_questions, locale))
            }
            button id=(SUBMIT_ID) type="submit" disabled[!form.is_complete()] {
                (t!("form.submit", locale = locale))
            }
        }
    }
}

pub fn page(topic_form: &TopicForm, panel: &PanelData, locale: &str) -> Markup {
    html! {
        h1 { (t!("topic.title", locale = locale)) }
        p { (t!("topic.intro", locale = locale)) }
        (form(topic_form, locale))
        (components::loading_indicator(&names::loading_id(ViewKind::Topic), locale))
        hr.divider;
        (viewer::viewer(panel, locale))
    }
}
