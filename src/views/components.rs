use maud::{html, Markup};
use rust_i18n::t;

use crate::models::{QuestionCount, QuestionType};

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn question_type_select(selected: &str, locale: &str) -> Markup {
    html! {
        select name="question_type" aria-label=(t!("form.select_question_type", locale = locale)) {
            option value="" selected[selected.is_empty()] { (t!("form.select_question_type", locale = locale)) }
            @for question_type in QuestionType::OFFERED {
                option value=(question_type.as_str()) selected[selected == question_type.as_str()] {
                    (question_type_label(question_type, locale))
                }
            }
        }
    }
}

pub fn question_type_label(question_type: QuestionType, locale: &str) -> String {
    match question_type {
        QuestionType::Mcq => t!("question_type.mcq", locale = locale),
        QuestionType::ShortQa => t!("question_type.short_qa", locale = locale),
        QuestionType::FillInTheBlanks => t!("question_type.fill_in_the_blanks", locale = locale),
        QuestionType::TrueOrFalse => t!("question_type.true_or_false", locale = locale),
    }
    .to_string()
}

pub fn question_count_select(selected: &str, locale: &str) -> Markup {
    html! {
        select name="num_questions" aria-label=(t!("form.select_count", locale = locale)) {
            option value="" selected[selected.is_empty()] { (t!("form.select_count", locale = locale)) }
            @for count in QuestionCount::options() {
                @let value = count.to_string();
                option value=(value) selected[selected == value] { (count) }
            }
        }
    }
}

/// Indicator shown by htmx while a generation request is in flight.
pub fn loading_indicator(id: &str, locale: &str) -> Markup {
    html! {
        p id=(id) class="htmx-indicator" aria-busy="true" {
            (t!("viewer.loading", locale = locale))
        }
    }
}
