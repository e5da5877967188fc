//! One questionnaire input: a select with a blank placeholder, or a number box.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use predict::{Question, QuestionKind};

use crate::state::quiz::QuizState;

#[component]
pub fn QuestionField(question: Question, quiz: RwSignal<QuizState>) -> impl IntoView {
    let id = question.id;
    let value = move || quiz.with(|q| q.value(id));

    let control = match question.kind {
        QuestionKind::Select => view! {
            <select
                name=id
                prop:value=value
                on:change=move |ev| quiz.update(|q| q.answer(id, event_target_value(&ev)))
            >
                <option value="">"Select"</option>
                {question.options.iter().map(|op| view! { <option value=*op>{*op}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        QuestionKind::Number => view! {
            <input
                name=id
                type="number"
                min="0"
                step="any"
                prop:value=value
                on:input=move |ev| quiz.update(|q| q.answer(id, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <label class="quiz-field" class:quiz-field--optional=question.optional>
            <span class="quiz-field__label">{question.label}</span>
            {control}
        </label>
    }
}
