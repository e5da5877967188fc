//! Chronic disease risk questionnaire.

use leptos::prelude::*;
use predict::QUESTIONS;

use crate::components::question_field::QuestionField;
use crate::components::risk_summary::RiskSummary;
use crate::components::site_header::{BackLink, SiteHeader};
use crate::state::quiz::QuizState;

#[component]
pub fn RiskPage() -> impl IntoView {
    let quiz = RwSignal::new(QuizState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        quiz.update(|q| pending = q.begin_submit());
        let Some(answers) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_questionnaire(&answers).await;
            if let Err(e) = &result {
                log::error!("risk scoring failed: {e}");
            }
            quiz.update(|q| q.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = answers;
        }
    };

    view! {
        <SiteHeader/>
        <div class="page-container quiz-container">
            <BackLink/>
            <h1 class="quiz-title">"Chronic Disease Risk Questionnaire"</h1>
            <form class="quiz-form" on:submit=on_submit>
                {QUESTIONS.iter().map(|question| view! { <QuestionField question=*question quiz=quiz/> }).collect_view()}
                <Show when=move || quiz.with(|q| !q.issues.is_empty())>
                    <ul class="quiz-issues">
                        {move || {
                            quiz.with(|q| q.issues.clone())
                                .into_iter()
                                .map(|issue| view! { <li>{issue}</li> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
                <button class="submit-btn" type="submit" disabled=move || quiz.with(|q| q.loading)>
                    {move || quiz.with(QuizState::submit_label)}
                </button>
            </form>

            <Show when=move || quiz.with(|q| q.error.is_some())>
                <div class="result-box error">
                    <p>"⚠️ " {move || quiz.with(|q| q.error.clone().unwrap_or_default())}</p>
                </div>
            </Show>
            {move || quiz.with(|q| q.report).map(|report| view! { <RiskSummary report=report/> })}
        </div>
    }
}
