//! Free AI voice companion backed by the embedded voice widget.

use leptos::prelude::*;

use crate::state::support::VoiceCompanionState;
use crate::util::{embeds, voice_widget};

#[component]
pub fn VoiceCompanionCard() -> impl IntoView {
    let state = RwSignal::new(VoiceCompanionState::default());
    let widget = embeds::voice_widget_markup(embeds::voice_agent_id());

    let on_talk = move |_| {
        let outcome = voice_widget::start_call();
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = outcome {
                log::warn!("voice widget did not start: {e:?}");
            }
        }
        state.update(|s| s.start(outcome));
    };

    view! {
        <div class="card">
            <h2>"🎧 AI Voice Companion (Free)"</h2>
            <p>"A judgment-free AI voice that listens and supports you emotionally."</p>
            <ul>
                <li>"24/7 availability"</li>
                <li>"Stress & anxiety support"</li>
                <li>"Voice-based conversation"</li>
                <li>"Completely free"</li>
            </ul>
            <button
                class="btn-primary"
                class:btn-listening=move || state.with(|s| s.listening)
                on:click=on_talk
            >
                {move || state.with(VoiceCompanionState::button_label)}
            </button>
            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="card__notice">{move || state.with(|s| s.notice.unwrap_or_default())}</p>
            </Show>
            {widget.map(|markup| view! { <div class="voice-widget" inner_html=markup></div> })}
        </div>
    }
}
