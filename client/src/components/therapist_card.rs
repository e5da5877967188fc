//! Paid counselling option with the static therapist listing.

use leptos::prelude::*;

use crate::state::support::{BOOKING_NOTICE, THERAPISTS, starting_price};

#[component]
pub fn TherapistCard() -> impl IntoView {
    let notice = RwSignal::new(None::<&'static str>);
    let headline = starting_price().map(|price| format!("Starting at ₹{price}/hour (Students)"));

    view! {
        <div class="card">
            <h2>"🧑‍⚕️ Talk to a Real Therapist"</h2>
            {headline.map(|text| view! { <p><strong>{text}</strong></p> })}
            {THERAPISTS
                .iter()
                .map(|t| view! {
                    <div class="therapist">
                        <p><strong>{t.name}</strong></p>
                        <p>{t.specialty}</p>
                        <p>{t.price_label()}</p>
                        <p>{t.availability}</p>
                        <button class="btn" on:click=move |_| notice.set(Some(BOOKING_NOTICE))>
                            "Book Session"
                        </button>
                    </div>
                })
                .collect_view()}
            <Show when=move || notice.get().is_some()>
                <p class="card__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
