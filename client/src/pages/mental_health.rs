//! Mental-health support: AI voice companion and paid therapist sessions.

use leptos::prelude::*;

use crate::components::site_header::{BackLink, SiteHeader};
use crate::components::therapist_card::TherapistCard;
use crate::components::voice_companion_card::VoiceCompanionCard;

#[component]
pub fn MentalHealthPage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <div class="page-container">
            <BackLink/>
            <h1>"Mental Health Support"</h1>
            <p>"Feeling lonely? Tired? Unheard? Feel free to let it out!"</p>
            <div class="support-cards">
                <VoiceCompanionCard/>
                <TherapistCard/>
            </div>
        </div>
    }
}
