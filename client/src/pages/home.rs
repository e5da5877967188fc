//! Dashboard: introduction, feature cards, and the embedded health chatbot.

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::site_header::SiteHeader;
use crate::util::embeds;

const CHAT_ANCHOR_ID: &str = "chatbot";

#[component]
pub fn HomePage() -> impl IntoView {
    let on_chat = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let chat = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(embeds::CHAT_ELEMENT).ok().flatten());
            if let Some(chat) = chat {
                chat.scroll_into_view();
            }
        }
    });

    view! {
        <SiteHeader/>
        <section class="hero">
            <div class="hero__intro">
                <h1>"All-in-one health assistant."</h1>
                <div class="project-desc-container">
                    <p class="project-desc">
                        "Aarogya AI is a preventive healthcare platform that combines AI-powered X-ray analysis, "
                        "lifestyle-based chronic disease risk detection, and an intelligent health chatbot into one "
                        "unified system."
                    </p>
                    <div class="hackathon-badge">"🚀 Hackathon Prototype • AI-powered Preventive Healthcare"</div>
                </div>
                <p class="hero__tagline">"Built for early detection, accessibility, and preventive healthcare."</p>
            </div>

            <div class="features info-cards">
                <FeatureCard
                    icon="🩻"
                    title="X-Ray Analysis"
                    blurb="AI-assisted analysis of medical X-ray images."
                    points=&[
                        "Upload lung, kidney, or bone X-ray images",
                        "AI model analyzes medical patterns",
                        "Confidence-based abnormality detection",
                    ]
                    cta="Start X-Ray Analysis →"
                    href="/xray"
                />
                <FeatureCard
                    icon="📊"
                    title="Chronic Disease Risk Detection"
                    blurb="Lifestyle-based ML risk assessment."
                    points=&[
                        "Lifestyle and health questionnaire",
                        "ML-based chronic disease prediction",
                        "Early warning for diabetes and heart risks",
                    ]
                    cta="Check Risk →"
                    href="/risk"
                />
                <FeatureCard
                    icon="🧠"
                    title="Mental Health Support"
                    blurb="Talk it out with an AI voice companion or book a therapist."
                    cta="Get Support →"
                    href="/mental-health"
                />
                <FeatureCard
                    icon="💬"
                    title="Health Chatbot"
                    blurb="Instant AI guidance for common health concerns."
                    points=&[
                        "Symptom-based conversational guidance",
                        "Follow-up questions for better accuracy",
                        "Multilingual health assistance",
                    ]
                    cta="Chat with AI →"
                    on_select=on_chat
                />
            </div>

            <div id=CHAT_ANCHOR_ID inner_html=embeds::chat_widget_markup()></div>
        </section>
    }
}
