//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, mental_health::MentalHealthPage, risk::RiskPage, xray::XrayPage};
use crate::util::embeds;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script src=embeds::CHAT_BOOTSTRAP_SRC></script>
                {embeds::voice_agent_id()
                    .map(|_| view! { <script src=embeds::VOICE_WIDGET_SRC type="text/javascript"></script> })}
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/aarogya.css"/>
        <Title text="Aarogya AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("xray") view=XrayPage/>
                <Route path=StaticSegment("risk") view=RiskPage/>
                <Route path=StaticSegment("mental-health") view=MentalHealthPage/>
            </Routes>
        </Router>
    }
}
