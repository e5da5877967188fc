//! Shared page chrome: logo header and the dashboard back link.

use leptos::prelude::*;

use super::backend_badge::BackendBadge;

/// Top bar with the logo linking home.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="logo">
                <div class="logo-circle">"Rx"</div>
                <span>"Aarogya AI"</span>
            </a>
            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <a href="/xray">"X-Ray"</a>
                <a href="/risk">"Risk"</a>
                <a href="/mental-health">"Mental Health"</a>
            </nav>
            <BackendBadge/>
        </header>
    }
}

#[component]
pub fn BackLink() -> impl IntoView {
    view! { <a href="/" class="back-link">"← Back to Dashboard"</a> }
}
