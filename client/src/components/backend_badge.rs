//! Small indicator showing whether the prediction service answers.

#[cfg(test)]
#[path = "backend_badge_test.rs"]
mod backend_badge_test;

use leptos::prelude::*;

/// `None` while the status request is pending.
fn badge_text(reachable: Option<bool>) -> &'static str {
    match reachable {
        None => "Checking prediction service…",
        Some(true) => "Prediction service online",
        Some(false) => "Prediction service offline",
    }
}

fn badge_class(reachable: Option<bool>) -> &'static str {
    match reachable {
        None => "backend-badge backend-badge--pending",
        Some(true) => "backend-badge backend-badge--online",
        Some(false) => "backend-badge backend-badge--offline",
    }
}

#[component]
pub fn BackendBadge() -> impl IntoView {
    let reachable = RwSignal::new(None::<bool>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let status = crate::net::api::fetch_backend_status().await;
        reachable.set(Some(status.is_some_and(|s| s.reachable)));
    });

    view! {
        <span class=move || badge_class(reachable.get())>{move || badge_text(reachable.get())}</span>
    }
}
