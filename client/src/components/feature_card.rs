//! Dashboard card advertising one feature.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    cta: &'static str,
    #[prop(default = &[])] points: &'static [&'static str],
    /// Link target; cards without one act on `on_select` instead.
    #[prop(optional)]
    href: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let body = move || {
        view! {
            <span class="feature-icon">{icon}</span>
            <h3>{title}</h3>
            <p>{blurb}</p>
            <ul class="feature-card__points">
                {points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
            </ul>
            <span class="cta-text">{cta}</span>
        }
    };

    match href {
        Some(href) => view! { <a href=href class="feature-card clickable">{body()}</a> }.into_any(),
        None => view! {
            <div
                class="feature-card clickable"
                on:click=move |_| {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.run(());
                    }
                }
            >
                {body()}
            </div>
        }
        .into_any(),
    }
}
