//! X-ray upload page: pick a body area, attach an image, scan it.
//!
//! DESIGN
//! ======
//! The selected file stays in the hidden `<input type="file">`; state only
//! tracks its name. Choosing a different area resets the input so the same
//! file can be picked again and fire a fresh change event.

use leptos::prelude::*;
use predict::ScanArea;

use crate::components::assessment_panel::AssessmentPanel;
use crate::components::site_header::{BackLink, SiteHeader};
use crate::state::xray::XrayState;

#[component]
pub fn XrayPage() -> impl IntoView {
    let state = RwSignal::new(XrayState::default());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_area = move |area: ScanArea| {
        state.update(|s| s.select_area(area));
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_ref.get() {
                input.set_value("");
            }
        }
    };

    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_ref.get() {
                input.click();
            }
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            state.update(|s| s.attach_file(name));
        }
    };

    let on_scan = move |_| {
        let mut started = None;
        state.update(|s| started = s.begin_scan());
        let Some(area) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let file = file_ref.get().and_then(|input| input.files()).and_then(|files| files.get(0));
            leptos::task::spawn_local(async move {
                let result = match file {
                    Some(file) => crate::net::api::predict_xray(area, &file).await,
                    None => Err("no file selected".to_owned()),
                };
                if let Err(e) = &result {
                    log::warn!("x-ray scan failed for {area}: {e}");
                }
                state.update(|s| s.finish_scan(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = area;
        }
    };

    view! {
        <SiteHeader/>
        <div class="page-container">
            <BackLink/>
            <h2>"X-Ray Upload"</h2>

            <div class="area-picker">
                {ScanArea::ALL
                    .into_iter()
                    .map(|area| view! {
                        <button
                            class="btn"
                            class:btn--selected=move || state.with(|s| s.area == Some(area))
                            disabled=move || state.with(|s| s.loading)
                            on:click=move |_| on_area(area)
                        >
                            {area.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <input node_ref=file_ref type="file" accept="image/*" style="display: none" on:change=on_file_change/>
            <button class="btn" disabled=move || !state.with(XrayState::can_pick_file) on:click=on_pick>
                {move || state.with(XrayState::picker_label)}
            </button>
            <Show when=move || state.with(|s| s.file_name.is_some())>
                <p class="xray__file-name">{move || state.with(|s| s.file_name.clone().unwrap_or_default())}</p>
            </Show>

            <button class="btn btn--primary" disabled=move || !state.with(XrayState::can_scan) on:click=on_scan>
                {move || state.with(XrayState::scan_label)}
            </button>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="xray__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || state.with(|s| s.report.clone()).map(|report| view! { <AssessmentPanel report=report/> })}
        </div>
    }
}
