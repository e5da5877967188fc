//! Result panel for a completed X-ray scan.

#[cfg(test)]
#[path = "assessment_panel_test.rs"]
mod assessment_panel_test;

use leptos::prelude::*;
use predict::{Assessment, XrayReport};

fn verdict_style(assessment: Assessment) -> String {
    format!("color: {}", assessment.color())
}

#[component]
pub fn AssessmentPanel(report: XrayReport) -> impl IntoView {
    let style = verdict_style(report.assessment);
    view! {
        <div class="assessment">
            <p class="assessment__verdict" style=style>
                <b>"Assessment: "</b>
                {report.assessment.message()}
            </p>
            {report.label.map(|label| view! {
                <p class="assessment__label">
                    <b>"Finding: "</b>
                    {label}
                </p>
            })}
            <p class="assessment__confidence">
                <b>"Confidence: "</b>
                {report.confidence.percent()}
            </p>
        </div>
    }
}
