//! The three risk percentages returned for a questionnaire.

#[cfg(test)]
#[path = "risk_summary_test.rs"]
mod risk_summary_test;

use leptos::prelude::*;
use predict::{RiskModel, RiskReport};

fn model_icon(model: RiskModel) -> &'static str {
    match model {
        RiskModel::Heart => "❤️",
        RiskModel::Diabetes => "🩸",
        RiskModel::Lung => "🫁",
    }
}

/// Risk percentages arrive on a 0–100 scale.
fn format_risk(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

#[component]
pub fn RiskSummary(report: RiskReport) -> impl IntoView {
    view! {
        <div class="result-box">
            <h3>"Risk Assessment Result"</h3>
            {report
                .entries()
                .into_iter()
                .map(|(model, percentage)| view! {
                    <p class="result-box__row">
                        {format!("{} {}: ", model_icon(model), model.title())}
                        <strong>{format_risk(percentage)}</strong>
                    </p>
                })
                .collect_view()}
        </div>
    }
}
