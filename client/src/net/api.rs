//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` carrying the server's `error` text
//! when it sent one. Pages log the detail and show their own generic
//! message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use predict::{Answers, BackendStatus, RiskReport};
#[cfg(any(test, feature = "hydrate"))]
use predict::ScanArea;
#[cfg(feature = "hydrate")]
use predict::XrayReport;

#[cfg(any(test, feature = "hydrate"))]
const RISK_ENDPOINT: &str = "/api/predict/risk";

#[cfg(any(test, feature = "hydrate"))]
const STATUS_ENDPOINT: &str = "/api/backend/status";

#[cfg(any(test, feature = "hydrate"))]
fn xray_endpoint(area: ScanArea) -> String {
    format!("/api/predict/xray/{}", area.slug())
}

/// Prefer the server's `{ "error": ... }` text; fall back to the status.
#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<predict::ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => parsed.error,
        _ => format!("request failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(request_failed_message(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Upload an image for the given area via `POST /api/predict/xray/{area}`.
#[cfg(feature = "hydrate")]
pub async fn predict_xray(area: ScanArea, file: &web_sys::File) -> Result<XrayReport, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{e:?}"))?;
    let resp = gloo_net::http::Request::post(&xray_endpoint(area))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(resp).await
}

/// Score the questionnaire with every risk model via `POST /api/predict/risk`.
pub async fn submit_questionnaire(answers: &Answers) -> Result<RiskReport, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(RISK_ENDPOINT)
            .json(answers)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = answers;
        Err("not available on server".to_owned())
    }
}

/// Ask the server whether the prediction backend is up.
/// Returns `None` if the server cannot be reached or on the server.
pub async fn fetch_backend_status() -> Option<BackendStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(STATUS_ENDPOINT).send().await.ok()?;
        decode(resp).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
