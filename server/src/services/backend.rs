//! Prediction backend client.
//!
//! DESIGN
//! ======
//! `PredictBackend` is the seam between request handling and the external
//! model service so routes and services can be exercised against a mock.
//! `HttpBackend` is the real implementation: a thin `reqwest` wrapper that
//! posts images as multipart and answers as JSON. Response parsing lives in
//! pure functions for testability.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use predict::{Answers, ErrorBody, RiskModel, RiskPrediction, ScanArea, XrayPrediction};

use crate::config::BackendConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the prediction backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The upload could not be turned into a multipart part.
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// Connection refused, DNS failure, reset, or similar.
    #[error("prediction backend unreachable: {0}")]
    Unreachable(String),

    /// The request exceeded the configured timeout.
    #[error("prediction backend timed out")]
    Timeout,

    /// The backend answered with a non-success status.
    #[error("prediction backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend body could not be deserialized.
    #[error("prediction backend response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// An uploaded X-ray image on its way to the backend.
#[derive(Debug, Clone)]
pub struct XrayUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[async_trait::async_trait]
pub trait PredictBackend: Send + Sync {
    /// Base URL requests are sent to, for status reporting.
    fn base_url(&self) -> &str;

    /// Score one X-ray image with the model for `area`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or the response is malformed.
    async fn predict_xray(&self, area: ScanArea, upload: XrayUpload) -> Result<XrayPrediction, BackendError>;

    /// Score questionnaire answers with one lifestyle model.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or the response is malformed.
    async fn predict_risk(&self, model: RiskModel, answers: &Answers) -> Result<RiskPrediction, BackendError>;

    /// Check that the backend answers its liveness route.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend cannot be reached or answers non-2xx.
    async fn ping(&self) -> Result<(), BackendError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, BackendError> {
        let response = request.send().await.map_err(send_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(send_error)?;

        if !(200..300).contains(&status) {
            return Err(BackendError::Status { status, message: error_message(status, &text) });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl PredictBackend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn predict_xray(&self, area: ScanArea, upload: XrayUpload) -> Result<XrayPrediction, BackendError> {
        let mut part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| BackendError::InvalidUpload(e.to_string()))?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let text = self
            .send(self.http.post(self.url(area.backend_path())).multipart(form))
            .await?;
        parse_xray(&text)
    }

    async fn predict_risk(&self, model: RiskModel, answers: &Answers) -> Result<RiskPrediction, BackendError> {
        let text = self
            .send(self.http.post(self.url(model.backend_path())).json(answers))
            .await?;
        parse_risk(&text)
    }

    async fn ping(&self) -> Result<(), BackendError> {
        self.send(self.http.get(self.url("/"))).await.map(|_| ())
    }
}

fn send_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() { BackendError::Timeout } else { BackendError::Unreachable(e.to_string()) }
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_xray(json: &str) -> Result<XrayPrediction, BackendError> {
    serde_json::from_str(json).map_err(|e| BackendError::Parse(e.to_string()))
}

pub(crate) fn parse_risk(json: &str) -> Result<RiskPrediction, BackendError> {
    serde_json::from_str(json).map_err(|e| BackendError::Parse(e.to_string()))
}

/// Best human-readable message for a failed backend response: the `error`
/// field when the body is an error object, else the raw body, else the status.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { format!("status {status}") } else { trimmed.to_owned() }
}
