//! Prediction routes: same-origin entry points the UI posts to.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use predict::{Answers, BackendStatus, ErrorBody, RiskModel, RiskPrediction, RiskReport, ScanArea, XrayReport};

use crate::services::backend::{BackendError, XrayUpload};
use crate::services::prediction::{self, PredictionError};
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

/// Route-level failure rendered as `{ "error": ... }`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Prediction(PredictionError),
}

impl ApiError {
    /// 413 keeps its own status; every other extractor failure is a 400.
    fn rejected(status: StatusCode, too_large: &str, detail: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(too_large.to_owned())
        } else {
            Self::BadRequest(detail)
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), "request body too large", rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::rejected(rejection.status(), "file too large", rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::rejected(e.status(), "file too large", format!("malformed upload: {}", e.body_text()))
    }
}

impl From<PredictionError> for ApiError {
    fn from(e: PredictionError) -> Self {
        Self::Prediction(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::PayloadTooLarge(message) => (StatusCode::PAYLOAD_TOO_LARGE, message),
            Self::Prediction(e) => (prediction_error_to_status(&e), e.to_string()),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub(crate) fn prediction_error_to_status(err: &PredictionError) -> StatusCode {
    match err {
        PredictionError::InvalidAnswers(_) => StatusCode::BAD_REQUEST,
        PredictionError::InvalidConfidence(_) | PredictionError::InvalidRisk { .. } => StatusCode::BAD_GATEWAY,
        PredictionError::Backend(_) | PredictionError::Model { .. } => {
            err.backend_error().map_or(StatusCode::BAD_GATEWAY, backend_error_to_status)
        }
    }
}

fn backend_error_to_status(err: &BackendError) -> StatusCode {
    match err {
        BackendError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
        BackendError::Status { status: 400..=499, .. } => StatusCode::BAD_REQUEST,
        BackendError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        BackendError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        BackendError::Unreachable(_) | BackendError::Status { .. } | BackendError::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn parse_area(raw: &str) -> Result<ScanArea, ApiError> {
    raw.parse().map_err(|e: predict::ParseError| ApiError::BadRequest(e.to_string()))
}

fn parse_model(raw: &str) -> Result<RiskModel, ApiError> {
    raw.parse().map_err(|e: predict::ParseError| ApiError::BadRequest(e.to_string()))
}

/// Accept declared image types; a part with no declared type is passed through.
pub(crate) fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_none_or(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/predict/xray/{area}`: forward the multipart `file` field.
pub async fn xray(
    State(state): State<AppState>,
    Path(area): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<XrayReport>, ApiError> {
    let area = parse_area(&area)?;
    let mut multipart = multipart?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().map(ToOwned::to_owned);
        if !is_image_content_type(content_type.as_deref()) {
            return Err(ApiError::BadRequest("file must be an image".into()));
        }
        let bytes = field.bytes().await?;
        upload = Some(XrayUpload { file_name, content_type, bytes: bytes.to_vec() });
    }

    let upload = upload
        .filter(|u| !u.bytes.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No file uploaded".into()))?;

    let report = prediction::xray_report(state.backend.as_ref(), area, upload).await?;
    Ok(Json(report))
}

/// `POST /api/predict/risk`: score the questionnaire with all three models.
pub async fn risk(
    State(state): State<AppState>,
    answers: Result<Json<Answers>, JsonRejection>,
) -> Result<Json<RiskReport>, ApiError> {
    let Json(answers) = answers?;
    let report = prediction::risk_report(state.backend.as_ref(), &answers).await?;
    Ok(Json(report))
}

/// `POST /api/predict/risk/{model}`: score the questionnaire with one model.
pub async fn risk_model(
    State(state): State<AppState>,
    Path(model): Path<String>,
    answers: Result<Json<Answers>, JsonRejection>,
) -> Result<Json<RiskPrediction>, ApiError> {
    let model = parse_model(&model)?;
    let Json(answers) = answers?;
    let prediction = prediction::single_risk(state.backend.as_ref(), model, &answers).await?;
    Ok(Json(prediction))
}

/// `GET /api/backend/status`: whether the prediction backend answers.
pub async fn backend_status(State(state): State<AppState>) -> Json<BackendStatus> {
    let reachable = match state.backend.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "prediction backend ping failed");
            false
        }
    };
    Json(BackendStatus { reachable, backend_url: state.backend.base_url().to_owned() })
}
