//! Prediction service: one backend round trip per page action.
//!
//! DESIGN
//! ======
//! Routes hand validated input here; this module calls the backend, checks
//! what came back, and shapes it into the report types the UI renders. The
//! questionnaire fans out to the three lifestyle models one after another
//! and stops at the first failure, so a report is either complete or absent.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use predict::{
    AnswerIssue, Answers, ConfidenceError, RiskModel, RiskPrediction, RiskRangeError, RiskReport, ScanArea, XrayReport,
};
use uuid::Uuid;

use super::backend::{BackendError, PredictBackend, XrayUpload};

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The backend returned a confidence that is not a probability.
    #[error("backend returned invalid confidence: {0}")]
    InvalidConfidence(#[from] ConfidenceError),

    /// One model of the questionnaire fan-out failed.
    #[error("{model} model failed: {source}")]
    Model {
        model: RiskModel,
        #[source]
        source: BackendError,
    },

    /// A model answered with a percentage outside `[0, 100]`.
    #[error("{model} model returned an invalid score: {source}")]
    InvalidRisk {
        model: RiskModel,
        #[source]
        source: RiskRangeError,
    },

    #[error("invalid answers: {}", join_issues(.0))]
    InvalidAnswers(Vec<AnswerIssue>),
}

impl PredictionError {
    /// The backend failure underneath, if any.
    #[must_use]
    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Self::Backend(e) | Self::Model { source: e, .. } => Some(e),
            Self::InvalidConfidence(_) | Self::InvalidRisk { .. } | Self::InvalidAnswers(_) => None,
        }
    }
}

fn join_issues(issues: &[AnswerIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Score one X-ray and band the result.
///
/// # Errors
///
/// Returns an error if the backend call fails or its confidence is out of range.
pub async fn xray_report(
    backend: &dyn PredictBackend,
    area: ScanArea,
    upload: XrayUpload,
) -> Result<XrayReport, PredictionError> {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, %area, file = %upload.file_name, bytes = upload.bytes.len(), "x-ray prediction requested");

    let prediction = backend.predict_xray(area, upload).await.inspect_err(|e| {
        tracing::warn!(%request_id, %area, error = %e, "x-ray prediction failed");
    })?;
    let report = XrayReport::from_prediction(area, prediction)?;

    tracing::info!(%request_id, %area, confidence = report.confidence.value(), assessment = ?report.assessment, "x-ray prediction complete");
    Ok(report)
}

/// Score the questionnaire against every lifestyle model in turn.
///
/// # Errors
///
/// Returns [`PredictionError::InvalidAnswers`] before any backend call if an
/// answer fails validation, or [`PredictionError::Model`] /
/// [`PredictionError::InvalidRisk`] for the first model that fails.
pub async fn risk_report(backend: &dyn PredictBackend, answers: &Answers) -> Result<RiskReport, PredictionError> {
    ensure_valid(answers)?;
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, answered = answers.len(), "risk questionnaire submitted");

    let mut scores = [0.0; 3];
    for (slot, model) in scores.iter_mut().zip(RiskModel::ALL) {
        let prediction = score(backend, model, answers).await.inspect_err(|e| {
            tracing::warn!(%request_id, %model, error = %e, "risk model failed");
        })?;
        *slot = prediction.risk_percentage;
    }

    let [heart, diabetes, lung] = scores;
    tracing::info!(%request_id, heart, diabetes, lung, "risk questionnaire scored");
    Ok(RiskReport { heart, diabetes, lung })
}

/// Score the questionnaire against a single model.
///
/// # Errors
///
/// Returns an error if validation or the backend call fails.
pub async fn single_risk(
    backend: &dyn PredictBackend,
    model: RiskModel,
    answers: &Answers,
) -> Result<RiskPrediction, PredictionError> {
    ensure_valid(answers)?;
    let prediction = score(backend, model, answers).await.inspect_err(|e| {
        tracing::warn!(%model, error = %e, "risk model failed");
    })?;
    tracing::info!(%model, risk = prediction.risk_percentage, "risk model scored");
    Ok(prediction)
}

/// One model call with its percentage range-checked.
async fn score(
    backend: &dyn PredictBackend,
    model: RiskModel,
    answers: &Answers,
) -> Result<RiskPrediction, PredictionError> {
    let prediction = backend
        .predict_risk(model, answers)
        .await
        .map_err(|source| PredictionError::Model { model, source })?;
    prediction.checked().map_err(|source| PredictionError::InvalidRisk { model, source })
}

fn ensure_valid(answers: &Answers) -> Result<(), PredictionError> {
    let issues = answers.validate();
    if issues.is_empty() { Ok(()) } else { Err(PredictionError::InvalidAnswers(issues)) }
}
