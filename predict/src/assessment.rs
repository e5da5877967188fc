//! Confidence banding for X-ray predictions.
//!
//! DESIGN
//! ======
//! The backend returns a bare probability. The UI never shows that number
//! alone: it is bucketed into one of three qualitative bands, each with a
//! fixed message and colour, and the raw value is shown beside it as a
//! percentage.

#[cfg(test)]
#[path = "assessment_test.rs"]
mod assessment_test;

use serde::{Deserialize, Serialize};

use crate::area::ScanArea;
use crate::wire::XrayPrediction;

/// Lower bound (inclusive) of the high-likelihood band.
pub const HIGH_LIKELIHOOD_THRESHOLD: f64 = 0.75;
/// Lower bound (inclusive) of the inconclusive band.
pub const INCONCLUSIVE_THRESHOLD: f64 = 0.4;

/// Rejected confidence value.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("confidence {0} is outside [0, 1]")]
pub struct ConfidenceError(pub f64);

/// A model confidence known to be finite and within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// # Errors
    ///
    /// Returns [`ConfidenceError`] for NaN, infinities, and values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, ConfidenceError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfidenceError(value))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Display form, e.g. `80.00%`.
    #[must_use]
    pub fn percent(self) -> String {
        format_percent(self.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

/// Format a `[0, 1]` fraction as a percentage with two decimals.
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Qualitative band a confidence falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    HighLikelihood,
    Inconclusive,
    NoSignificantAbnormality,
}

impl Assessment {
    #[must_use]
    pub fn from_confidence(confidence: Confidence) -> Self {
        let value = confidence.value();
        if value >= HIGH_LIKELIHOOD_THRESHOLD {
            Self::HighLikelihood
        } else if value >= INCONCLUSIVE_THRESHOLD {
            Self::Inconclusive
        } else {
            Self::NoSignificantAbnormality
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::HighLikelihood => "High likelihood of abnormality detected",
            Self::Inconclusive => "Inconclusive \u{2014} further evaluation recommended",
            Self::NoSignificantAbnormality => "No significant abnormality detected",
        }
    }

    /// CSS colour the assessment line is rendered in.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::HighLikelihood => "#ff6b6b",
            Self::Inconclusive => "#facc15",
            Self::NoSignificantAbnormality => "#4ade80",
        }
    }
}

/// Banded X-ray result returned by the server to the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XrayReport {
    pub area: ScanArea,
    pub confidence: Confidence,
    /// Model-specific label, only some backends send one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub assessment: Assessment,
}

impl XrayReport {
    /// Validate and band a raw backend prediction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfidenceError`] if the backend's confidence is not a valid probability.
    pub fn from_prediction(area: ScanArea, prediction: XrayPrediction) -> Result<Self, ConfidenceError> {
        let confidence = Confidence::new(prediction.confidence)?;
        Ok(Self { area, confidence, label: prediction.label, assessment: Assessment::from_confidence(confidence) })
    }
}
