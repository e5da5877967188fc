//! Shared prediction vocabulary for the Aarogya UI, server, and CLI.
//!
//! This crate owns the names and shapes that cross the HTTP boundary: which
//! scan areas and risk models exist, what the prediction backend returns,
//! how a confidence score is banded for display, and the static
//! questionnaire. It performs no I/O.

pub mod area;
pub mod assessment;
pub mod questionnaire;
pub mod risk;
pub mod wire;

pub use area::ScanArea;
pub use assessment::{Assessment, Confidence, ConfidenceError, XrayReport, format_percent};
pub use questionnaire::{AnswerIssue, Answers, QUESTIONS, Question, QuestionKind};
pub use risk::{RiskModel, RiskReport};
pub use wire::{BackendStatus, ErrorBody, RiskPrediction, RiskRangeError, XrayPrediction};

/// Error returned when parsing a [`ScanArea`] or [`RiskModel`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not name a known scan area.
    #[error("unknown scan area: {0}")]
    UnknownArea(String),
    /// The text does not name a known risk model.
    #[error("unknown risk model: {0}")]
    UnknownModel(String),
}
