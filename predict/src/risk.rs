//! Lifestyle risk models and the combined questionnaire report.

#[cfg(test)]
#[path = "risk_test.rs"]
mod risk_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A chronic-disease model scored from questionnaire answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskModel {
    Heart,
    Diabetes,
    Lung,
}

impl RiskModel {
    /// Models in the order the questionnaire submits to them.
    pub const ALL: [Self; 3] = [Self::Heart, Self::Diabetes, Self::Lung];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Diabetes => "diabetes",
            Self::Lung => "lung",
        }
    }

    #[must_use]
    pub fn backend_path(self) -> &'static str {
        match self {
            Self::Heart => "/predict/heart",
            Self::Diabetes => "/predict/diabetes",
            Self::Lung => "/predict/lung",
        }
    }

    /// Result line title shown next to the percentage.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Heart => "Heart Disease Risk",
            Self::Diabetes => "Diabetes Risk",
            Self::Lung => "Lung Cancer Risk",
        }
    }
}

impl fmt::Display for RiskModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for RiskModel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heart" => Ok(Self::Heart),
            "diabetes" => Ok(Self::Diabetes),
            "lung" | "lungs" => Ok(Self::Lung),
            _ => Err(ParseError::UnknownModel(s.to_owned())),
        }
    }
}

/// Risk percentages (0-100) from all three models for one questionnaire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub heart: f64,
    pub diabetes: f64,
    pub lung: f64,
}

impl RiskReport {
    #[must_use]
    pub fn get(&self, model: RiskModel) -> f64 {
        match model {
            RiskModel::Heart => self.heart,
            RiskModel::Diabetes => self.diabetes,
            RiskModel::Lung => self.lung,
        }
    }

    /// `(model, percentage)` pairs in display order.
    #[must_use]
    pub fn entries(&self) -> [(RiskModel, f64); 3] {
        RiskModel::ALL.map(|model| (model, self.get(model)))
    }
}
