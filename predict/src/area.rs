//! X-ray scan areas and their backend endpoints.

#[cfg(test)]
#[path = "area_test.rs"]
mod area_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Body region an uploaded X-ray belongs to. Each area is served by its own
/// image model on the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanArea {
    Kidney,
    Lungs,
    Bones,
}

impl ScanArea {
    /// All areas in the order the upload page offers them.
    pub const ALL: [Self; 3] = [Self::Kidney, Self::Lungs, Self::Bones];

    /// Human-readable button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kidney => "Kidney",
            Self::Lungs => "Lungs",
            Self::Bones => "Bones",
        }
    }

    /// Path segment used by the server's `/api/predict/xray/{area}` route.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Kidney => "kidney",
            Self::Lungs => "lungs",
            Self::Bones => "bones",
        }
    }

    /// Prediction backend endpoint for this area.
    #[must_use]
    pub fn backend_path(self) -> &'static str {
        match self {
            Self::Kidney => "/predict/xray/kidney",
            Self::Lungs => "/predict/xray/lung",
            Self::Bones => "/predict/xray/bones",
        }
    }
}

impl fmt::Display for ScanArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScanArea {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kidney" | "kidneys" => Ok(Self::Kidney),
            "lung" | "lungs" => Ok(Self::Lungs),
            "bone" | "bones" => Ok(Self::Bones),
            _ => Err(ParseError::UnknownArea(s.to_owned())),
        }
    }
}
