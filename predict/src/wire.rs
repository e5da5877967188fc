//! JSON bodies exchanged with the prediction backend.

use serde::{Deserialize, Serialize};

/// Response of `/predict/xray/*`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XrayPrediction {
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Response of `/predict/{heart,diabetes,lung}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub risk_percentage: f64,
}

/// Rejected risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("risk percentage {0} is outside [0, 100]")]
pub struct RiskRangeError(pub f64);

impl RiskPrediction {
    /// Pass the prediction through if its percentage is finite and within `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns [`RiskRangeError`] for NaN, infinities, and out-of-range values.
    pub fn checked(self) -> Result<Self, RiskRangeError> {
        if self.risk_percentage.is_finite() && (0.0..=100.0).contains(&self.risk_percentage) {
            Ok(self)
        } else {
            Err(RiskRangeError(self.risk_percentage))
        }
    }
}

/// Error body used by both the backend and the server's API routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Reachability of the prediction backend as seen by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub reachable: bool,
    pub backend_url: String,
}
