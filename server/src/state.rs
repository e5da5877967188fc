//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the prediction backend handle and the upload
//! size cap. Requests share nothing else.

use std::sync::Arc;

use crate::services::backend::PredictBackend;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the backend is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn PredictBackend>,
    pub max_upload_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn PredictBackend>, max_upload_bytes: usize) -> Self {
        Self { backend, max_upload_bytes }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use predict::{Answers, RiskModel, RiskPrediction, ScanArea, XrayPrediction};

    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
    use crate::services::backend::{BackendError, XrayUpload};

    /// Scripted backend that records every call it receives.
    pub struct MockBackend {
        confidence: f64,
        xray_failure: Option<u16>,
        risks: HashMap<RiskModel, f64>,
        risk_failures: HashMap<RiskModel, u16>,
        reachable: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockBackend {
        #[must_use]
        pub fn new() -> Self {
            Self {
                confidence: 0.5,
                xray_failure: None,
                risks: HashMap::new(),
                risk_failures: HashMap::new(),
                reachable: true,
                calls: Mutex::new(Vec::new()),
            }
        }

        #[must_use]
        pub fn with_confidence(mut self, confidence: f64) -> Self {
            self.confidence = confidence;
            self
        }

        #[must_use]
        pub fn failing_xray(mut self, status: u16) -> Self {
            self.xray_failure = Some(status);
            self
        }

        #[must_use]
        pub fn with_risk(mut self, model: RiskModel, percentage: f64) -> Self {
            self.risks.insert(model, percentage);
            self
        }

        #[must_use]
        pub fn failing_model(mut self, model: RiskModel, status: u16) -> Self {
            self.risk_failures.insert(model, status);
            self
        }

        #[must_use]
        pub fn unreachable(mut self) -> Self {
            self.reachable = false;
            self
        }

        /// Calls received so far, e.g. `["xray:lungs:chest.png", "risk:heart"]`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("mock mutex should lock").clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().expect("mock mutex should lock").push(call);
        }
    }

    impl Default for MockBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait::async_trait]
    impl PredictBackend for MockBackend {
        fn base_url(&self) -> &str {
            "http://mock-backend"
        }

        async fn predict_xray(&self, area: ScanArea, upload: XrayUpload) -> Result<XrayPrediction, BackendError> {
            self.record(format!("xray:{}:{}", area.slug(), upload.file_name));
            if let Some(status) = self.xray_failure {
                return Err(BackendError::Status { status, message: "No file uploaded".into() });
            }
            Ok(XrayPrediction { confidence: self.confidence, label: None })
        }

        async fn predict_risk(&self, model: RiskModel, _answers: &Answers) -> Result<RiskPrediction, BackendError> {
            self.record(format!("risk:{model}"));
            if let Some(status) = self.risk_failures.get(&model) {
                return Err(BackendError::Status { status: *status, message: "model error".into() });
            }
            Ok(RiskPrediction { risk_percentage: self.risks.get(&model).copied().unwrap_or_default() })
        }

        async fn ping(&self) -> Result<(), BackendError> {
            if self.reachable { Ok(()) } else { Err(BackendError::Unreachable("connection refused".into())) }
        }
    }

    /// Create a test `AppState` around a scripted backend.
    #[must_use]
    pub fn test_app_state(backend: Arc<MockBackend>) -> AppState {
        AppState::new(backend, DEFAULT_MAX_UPLOAD_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_clones_share_backend() {
        let backend = Arc::new(test_helpers::MockBackend::new());
        let state = test_helpers::test_app_state(backend.clone());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.backend, &cloned.backend));
        assert_eq!(cloned.backend.base_url(), "http://mock-backend");
    }
}
