use super::*;
use crate::state::test_helpers::MockBackend;
use predict::Assessment;

fn upload(name: &str) -> XrayUpload {
    XrayUpload { file_name: name.into(), content_type: Some("image/png".into()), bytes: vec![7; 16] }
}

#[tokio::test]
async fn xray_report_bands_backend_confidence() {
    let backend = MockBackend::new().with_confidence(0.8);
    let report = xray_report(&backend, ScanArea::Lungs, upload("chest.png")).await.unwrap();
    assert_eq!(report.area, ScanArea::Lungs);
    assert_eq!(report.assessment, Assessment::HighLikelihood);
    assert_eq!(report.confidence.percent(), "80.00%");
    assert_eq!(backend.calls(), vec!["xray:lungs:chest.png".to_owned()]);
}

#[tokio::test]
async fn xray_report_rejects_out_of_range_confidence() {
    let backend = MockBackend::new().with_confidence(1.5);
    let err = xray_report(&backend, ScanArea::Bones, upload("arm.png")).await.unwrap_err();
    assert!(matches!(err, PredictionError::InvalidConfidence(_)));
}

#[tokio::test]
async fn xray_report_surfaces_backend_failure() {
    let backend = MockBackend::new().failing_xray(400);
    let err = xray_report(&backend, ScanArea::Kidney, upload("k.png")).await.unwrap_err();
    assert!(matches!(err.backend_error(), Some(BackendError::Status { status: 400, .. })));
}

#[tokio::test]
async fn risk_report_calls_models_in_order() {
    let backend = MockBackend::new()
        .with_risk(RiskModel::Heart, 12.0)
        .with_risk(RiskModel::Diabetes, 34.5)
        .with_risk(RiskModel::Lung, 5.25);
    let answers: Answers = [("gender", "Male"), ("age", "51")].into_iter().collect();

    let report = risk_report(&backend, &answers).await.unwrap();
    assert_eq!(report, RiskReport { heart: 12.0, diabetes: 34.5, lung: 5.25 });
    assert_eq!(backend.calls(), vec!["risk:heart", "risk:diabetes", "risk:lung"]);
}

#[tokio::test]
async fn risk_report_stops_at_first_failing_model() {
    let backend = MockBackend::new().failing_model(RiskModel::Diabetes, 500);

    let err = risk_report(&backend, &Answers::new()).await.unwrap_err();
    assert!(matches!(err, PredictionError::Model { model: RiskModel::Diabetes, .. }));
    assert_eq!(backend.calls(), vec!["risk:heart", "risk:diabetes"]);
    assert_eq!(
        err.to_string(),
        "diabetes model failed: prediction backend returned status 500: model error"
    );
}

#[tokio::test]
async fn risk_report_validates_before_calling_backend() {
    let backend = MockBackend::new();
    let answers: Answers = [("age", "abc")].into_iter().collect();

    let err = risk_report(&backend, &answers).await.unwrap_err();
    assert!(matches!(err, PredictionError::InvalidAnswers(ref issues) if issues.len() == 1));
    assert_eq!(err.to_string(), "invalid answers: Age: enter a non-negative number");
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn single_risk_calls_only_requested_model() {
    let backend = MockBackend::new().with_risk(RiskModel::Lung, 71.0);
    let prediction = single_risk(&backend, RiskModel::Lung, &Answers::new()).await.unwrap();
    assert!((prediction.risk_percentage - 71.0).abs() < f64::EPSILON);
    assert_eq!(backend.calls(), vec!["risk:lung"]);
}

#[tokio::test]
async fn risk_report_rejects_out_of_range_percentage() {
    let backend = MockBackend::new().with_risk(RiskModel::Heart, 150.0);

    let err = risk_report(&backend, &Answers::new()).await.unwrap_err();
    assert!(matches!(err, PredictionError::InvalidRisk { model: RiskModel::Heart, .. }));
    assert_eq!(err.to_string(), "heart model returned an invalid score: risk percentage 150 is outside [0, 100]");
    assert!(err.backend_error().is_none());
    assert_eq!(backend.calls(), vec!["risk:heart"]);
}

#[tokio::test]
async fn single_risk_rejects_negative_percentage() {
    let backend = MockBackend::new().with_risk(RiskModel::Diabetes, -4.0);
    let err = single_risk(&backend, RiskModel::Diabetes, &Answers::new()).await.unwrap_err();
    assert!(matches!(err, PredictionError::InvalidRisk { model: RiskModel::Diabetes, .. }));
}
