use super::*;

fn band(value: f64) -> Assessment {
    Assessment::from_confidence(Confidence::new(value).unwrap())
}

#[test]
fn high_confidence_renders_high_likelihood_in_red() {
    let assessment = band(0.8);
    assert_eq!(assessment, Assessment::HighLikelihood);
    assert_eq!(assessment.message(), "High likelihood of abnormality detected");
    assert_eq!(assessment.color(), "#ff6b6b");
}

#[test]
fn band_boundaries_are_inclusive_at_the_lower_edge() {
    assert_eq!(band(0.75), Assessment::HighLikelihood);
    assert_eq!(band(0.749_999), Assessment::Inconclusive);
    assert_eq!(band(0.4), Assessment::Inconclusive);
    assert_eq!(band(0.399_999), Assessment::NoSignificantAbnormality);
}

#[test]
fn extremes_map_to_outer_bands() {
    assert_eq!(band(0.0), Assessment::NoSignificantAbnormality);
    assert_eq!(band(1.0), Assessment::HighLikelihood);
}

#[test]
fn inconclusive_is_yellow_and_clear_is_green() {
    assert_eq!(Assessment::Inconclusive.color(), "#facc15");
    assert_eq!(Assessment::NoSignificantAbnormality.color(), "#4ade80");
    assert!(Assessment::Inconclusive.message().starts_with("Inconclusive"));
}

#[test]
fn confidence_rejects_out_of_range_and_non_finite() {
    assert_eq!(Confidence::new(1.2), Err(ConfidenceError(1.2)));
    assert_eq!(Confidence::new(-0.1), Err(ConfidenceError(-0.1)));
    assert!(Confidence::new(f64::NAN).is_err());
    assert!(Confidence::new(f64::INFINITY).is_err());
}

#[test]
fn percent_has_two_decimals() {
    assert_eq!(Confidence::new(0.8).unwrap().percent(), "80.00%");
    assert_eq!(format_percent(0.123_456), "12.35%");
    assert_eq!(format_percent(0.0), "0.00%");
}

#[test]
fn confidence_deserialize_validates() {
    assert!(serde_json::from_str::<Confidence>("0.5").is_ok());
    assert!(serde_json::from_str::<Confidence>("3.0").is_err());
}

#[test]
fn report_from_prediction_keeps_label_and_bands() {
    let prediction = XrayPrediction { confidence: 0.91, label: Some("Pneumonia Detected".into()) };
    let report = XrayReport::from_prediction(ScanArea::Lungs, prediction).unwrap();
    assert_eq!(report.area, ScanArea::Lungs);
    assert_eq!(report.assessment, Assessment::HighLikelihood);
    assert_eq!(report.label.as_deref(), Some("Pneumonia Detected"));
}

#[test]
fn report_from_prediction_rejects_bad_confidence() {
    let prediction = XrayPrediction { confidence: 7.0, label: None };
    assert!(XrayReport::from_prediction(ScanArea::Bones, prediction).is_err());
}

#[test]
fn report_json_omits_missing_label() {
    let report = XrayReport::from_prediction(ScanArea::Kidney, XrayPrediction { confidence: 0.2, label: None }).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"area": "kidney", "confidence": 0.2, "assessment": "no_significant_abnormality"})
    );
}
