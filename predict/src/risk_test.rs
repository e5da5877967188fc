use super::*;

#[test]
fn submission_order_is_heart_diabetes_lung() {
    assert_eq!(RiskModel::ALL, [RiskModel::Heart, RiskModel::Diabetes, RiskModel::Lung]);
}

#[test]
fn backend_paths_match_prediction_service() {
    assert_eq!(RiskModel::Heart.backend_path(), "/predict/heart");
    assert_eq!(RiskModel::Diabetes.backend_path(), "/predict/diabetes");
    assert_eq!(RiskModel::Lung.backend_path(), "/predict/lung");
}

#[test]
fn from_str_is_case_insensitive() {
    assert_eq!("HEART".parse::<RiskModel>(), Ok(RiskModel::Heart));
    assert_eq!("lungs".parse::<RiskModel>(), Ok(RiskModel::Lung));
    assert!(matches!("kidney".parse::<RiskModel>(), Err(ParseError::UnknownModel(_))));
}

#[test]
fn report_get_and_entries_agree() {
    let report = RiskReport { heart: 12.5, diabetes: 40.0, lung: 3.25 };
    assert!((report.get(RiskModel::Diabetes) - 40.0).abs() < f64::EPSILON);
    let entries = report.entries();
    assert_eq!(entries[0].0, RiskModel::Heart);
    assert!((entries[0].1 - 12.5).abs() < f64::EPSILON);
    assert_eq!(entries[2].0, RiskModel::Lung);
    assert!((entries[2].1 - 3.25).abs() < f64::EPSILON);
}

#[test]
fn report_serializes_with_model_keys() {
    let report = RiskReport { heart: 1.0, diabetes: 2.0, lung: 3.0 };
    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value, serde_json::json!({"heart": 1.0, "diabetes": 2.0, "lung": 3.0}));
}
