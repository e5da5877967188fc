use super::*;

#[test]
fn questionnaire_has_every_field_in_order() {
    assert_eq!(QUESTIONS.len(), 28);
    assert_eq!(QUESTIONS[0].id, "gender");
    assert_eq!(QUESTIONS[1].id, "age");
    assert_eq!(QUESTIONS.last().map(|q| q.id), Some("chest_pain"));
}

#[test]
fn question_ids_are_unique() {
    let mut ids: Vec<&str> = QUESTIONS.iter().map(|q| q.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), QUESTIONS.len());
}

#[test]
fn selects_have_options_and_numbers_do_not() {
    for q in QUESTIONS {
        match q.kind {
            QuestionKind::Select => assert!(!q.options.is_empty(), "{} has no options", q.id),
            QuestionKind::Number => assert!(q.options.is_empty(), "{} has options", q.id),
        }
    }
}

#[test]
fn only_bmi_and_lab_values_are_optional() {
    let optional: Vec<&str> = QUESTIONS.iter().filter(|q| q.optional).map(|q| q.id).collect();
    assert_eq!(optional, vec!["bmi", "hba1c_level", "blood_glucose_level"]);
}

#[test]
fn find_returns_question_by_id() {
    let q = find("General_Health").unwrap();
    assert_eq!(q.options, &["Poor", "Fair", "Good", "Very Good", "Excellent"]);
    assert!(find("nope").is_none());
}

#[test]
fn set_blank_clears_answer() {
    let mut answers = Answers::new();
    answers.set("age", "42");
    assert_eq!(answers.get("age"), Some("42"));
    answers.set("age", "  ");
    assert_eq!(answers.get("age"), None);
    assert!(answers.is_empty());
}

#[test]
fn answers_serialize_as_flat_string_object() {
    let answers: Answers = [("gender", "Female"), ("age", "42"), ("Exercise", "Yes")].into_iter().collect();
    assert_eq!(
        serde_json::to_value(&answers).unwrap(),
        serde_json::json!({"gender": "Female", "age": "42", "Exercise": "Yes"})
    );
}

#[test]
fn deserializing_drops_blank_answers() {
    let answers: Answers = serde_json::from_str(r#"{"bmi":""}"#).unwrap();
    assert!(answers.is_empty());
    assert!(answers.validate().is_empty());

    let answers: Answers = serde_json::from_str(r#"{"age":"44","hba1c_level":"  ","gender":"Male"}"#).unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get("hba1c_level"), None);
    assert_eq!(answers.get("age"), Some("44"));
}

#[test]
fn validate_accepts_partial_valid_answers() {
    let answers: Answers = [("gender", "Male"), ("height_cm", "172.5"), ("bmi", "24")].into_iter().collect();
    assert!(answers.validate().is_empty());
}

#[test]
fn validate_flags_bad_numbers_options_and_ids() {
    let answers: Answers =
        [("age", "forty"), ("weight_kg", "-3"), ("gender", "Other"), ("mystery", "1")].into_iter().collect();
    let issues = answers.validate();
    assert_eq!(issues.len(), 4);
    assert!(issues.contains(&AnswerIssue::NotANumber { id: "age", label: "Age" }));
    assert!(issues.contains(&AnswerIssue::NotANumber { id: "weight_kg", label: "Weight (kg)" }));
    assert!(issues.contains(&AnswerIssue::NotAnOption { id: "gender", label: "Gender" }));
    assert!(issues.contains(&AnswerIssue::UnknownQuestion("mystery".to_owned())));
}

#[test]
fn issue_messages_name_the_question() {
    let issue = AnswerIssue::NotANumber { id: "age", label: "Age" };
    assert_eq!(issue.to_string(), "Age: enter a non-negative number");
}

#[test]
fn answers_deserialize_from_flat_object() {
    let answers: Answers = serde_json::from_str(r#"{"gender":"Male","age":"30"}"#).unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get("gender"), Some("Male"));
}
