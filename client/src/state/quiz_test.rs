use super::*;

fn report() -> RiskReport {
    RiskReport { heart: 12.5, diabetes: 40.0, lung: 3.25 }
}

#[test]
fn answers_are_recorded_and_cleared() {
    let mut state = QuizState::default();
    state.answer("age", "45".into());
    assert_eq!(state.value("age"), "45");
    state.answer("age", String::new());
    assert_eq!(state.value("age"), "");
    assert!(state.answers.is_empty());
}

#[test]
fn empty_questionnaire_can_be_submitted() {
    let mut state = QuizState::default();
    let sent = state.begin_submit().unwrap();
    assert!(sent.is_empty());
    assert!(state.loading);
    assert_eq!(state.submit_label(), "Analyzing...");
}

#[test]
fn submit_sends_a_snapshot_of_the_answers() {
    let mut state = QuizState::default();
    state.answer("gender", "Female".into());
    state.answer("age", "52".into());
    let sent = state.begin_submit().unwrap();
    assert_eq!(sent.get("gender"), Some("Female"));
    assert_eq!(sent.get("age"), Some("52"));
}

#[test]
fn invalid_answers_block_submission() {
    let mut state = QuizState::default();
    state.answer("age", "forty".into());
    state.answer("Exercise", "Sometimes".into());

    assert_eq!(state.begin_submit(), None);
    assert!(!state.loading);
    assert_eq!(state.issues.len(), 2);
    assert!(state.issues.iter().any(|i| i == "Age: enter a non-negative number"));
    assert!(state.issues.iter().any(|i| i == "Do you exercise regularly?: choose one of the listed options"));
}

#[test]
fn fixing_answers_clears_issues_on_next_submit() {
    let mut state = QuizState::default();
    state.answer("age", "-3".into());
    assert_eq!(state.begin_submit(), None);
    assert!(!state.issues.is_empty());

    state.answer("age", "30".into());
    assert!(state.begin_submit().is_some());
    assert!(state.issues.is_empty());
}

#[test]
fn second_submit_is_refused_while_in_flight() {
    let mut state = QuizState::default();
    assert!(state.begin_submit().is_some());
    assert_eq!(state.begin_submit(), None);
}

#[test]
fn success_shows_all_three_percentages() {
    let mut state = QuizState::default();
    state.begin_submit();
    state.finish_submit(Ok(report()));
    assert!(!state.loading);
    assert_eq!(state.report, Some(report()));
    assert_eq!(state.error, None);
    assert_eq!(state.submit_label(), "Submit Questionnaire");
}

#[test]
fn failure_shows_generic_message_and_no_result() {
    let mut state = QuizState::default();
    state.begin_submit();
    state.finish_submit(Err("lung model failed: status 500".into()));
    assert_eq!(state.report, None);
    assert_eq!(state.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
}

#[test]
fn resubmitting_clears_the_previous_outcome() {
    let mut state = QuizState::default();
    state.begin_submit();
    state.finish_submit(Err("boom".into()));
    state.begin_submit();
    assert_eq!(state.error, None);
    assert_eq!(state.report, None);
}
